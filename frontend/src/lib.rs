#![recursion_limit = "256"]

use std::time::Duration;
use yew::prelude::*;
use yew::services::interval::{IntervalService, IntervalTask};
use wasm_bindgen::prelude::*;
use life::pattern::{self, DEFAULT_PATTERN};
use life::{Coord, Generation, PatternId, GAME_OF_LIFE};

const GRID_ROWS: i64 = 40;
const GRID_COLS: i64 = 60;
const CELL_SIZE: u32 = 14;
const OCCUPIED_COLOR: &str = "#2d7d46";
const VACANT_COLOR: &str = "#e8e8e8";

/// Simulation mode. Editing is only allowed in `Init`; the clock only runs
/// in `Play`. Reset is the sole way back to `Init`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Mode {
  Init,
  Play,
  Pause,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Speed {
  Slow,
  Normal,
  Fast,
}

impl Speed {
  const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

  fn label(self) -> &'static str {
    match self {
      Speed::Slow => "Slow",
      Speed::Normal => "Normal",
      Speed::Fast => "Fast",
    }
  }

  fn value(self) -> u64 {
    match self {
      Speed::Slow => 10,
      Speed::Normal => 20,
      Speed::Fast => 30,
    }
  }

  fn interval(self) -> Duration {
    Duration::from_millis(2000 / self.value())
  }
}

struct Model {
  link: ComponentLink<Self>,
  gen: Generation,
  pattern: PatternId,
  mode: Mode,
  speed: Speed,
  num_gen: usize,
  picker_open: bool,
  clock: Option<IntervalTask>,
}

enum Msg {
  Tick,
  Run,
  Pause,
  Reset,
  ToggleCell(i64, i64),
  Pick(PatternId),
  SetSpeed(Speed),
  OpenPicker,
  ClosePicker,
}

impl Component for Model {
  type Message = Msg;
  type Properties = ();

  fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
    Self {
      link,
      gen: pattern::seed(DEFAULT_PATTERN, GRID_COLS, GRID_ROWS),
      pattern: DEFAULT_PATTERN,
      mode: Mode::Init,
      speed: Speed::Normal,
      num_gen: 0,
      picker_open: false,
      clock: None,
    }
  }

  fn update(&mut self, msg: Self::Message) -> ShouldRender {
    match msg {
      Msg::Tick => {
        self.gen = self.gen.step(GAME_OF_LIFE);
        self.num_gen += 1;
        true
      }
      Msg::Run => {
        self.mode = Mode::Play;
        self.clock = Some(self.spawn_clock());
        true
      }
      Msg::Pause => {
        self.mode = Mode::Pause;
        self.clock = None;
        true
      }
      Msg::Reset => {
        self.mode = Mode::Init;
        self.clock = None;
        self.num_gen = 0;
        self.gen = pattern::seed(self.pattern, GRID_COLS, GRID_ROWS);
        true
      }
      Msg::ToggleCell(row, col) => {
        if self.mode == Mode::Init {
          self.gen = self.gen.toggle(Coord::new(row, col));
          true
        } else {
          false
        }
      }
      Msg::Pick(id) => {
        self.pattern = id;
        self.mode = Mode::Init;
        self.clock = None;
        self.num_gen = 0;
        self.gen = pattern::seed(id, GRID_COLS, GRID_ROWS);
        self.picker_open = false;
        true
      }
      Msg::SetSpeed(speed) => {
        if self.speed == speed {
          return false;
        }
        self.speed = speed;
        if self.mode == Mode::Play {
          self.clock = Some(self.spawn_clock());
        }
        true
      }
      Msg::OpenPicker => {
        self.picker_open = true;
        true
      }
      Msg::ClosePicker => {
        self.picker_open = false;
        true
      }
    }
  }

  fn change(&mut self, _: Self::Properties) -> ShouldRender {
    false
  }

  fn view(&self) -> Html {
    html! {
      <div style="display: flex; font-family: sans-serif;">
        { self.view_sidebar() }
        { self.view_grid() }
        { self.view_picker() }
      </div>
    }
  }
}

impl Model {
  fn spawn_clock(&self) -> IntervalTask {
    IntervalService::spawn(
      self.speed.interval(),
      self.link.callback(|_| Msg::Tick),
    )
  }

  fn view_sidebar(&self) -> Html {
    let run_button = match self.mode {
      Mode::Init => html! {
        <button onclick=self.link.callback(|_| Msg::Run)>{ "Run" }</button>
      },
      Mode::Play => html! {
        <button onclick=self.link.callback(|_| Msg::Pause)>{ "Pause" }</button>
      },
      Mode::Pause => html! {
        <button onclick=self.link.callback(|_| Msg::Run)>{ "Resume" }</button>
      },
    };

    html! {
      <div style="display: flex; flex-direction: column; margin-right: 12px;">
        { run_button }
        <button onclick=self.link.callback(|_| Msg::Reset)>{ "Reset" }</button>
        <button onclick=self.link.callback(|_| Msg::OpenPicker)>{ "Patterns" }</button>
        { for Speed::ALL.iter().map(|&speed| self.view_speed_button(speed)) }
        <p>{ format!("Pattern: {}", self.pattern.name()) }</p>
        <p>{ format!("Generation: {}", self.num_gen) }</p>
        <p>{ format!("Population: {}", self.gen.population()) }</p>
      </div>
    }
  }

  fn view_speed_button(&self, speed: Speed) -> Html {
    html! {
      <button
        disabled=(self.speed == speed)
        onclick=self.link.callback(move |_| Msg::SetSpeed(speed))
      >
        { speed.label() }
      </button>
    }
  }

  fn view_grid(&self) -> Html {
    let style = format!(
      "display: grid; grid-template-columns: repeat({}, {}px); grid-gap: 1px;",
      GRID_COLS, CELL_SIZE,
    );
    html! {
      <div style=style>
        { for (0..GRID_ROWS).flat_map(|row| {
          (0..GRID_COLS).map(move |col| (row, col))
        }).map(|(row, col)| self.view_cell(row, col)) }
      </div>
    }
  }

  fn view_cell(&self, row: i64, col: i64) -> Html {
    let color = if self.gen.is_occupied(Coord::new(row, col)) {
      OCCUPIED_COLOR
    } else {
      VACANT_COLOR
    };
    let style = format!(
      "width: {0}px; height: {0}px; background: {1};", CELL_SIZE, color,
    );
    html! {
      <div
        style=style
        onclick=self.link.callback(move |_| Msg::ToggleCell(row, col))
      />
    }
  }

  fn view_picker(&self) -> Html {
    if !self.picker_open {
      return html! { <></> };
    }

    html! {
      <div style="position: fixed; top: 20%; left: 30%; padding: 16px; \
                  background: white; border: 1px solid #888;">
        <p>{ "Choose a pattern" }</p>
        { for PatternId::ALL.iter().map(|&id| html! {
          <button
            style="display: block; width: 100%;"
            onclick=self.link.callback(move |_| Msg::Pick(id))
          >
            { id.name() }
          </button>
        }) }
        <button onclick=self.link.callback(|_| Msg::ClosePicker)>{ "Close" }</button>
      </div>
    }
  }
}

#[wasm_bindgen(start)]
pub fn run_app() {
  App::<Model>::new().mount_to_body();
}
