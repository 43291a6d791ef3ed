use wasm_bindgen::prelude::*;
use life::{rle, CellStatus, Coord, Generation, Rule, GAME_OF_LIFE};

#[wasm_bindgen]
pub struct World {
  gen: Generation,
  rule: Rule,
}

#[wasm_bindgen]
impl World {
  #[wasm_bindgen(constructor)]
  pub fn new() -> Self {
    Self {
      gen: Generation::new(),
      rule: GAME_OF_LIFE,
    }
  }

  pub fn read(src: &str) -> Result<World, JsValue> {
    let (rule, gen) = rle::read(src)
      .map_err(|err| JsValue::from(err.to_string()))?;
    Ok(Self { gen, rule })
  }

  pub fn set(&mut self, row: i32, col: i32, occupied: bool) {
    let status = if occupied {
      CellStatus::Occupied
    } else {
      CellStatus::Unoccupied
    };
    self.gen.set(Coord::new(row as i64, col as i64), status);
  }

  pub fn toggle(&mut self, row: i32, col: i32) {
    self.gen = self.gen.toggle(Coord::new(row as i64, col as i64));
  }

  pub fn step(&mut self, num_gen: usize) {
    for _ in 0..num_gen {
      self.gen = self.gen.step(self.rule);
    }
  }

  pub fn population(&self) -> usize {
    self.gen.population()
  }

  pub fn write_cells(&self, f: &js_sys::Function) {
    let null = JsValue::null();
    for c in self.gen.occupied() {
      f.call2(&null, &JsValue::from(c.row as i32), &JsValue::from(c.col as i32))
        .unwrap();
    }
  }

  pub fn write(&self) -> String {
    rle::write(&self.gen, self.rule)
  }
}
