use regex::Regex;
use std::error;
use std::fmt::{self, Display};
use crate::coord::Coord;
use crate::generation::{CellStatus, Generation};
use crate::rule::{Rule, GAME_OF_LIFE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  BadHeader,
  BadRule,
  BadNumber,
  UnexpectedEof,
  BadChar(char),
}

impl Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::BadHeader => write!(f, "invalid header line"),
      Error::BadRule => write!(f, "invalid rule string"),
      Error::BadNumber => write!(f, "invalid run count"),
      Error::UnexpectedEof => write!(f, "unexpected EOF"),
      Error::BadChar(c) => write!(f, "invalid character {:?}", c),
    }
  }
}

impl error::Error for Error {}

/// Read a Life pattern from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
///
/// The pattern is anchored with its header origin at (0, 0). A header
/// without a `rule` field means B3/S23.
pub fn read(src: impl AsRef<str>) -> Result<(Rule, Generation), Error> {
  let header_re = Regex::new(
    r"^x = (\d+), y = (\d+)(?:, rule = ([^\r\n]+))?"
  ).unwrap();
  let mut src = src.as_ref().trim_start();

  let caps = header_re.captures(src).ok_or(Error::BadHeader)?;
  let width: i64 = caps[1].parse().map_err(|_| Error::BadHeader)?;
  let height: i64 = caps[2].parse().map_err(|_| Error::BadHeader)?;
  if width == 0 || height == 0 {
    return Err(Error::BadHeader);
  }
  let rule = match caps.get(3) {
    Some(m) => parse_rule(m.as_str().trim_end())?,
    None => GAME_OF_LIFE,
  };

  src = &src[src.find('\n').unwrap_or_else(|| src.len())..];

  let mut gen = Generation::new();
  let mut col = 0i64;
  let mut row = 0i64;
  loop {
    src = src.trim_start();

    if src.is_empty() {
      return Err(Error::UnexpectedEof);
    }

    let b0 = src.as_bytes()[0];
    if b0 == b'!' {
      break;
    }

    let mut num = 1i64;
    if b0.is_ascii_digit() {
      let num_len = src
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| src.len());
      num = src[..num_len].parse().map_err(|_| Error::BadNumber)?;
      src = &src[num_len..];
      if src.is_empty() {
        return Err(Error::UnexpectedEof);
      }
    }

    match src.as_bytes()[0] {
      b'b' => {
        col += num;
      }
      b'o' => {
        for i in 0..num {
          gen.set(Coord::new(row, col + i), CellStatus::Occupied);
        }
        col += num;
      }
      b'$' => {
        col = 0;
        row += num;
      }
      _ => {
        return Err(Error::BadChar(src.chars().next().unwrap()));
      }
    }

    src = &src[1..];
  }

  Ok((rule, gen))
}

fn parse_rule(src: &str) -> Result<Rule, Error> {
  // some published patterns spell the default rule out by name
  if src == "Life" {
    return Ok(GAME_OF_LIFE);
  }

  let mut parts = src.splitn(2, '/');
  let birth = parts.next().ok_or(Error::BadRule)?;
  let survival = parts.next().ok_or(Error::BadRule)?;
  if !birth.starts_with('B') || !survival.starts_with('S') {
    return Err(Error::BadRule);
  }

  let mut rule = Rule::new();
  for c in birth[1..].chars() {
    let num = c.to_digit(10).ok_or(Error::BadRule)? as u8;
    // B0 cannot be represented in a sparse universe
    if num == 0 || num > 8 {
      return Err(Error::BadRule);
    }
    rule.set_birth(num);
  }
  for c in survival[1..].chars() {
    let num = c.to_digit(10).ok_or(Error::BadRule)? as u8;
    if num > 8 {
      return Err(Error::BadRule);
    }
    rule.set_survival(num);
  }
  Ok(rule)
}

/// Write a Life pattern to a RLE string, normalized to its bounding box.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(gen: &Generation, rule: Rule) -> String {
  let (left, top, right, bottom) = match gen.boundary() {
    Some(boundary) => boundary,
    None => return format!("x = 0, y = 0, rule = {}\n!\n", rule),
  };
  let width = right - left;
  let mut output = format!(
    "x = {}, y = {}, rule = {}\n", width, bottom - top, rule);

  let mut num_consec_next_rows = 0;
  for row in top..bottom {
    let mut unit = None;
    let mut num_unit = 0;
    for col in left..right {
      let new_unit = if gen.is_occupied(Coord::new(row, col)) {
        RleUnit::Alive
      } else {
        RleUnit::Dead
      };

      if Some(new_unit) != unit {
        if let Some(unit) = unit.take() {
          if num_consec_next_rows > 0 {
            RleUnit::NextRow.write(num_consec_next_rows, &mut output);
            num_consec_next_rows = 0;
          }

          unit.write(num_unit, &mut output);
          num_unit = 0;
        }
        unit = Some(new_unit);
      }
      num_unit += 1;
    }

    if unit == Some(RleUnit::Dead) && num_unit == width {
      num_consec_next_rows += 1;
    } else {
      if num_consec_next_rows > 0 {
        RleUnit::NextRow.write(num_consec_next_rows, &mut output);
      }

      let unit = unit.unwrap();
      if unit != RleUnit::Dead {
        unit.write(num_unit, &mut output);
      }

      num_consec_next_rows = 1;
    }
  }

  if num_consec_next_rows > 1 {
    RleUnit::NextRow.write(num_consec_next_rows - 1, &mut output);
  }

  output.push('!');
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(&self, num: i64, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    if s.len() - s.rfind('\n').unwrap() + buf.len() > 71 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}
