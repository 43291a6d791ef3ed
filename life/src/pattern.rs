use crate::coord::Coord;
use crate::generation::Generation;
use crate::rle;

/// A named seed layout from the built-in catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PatternId {
  Empty,
  Block,
  Blinker,
  Toad,
  Beacon,
  Glider,
  Lwss,
  Pulsar,
  GosperGliderGun,
  Acorn,
}

pub const DEFAULT_PATTERN: PatternId = PatternId::Glider;

impl PatternId {
  pub const ALL: [PatternId; 10] = [
    PatternId::Empty,
    PatternId::Block,
    PatternId::Blinker,
    PatternId::Toad,
    PatternId::Beacon,
    PatternId::Glider,
    PatternId::Lwss,
    PatternId::Pulsar,
    PatternId::GosperGliderGun,
    PatternId::Acorn,
  ];

  pub fn name(self) -> &'static str {
    match self {
      PatternId::Empty => "Empty",
      PatternId::Block => "Block",
      PatternId::Blinker => "Blinker",
      PatternId::Toad => "Toad",
      PatternId::Beacon => "Beacon",
      PatternId::Glider => "Glider",
      PatternId::Lwss => "Lightweight Spaceship",
      PatternId::Pulsar => "Pulsar",
      PatternId::GosperGliderGun => "Gosper Glider Gun",
      PatternId::Acorn => "Acorn",
    }
  }

  fn rle(self) -> Option<&'static str> {
    match self {
      PatternId::Empty => None,
      PatternId::Block => Some("x = 2, y = 2, rule = B3/S23\n2o$2o!"),
      PatternId::Blinker => Some("x = 3, y = 1, rule = B3/S23\n3o!"),
      PatternId::Toad => Some("x = 4, y = 2, rule = B3/S23\nb3o$3o!"),
      PatternId::Beacon => Some("x = 4, y = 4, rule = B3/S23\n2o$2o$2b2o$2b2o!"),
      PatternId::Glider => Some("x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!"),
      PatternId::Lwss => Some("x = 5, y = 4, rule = B3/S23\nbo2bo$o$o3bo$4o!"),
      PatternId::Pulsar => Some(
        "x = 13, y = 13, rule = B3/S23\n\
         2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$2b3o3b3o$\
         o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
      ),
      PatternId::GosperGliderGun => Some(
        "x = 36, y = 9, rule = B3/S23\n\
         24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
         2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
      ),
      PatternId::Acorn => Some("x = 7, y = 3, rule = B3/S23\nbo$3bo$2o2b3o!"),
    }
  }
}

/// Seed layout for `id`, centered in a `width` x `height` viewport whose
/// top-left cell is (0, 0). A pattern larger than the viewport keeps its
/// top-left corner at (0, 0); the stepper never clips either way.
pub fn seed(id: PatternId, width: i64, height: i64) -> Generation {
  let src = match id.rle() {
    Some(src) => src,
    None => return Generation::new(),
  };
  let (_, gen) = rle::read(src).expect("catalog patterns are valid RLE");

  let (left, top, right, bottom) = match gen.boundary() {
    Some(boundary) => boundary,
    None => return gen,
  };
  let dr = ((height - (bottom - top)) / 2).max(0) - top;
  let dc = ((width - (right - left)) / 2).max(0) - left;
  gen
    .occupied()
    .map(|c| Coord::new(c.row + dr, c.col + dc))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalog_is_valid() {
    for &id in &PatternId::ALL {
      let gen = seed(id, 60, 40);
      if id == PatternId::Empty {
        assert!(gen.is_empty());
      } else {
        assert!(!gen.is_empty(), "{} seeded empty", id.name());
      }
    }
  }

  #[test]
  fn test_names_are_unique() {
    use itertools::Itertools;

    let names: Vec<_> = PatternId::ALL.iter().map(|id| id.name()).collect();
    assert_eq!(names.iter().unique().count(), names.len());
  }

  #[test]
  fn test_default_is_in_catalog() {
    assert!(PatternId::ALL.contains(&DEFAULT_PATTERN));
  }

  #[test]
  fn test_seed_is_centered() {
    let gen = seed(PatternId::Blinker, 5, 5);
    let expected: Generation =
      vec![(2, 1), (2, 2), (2, 3)].into_iter().map(Coord::from).collect();
    assert_eq!(gen, expected);
  }

  #[test]
  fn test_oversized_seed_keeps_origin() {
    let gen = seed(PatternId::GosperGliderGun, 10, 5);
    let (left, top, _, _) = gen.boundary().unwrap();
    assert_eq!((left, top), (0, 0));
  }

  #[test]
  fn test_populations() {
    assert_eq!(seed(PatternId::Block, 20, 20).population(), 4);
    assert_eq!(seed(PatternId::Glider, 20, 20).population(), 5);
    assert_eq!(seed(PatternId::Acorn, 20, 20).population(), 7);
    assert_eq!(seed(PatternId::Lwss, 20, 20).population(), 9);
    assert_eq!(seed(PatternId::Pulsar, 20, 20).population(), 48);
    assert_eq!(seed(PatternId::GosperGliderGun, 40, 40).population(), 36);
  }
}
