use indexmap::IndexMap;
use itertools::Itertools;
use rustc_hash::FxHasher;
use std::array;
use std::hash::BuildHasherDefault;
use std::iter;
use crate::coord::Coord;
use crate::rule::Rule;

/// Occupancy of a single cell. There are no transitional states.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellStatus {
  Occupied,
  Unoccupied,
}

type CellMap = IndexMap<Coord, CellStatus, BuildHasherDefault<FxHasher>>;

/// One discrete simulation state: the sparse set of occupied cells.
///
/// A coordinate absent from the map is implicitly `Unoccupied`; only
/// `Occupied` entries are stored. `step` and `toggle` replace the whole
/// value rather than mutating in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
  cells: CellMap,
}

impl Generation {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn status(&self, c: Coord) -> CellStatus {
    self.cells.get(&c).copied().unwrap_or(CellStatus::Unoccupied)
  }

  pub fn is_occupied(&self, c: Coord) -> bool {
    self.status(c) == CellStatus::Occupied
  }

  pub fn set(&mut self, c: Coord, status: CellStatus) {
    match status {
      CellStatus::Occupied => {
        self.cells.insert(c, CellStatus::Occupied);
      }
      CellStatus::Unoccupied => {
        self.cells.swap_remove(&c);
      }
    }
  }

  /// Number of occupied cells.
  pub fn population(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
    self.cells.keys().copied()
  }

  /// Occupied cells among the 8 neighbors of `c`. `c` itself is never
  /// counted, occupied or not.
  pub fn count_occupied_neighbors(&self, c: Coord) -> u8 {
    c.neighbors().iter().filter(|&&n| self.is_occupied(n)).count() as u8
  }

  /// Advance one generation.
  ///
  /// Only cells that can change are examined: every occupied cell and every
  /// neighbor of an occupied cell. The rule is applied synchronously, always
  /// against `self`, never against the partially built result.
  pub fn step(&self, rule: Rule) -> Generation {
    let cells = self
      .occupied()
      .flat_map(|c| iter::once(c).chain(array::IntoIter::new(c.neighbors())))
      .unique()
      .filter(|&c| {
        let num_neighbors = self.count_occupied_neighbors(c);
        if self.is_occupied(c) {
          rule.survives(num_neighbors)
        } else {
          rule.born(num_neighbors)
        }
      })
      .map(|c| (c, CellStatus::Occupied))
      .collect();

    Generation { cells }
  }

  /// Flip the occupancy of a single cell, leaving `self` untouched.
  pub fn toggle(&self, c: Coord) -> Generation {
    let mut next = self.clone();
    if next.is_occupied(c) {
      next.set(c, CellStatus::Unoccupied);
    } else {
      next.set(c, CellStatus::Occupied);
    }
    next
  }

  /// Returns (left, top, right, bottom), where right and bottom are
  /// exclusive. `None` if no cell is occupied.
  pub(crate) fn boundary(&self) -> Option<(i64, i64, i64, i64)> {
    let mut it = self.occupied();
    let first = it.next()?;
    let init = (first.col, first.row, first.col + 1, first.row + 1);
    Some(it.fold(init, |(left, top, right, bottom), c| {
      ( left.min(c.col),
        top.min(c.row),
        right.max(c.col + 1),
        bottom.max(c.row + 1))
    }))
  }
}

impl iter::FromIterator<Coord> for Generation {
  fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
    Generation {
      cells: iter
        .into_iter()
        .map(|c| (c, CellStatus::Occupied))
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rule::GAME_OF_LIFE;

  fn gen(coords: &[(i64, i64)]) -> Generation {
    coords.iter().copied().map(Coord::from).collect()
  }

  #[test]
  fn test_absent_is_unoccupied() {
    let g = Generation::new();
    assert_eq!(g.status(Coord::new(17, -4)), CellStatus::Unoccupied);
    assert!(!g.is_occupied(Coord::new(0, 0)));
    assert!(g.is_empty());
  }

  #[test]
  fn test_count_bounds() {
    let g = gen(&[
      (-1, -1), (-1, 0), (-1, 1),
      (0, -1), (0, 0), (0, 1),
      (1, -1), (1, 0), (1, 1),
    ]);
    // center is surrounded on all 8 sides, but never counts itself
    assert_eq!(g.count_occupied_neighbors(Coord::new(0, 0)), 8);
    assert_eq!(g.count_occupied_neighbors(Coord::new(5, 5)), 0);
    assert_eq!(g.count_occupied_neighbors(Coord::new(-2, -2)), 1);
  }

  #[test]
  fn test_empty_is_stable() {
    assert_eq!(Generation::new().step(GAME_OF_LIFE), Generation::new());
  }

  #[test]
  fn test_block_is_still_life() {
    let block = gen(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(block.step(GAME_OF_LIFE), block);
  }

  #[test]
  fn test_blinker_oscillates() {
    let horizontal = gen(&[(1, 0), (1, 1), (1, 2)]);
    let vertical = gen(&[(0, 1), (1, 1), (2, 1)]);
    assert_eq!(horizontal.step(GAME_OF_LIFE), vertical);
    assert_eq!(vertical.step(GAME_OF_LIFE), horizontal);
  }

  #[test]
  fn test_lone_cell_dies() {
    let g = gen(&[(5, 5)]);
    assert_eq!(g.step(GAME_OF_LIFE), Generation::new());
  }

  #[test]
  fn test_birth_with_three_neighbors() {
    // L-tromino grows the fourth corner of a block
    let g = gen(&[(0, 0), (0, 1), (1, 0)]);
    let block = gen(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(g.step(GAME_OF_LIFE), block);
  }

  #[test]
  fn test_locality() {
    let g = gen(&[(1, 0), (1, 1), (1, 2)]);
    let next = g.step(GAME_OF_LIFE);
    for far in next.occupied() {
      assert!(g.occupied().any(|c| c == far || c.is_neighbor(far)));
    }
    // a cell with Chebyshev distance > 1 from every member stays vacant
    assert!(!next.is_occupied(Coord::new(3, 4)));
    assert!(!next.is_occupied(Coord::new(-1, -2)));
  }

  #[test]
  fn test_toggle_is_self_inverse() {
    let g = gen(&[(0, 0), (2, 3)]);
    let c = Coord::new(1, 1);
    assert_eq!(g.toggle(c).toggle(c), g);
    let o = Coord::new(2, 3);
    assert_eq!(g.toggle(o).toggle(o), g);
  }

  #[test]
  fn test_toggle_flips() {
    let g = gen(&[(0, 0)]);
    let edited = g.toggle(Coord::new(0, 1));
    assert!(edited.is_occupied(Coord::new(0, 1)));
    assert!(g.is_occupied(Coord::new(0, 0)));
    assert_eq!(g.population(), 1);
    assert_eq!(edited.population(), 2);
    assert_eq!(edited.toggle(Coord::new(0, 0)).population(), 1);
  }

  #[test]
  fn test_equality_ignores_insertion_order() {
    let a = gen(&[(0, 0), (0, 1), (1, 0)]);
    let b = gen(&[(1, 0), (0, 0), (0, 1)]);
    assert_eq!(a, b);
  }

  #[test]
  fn test_boundary() {
    assert_eq!(Generation::new().boundary(), None);
    let g = gen(&[(1, -3), (-2, 0), (4, 2)]);
    assert_eq!(g.boundary(), Some((-3, -2, 3, 5)));
  }
}
