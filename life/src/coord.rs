/// A cell address on the unbounded plane.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coord {
  pub row: i64,
  pub col: i64,
}

impl Coord {
  pub const fn new(row: i64, col: i64) -> Self {
    Self { row, col }
  }

  /// The 8 surrounding coordinates, row-major, top-left first.
  pub fn neighbors(self) -> [Coord; 8] {
    let Coord { row: r, col: c } = self;
    [
      Coord::new(r - 1, c - 1),
      Coord::new(r - 1, c),
      Coord::new(r - 1, c + 1),
      Coord::new(r, c - 1),
      Coord::new(r, c + 1),
      Coord::new(r + 1, c - 1),
      Coord::new(r + 1, c),
      Coord::new(r + 1, c + 1),
    ]
  }

  /// Chebyshev distance is exactly 1. A cell is never its own neighbor.
  pub fn is_neighbor(self, other: Coord) -> bool {
    let dr = (self.row - other.row).abs();
    let dc = (self.col - other.col).abs();
    dr.max(dc) == 1
  }
}

impl From<(i64, i64)> for Coord {
  fn from((row, col): (i64, i64)) -> Self {
    Self { row, col }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_neighbor_order() {
    assert_eq!(Coord::new(0, 0).neighbors(), [
      Coord::new(-1, -1),
      Coord::new(-1, 0),
      Coord::new(-1, 1),
      Coord::new(0, -1),
      Coord::new(0, 1),
      Coord::new(1, -1),
      Coord::new(1, 0),
      Coord::new(1, 1),
    ]);
  }

  #[test]
  fn test_neighbors_exclude_self() {
    let c = Coord::new(3, -7);
    assert!(c.neighbors().iter().all(|&n| n != c));
    assert!(!c.is_neighbor(c));
  }

  #[test]
  fn test_is_neighbor_symmetric() {
    let coords = [
      Coord::new(0, 0),
      Coord::new(1, 1),
      Coord::new(-1, 2),
      Coord::new(5, 5),
      Coord::new(0, 2),
    ];
    for &a in &coords {
      for &b in &coords {
        assert_eq!(a.is_neighbor(b), b.is_neighbor(a));
      }
    }
  }

  #[test]
  fn test_is_neighbor_matches_enumeration() {
    let c = Coord::new(2, -3);
    for dr in -2i64..=2 {
      for dc in -2i64..=2 {
        let other = Coord::new(c.row + dr, c.col + dc);
        let expected = c.neighbors().contains(&other);
        assert_eq!(c.is_neighbor(other), expected, "offset ({}, {})", dr, dc);
      }
    }
  }
}
