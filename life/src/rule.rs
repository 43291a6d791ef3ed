use std::fmt::{self, Display};

/// Birth/survival neighbor counts, one bit per count.
///
/// Bit `n` of `birth` set means a vacant cell with exactly `n` occupied
/// neighbors becomes occupied; bit `n` of `survival` set means an occupied
/// cell with exactly `n` occupied neighbors stays occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn set_birth(&mut self, num: u8) {
    assert!(num < 9);
    self.birth |= 1 << num;
  }

  pub(crate) fn set_survival(&mut self, num: u8) {
    assert!(num < 9);
    self.survival |= 1 << num;
  }

  pub fn born(self, num_neighbors: u8) -> bool {
    debug_assert!(num_neighbors < 9);
    self.birth >> num_neighbors & 1 != 0
  }

  pub fn survives(self, num_neighbors: u8) -> bool {
    debug_assert!(num_neighbors < 9);
    self.survival >> num_neighbors & 1 != 0
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}
