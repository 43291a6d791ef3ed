pub mod coord;
pub mod generation;
pub mod pattern;
pub mod rle;
pub mod rule;

pub use coord::Coord;
pub use generation::{CellStatus, Generation};
pub use pattern::{seed, PatternId, DEFAULT_PATTERN};
pub use rule::{Rule, GAME_OF_LIFE};
