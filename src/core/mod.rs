//! Core types: square IDs, board configuration, dice, RNG, errors.
//!
//! Everything here is independent of a particular board layout. Boards
//! supply their constants through `BoardConfig`.

pub mod config;
pub mod dice;
pub mod error;
pub mod rng;

pub use config::{BoardConfig, SquareId, JAIL_INDEX, REGULAR_DIE_FACES, STANDARD_BOARD_SIZE, START_INDEX};
pub use dice::{DiceRoll, SpeedDie};
pub use error::{Error, ErrorKind, Result};
pub use rng::DiceRng;
