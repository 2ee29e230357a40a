//! Board configuration.
//!
//! The resolver never hardcodes the board size or the positions of the
//! start and jail squares. They come from a `BoardConfig` owned by the
//! `Board`, so an alternate board variant only needs a different asset
//! and config.

use serde::{Deserialize, Serialize};

/// Number of squares on the classic board.
pub const STANDARD_BOARD_SIZE: usize = 40;

/// Index of the start ("GO") square on the classic board.
pub const START_INDEX: usize = 0;

/// Index of the jail / just-visiting square on the classic board.
pub const JAIL_INDEX: usize = 10;

/// Number of faces on a regular die.
pub const REGULAR_DIE_FACES: u8 = 6;

/// Square identifier: the square's 0-based position in traversal order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareId(pub u8);

impl SquareId {
    /// Create a new square ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the position as a `usize` index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Advance `steps` squares forward on a board of `board_size` squares.
    #[must_use]
    pub const fn advance(self, steps: usize, board_size: usize) -> Self {
        Self(((self.0 as usize + steps) % board_size) as u8)
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// Board-level constants.
///
/// ## Example
///
/// ```
/// use speed_die_rules::core::{BoardConfig, SquareId};
///
/// let config = BoardConfig::default().with_jail_index(SquareId::new(12));
/// assert_eq!(config.board_size, 40);
/// assert_eq!(config.jail_index, SquareId::new(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of squares in one lap.
    pub board_size: usize,

    /// Square where a lap begins. Passing it earns the start bonus.
    pub start_index: SquareId,

    /// Square a token is sent to by "Go To Jail".
    pub jail_index: SquareId,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            start_index: SquareId::new(START_INDEX as u8),
            jail_index: SquareId::new(JAIL_INDEX as u8),
        }
    }
}

impl BoardConfig {
    /// Create a config for a board with `board_size` squares.
    ///
    /// Start and jail keep their classic positions.
    pub fn new(board_size: usize) -> Self {
        assert!(board_size > 0, "Board must have at least 1 square");
        assert!(board_size <= 256, "At most 256 squares supported");

        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set the start square.
    #[must_use]
    pub fn with_start_index(mut self, start: SquareId) -> Self {
        self.start_index = start;
        self
    }

    /// Set the jail square.
    #[must_use]
    pub fn with_jail_index(mut self, jail: SquareId) -> Self {
        self.jail_index = jail;
        self
    }

    /// Check whether a raw position lies on the board.
    #[must_use]
    pub fn contains(&self, position: i64) -> bool {
        position >= 0 && (position as u64) < self.board_size as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_id() {
        let id = SquareId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Square(7)");
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(SquareId::new(37).advance(8, 40), SquareId::new(5));
        assert_eq!(SquareId::new(30).advance(10, 40), SquareId::new(0));
        assert_eq!(SquareId::new(3).advance(0, 40), SquareId::new(3));
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.board_size, 40);
        assert_eq!(config.start_index, SquareId::new(0));
        assert_eq!(config.jail_index, SquareId::new(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::new(24)
            .with_start_index(SquareId::new(1))
            .with_jail_index(SquareId::new(6));

        assert_eq!(config.board_size, 24);
        assert_eq!(config.start_index, SquareId::new(1));
        assert_eq!(config.jail_index, SquareId::new(6));
    }

    #[test]
    fn test_contains() {
        let config = BoardConfig::default();
        assert!(config.contains(0));
        assert!(config.contains(39));
        assert!(!config.contains(-1));
        assert!(!config.contains(40));
    }

    #[test]
    #[should_panic(expected = "at least 1 square")]
    fn test_zero_size_board() {
        BoardConfig::new(0);
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
