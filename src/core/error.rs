//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors fall
//! into three kinds:
//!
//! - **InvalidArgument**: a position or die value is out of range, or a
//!   roll would walk a full lap.
//! - **NotFound**: a square index does not exist on the board.
//! - **InvalidBoard**: a board asset failed to parse or validate. Only
//!   raised while loading a board, never per call.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidBoard,
}

/// Errors raised by board access, movement resolution and input parsing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position: {position}. Must be between 0 and {}", .board_size - 1)]
    InvalidPosition { position: i64, board_size: usize },

    #[error("Regular dice must be between 1 and 6 (got {value})")]
    InvalidDie { value: u8 },

    #[error("Move of {spaces} spaces laps a {board_size}-square board")]
    MoveTooLong { spaces: u16, board_size: usize },

    #[error("unrecognized speed die face {0:?}")]
    InvalidSpeedDie(String),

    #[error("unknown rule category {0:?}")]
    UnknownCategory(String),

    #[error("Square not found at position {0}")]
    SquareNotFound(usize),

    #[error("board asset failed validation: {}", .0.join("; "))]
    InvalidBoard(Vec<String>),

    #[error("board asset could not be parsed: {0}")]
    BoardFormat(#[from] serde_json::Error),
}

impl Error {
    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPosition { .. }
            | Error::InvalidDie { .. }
            | Error::MoveTooLong { .. }
            | Error::InvalidSpeedDie(_)
            | Error::UnknownCategory(_) => ErrorKind::InvalidArgument,
            Error::SquareNotFound(_) => ErrorKind::NotFound,
            Error::InvalidBoard(_) | Error::BoardFormat(_) => ErrorKind::InvalidBoard,
        }
    }

    /// Check if this error was caused by a bad caller argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
