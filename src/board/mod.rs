//! Board definition: square records and the immutable board.
//!
//! ## Key Types
//!
//! - `Square`: Static data for one position
//! - `SquareType`: Kind of square (property, railroad, tax, ...)
//! - `BoardAsset`: Board data as loaded from JSON
//! - `Board`: Validated, read-only board with lookups and forward search
//! - `BoardValidation`: Result of an integrity check

pub mod definition;
pub mod square;

pub use definition::{Board, BoardAsset, BoardValidation};
pub use square::{Square, SquareType};
