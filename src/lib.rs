//! # speed-die-rules
//!
//! Turn resolution for the three-dice "speed die" board game variant.
//!
//! ## Design Principles
//!
//! 1. **Pure Computation**: Classifying a roll and resolving a move never
//!    mutate shared state. Identical inputs give identical results.
//!
//! 2. **Configuration Over Convention**: Board size, start and jail squares
//!    live in `BoardConfig`; the square set comes from a JSON asset.
//!
//! 3. **Typed Outcomes**: Result discriminators are enums whose serde
//!    representation matches the JSON the board UI consumes.
//!
//! ## Modules
//!
//! - `core`: Square IDs, board config, dice, RNG, errors
//! - `board`: Square records and the validated board
//! - `rules`: Rule categories and the roll classifier
//! - `movement`: Paths, the movement resolver, bus advice
//! - `turn`: Classification and movement in one call
//!
//! ## Example
//!
//! ```
//! use speed_die_rules::{classify_roll, Board, MovementResolver, SpeedDie};
//!
//! let rule = classify_roll(3, 4, SpeedDie::Number(2));
//! assert_eq!(rule.total, 9);
//!
//! let result = MovementResolver::new(Board::standard())
//!     .resolve(0, 3, 4, SpeedDie::Number(2))
//!     .unwrap();
//! assert_eq!(result.leg().unwrap().landed_square.name, "Connecticut Avenue");
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod movement;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    SquareId, BoardConfig,
    STANDARD_BOARD_SIZE, START_INDEX, JAIL_INDEX, REGULAR_DIE_FACES,
    DiceRoll, SpeedDie,
    DiceRng,
    Error, ErrorKind, Result,
};

pub use crate::board::{Board, BoardAsset, BoardValidation, Square, SquareType};

pub use crate::rules::{
    classify, classify_roll, describe_category,
    CategoryInfo, RuleCategory, RuleResult, RuleAction, RuleDetails, ChoiceOption,
};

pub use crate::movement::{
    MovementResolver, MovementResult, Leg, BusOptions, WalkOption, FollowUpAction,
    BusRecommendation, Recommendation, recommend_bus,
    Path, walk_path,
};

pub use crate::turn::TurnSummary;
