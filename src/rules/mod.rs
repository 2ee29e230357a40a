//! Rule classification.
//!
//! Turns a dice roll into a rule category with player-facing text. The
//! classifier is independent of the board and never fails.

pub mod category;
pub mod classifier;

pub use category::{describe_category, CategoryInfo, RuleCategory, FALLBACK_EXPLANATION};
pub use classifier::{classify, classify_roll, ChoiceOption, RuleAction, RuleDetails, RuleResult, DOUBLES_WARNING};
