//! Token movement.
//!
//! ## Key Types
//!
//! - `MovementResolver`: maps a position and dice roll to a `MovementResult`
//! - `MovementResult`: one resolved move, or an undecided bus choice
//! - `FollowUpAction`: work left for the caller (start bonus, card, jail)
//! - `BusRecommendation`: heuristic advice for a bus choice

pub mod advice;
pub mod path;
pub mod resolver;
pub mod result;

pub use advice::{recommend_bus, square_score, BusRecommendation, Recommendation};
pub use path::{direct_path, forward_distance, passed_start, walk_path, Path};
pub use resolver::MovementResolver;
pub use result::{BusOptions, FollowUpAction, Leg, MovementResult, WalkOption};
