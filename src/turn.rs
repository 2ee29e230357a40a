//! One-call turn evaluation.
//!
//! Combines the rule classifier and the movement resolver for a single
//! roll. Classification always runs; movement only when a position is
//! known.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{DiceRoll, Result};
use crate::movement::{BusRecommendation, MovementResolver, MovementResult};
use crate::rules::{classify, RuleResult};

/// Everything a caller needs to present one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnSummary {
    pub roll: DiceRoll,
    pub rule: RuleResult,

    /// Resolved movement, when a position was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<MovementResult>,

    /// Heuristic pick for a bus choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_advice: Option<BusRecommendation>,
}

impl TurnSummary {
    /// Classify `roll` and, if `position` is given, resolve the move.
    ///
    /// Dice are validated before anything else, so an invalid roll fails
    /// even without a position.
    ///
    /// ```
    /// use speed_die_rules::board::Board;
    /// use speed_die_rules::core::{DiceRoll, SpeedDie};
    /// use speed_die_rules::turn::TurnSummary;
    ///
    /// let roll = DiceRoll::new(3, 4, SpeedDie::Bus);
    /// let turn = TurnSummary::evaluate(Board::standard(), roll, Some(0)).unwrap();
    ///
    /// assert_eq!(turn.rule.category.name(), "Bus");
    /// assert!(turn.bus_advice.is_some());
    /// ```
    pub fn evaluate(board: &Board, roll: DiceRoll, position: Option<i64>) -> Result<Self> {
        roll.validate()?;
        let rule = classify(&roll);

        let movement = match position {
            Some(position) => Some(MovementResolver::new(board).resolve_roll(position, &roll)?),
            None => None,
        };
        let bus_advice = movement
            .as_ref()
            .and_then(MovementResult::bus_options)
            .map(|options| options.recommend());

        debug!(roll = %roll, category = %rule.category, has_movement = movement.is_some(), "evaluated turn");

        Ok(Self {
            roll,
            rule,
            movement,
            bus_advice,
        })
    }

    /// Final square, when the move resolved to a single destination.
    #[must_use]
    pub fn destination(&self) -> Option<crate::core::SquareId> {
        self.movement.as_ref().and_then(MovementResult::destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SpeedDie, SquareId};
    use crate::movement::Recommendation;
    use crate::rules::RuleCategory;

    #[test]
    fn test_without_position() {
        let turn = TurnSummary::evaluate(Board::standard(), DiceRoll::new(4, 4, 2u8), None).unwrap();
        assert_eq!(turn.rule.category, RuleCategory::Doubles);
        assert!(turn.movement.is_none());
        assert!(turn.bus_advice.is_none());
        assert_eq!(turn.destination(), None);
    }

    #[test]
    fn test_with_position() {
        let turn = TurnSummary::evaluate(Board::standard(), DiceRoll::new(3, 4, 2u8), Some(0)).unwrap();
        assert_eq!(turn.rule.total, 9);
        assert_eq!(turn.destination(), Some(SquareId::new(9)));
    }

    #[test]
    fn test_bus_advice() {
        // Walk lands on Chance (7), bus rides to Reading Railroad (5).
        let turn = TurnSummary::evaluate(Board::standard(), DiceRoll::new(3, 4, SpeedDie::Bus), Some(0)).unwrap();
        let advice = turn.bus_advice.unwrap();
        assert_eq!(advice.choice, Recommendation::Bus);
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        let board = Board::standard();
        assert!(TurnSummary::evaluate(board, DiceRoll::new(3, 4, 1u8), Some(40)).is_err());
        assert!(TurnSummary::evaluate(board, DiceRoll::new(9, 4, 1u8), None).is_err());
    }
}
