//! Roll classification.
//!
//! Maps a dice roll to exactly one rule category. Conditions overlap, so
//! they are checked in strict priority order and the first match wins:
//!
//! 1. Doubles (any speed die)
//! 2. Mr. Monopoly symbol
//! 3. Bus symbol
//! 4. `?` symbol
//! 5. Numeric speed die
//!
//! Classification never fails and needs no board.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::RuleCategory;
use crate::core::{DiceRoll, SpeedDie};

/// Warning attached to every doubles result.
pub const DOUBLES_WARNING: &str = "Three doubles in a row = Go to Jail";

/// One side of the bus choice, as described to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChoiceOption {
    /// Walk the regular dice total.
    Normal { spaces: u16 },
    /// Ride to a named target.
    Bus { destination: String },
}

/// Machine-readable action derived from a roll.
///
/// Serialized with an `action` tag (`move`, `move_and_monopoly`, `choice`,
/// `move_and_draw`, `doubles`) so callers can branch on it directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RuleAction {
    /// Plain forward movement.
    Move { spaces: u16 },

    /// Move, then advance to the next unowned property.
    MoveAndMonopoly { spaces: u16, special_action: String },

    /// Player picks between walking and riding the bus.
    Choice { options: Vec<ChoiceOption> },

    /// Move, then draw a card.
    MoveAndDraw { spaces: u16, card: String },

    /// Doubles: move, then roll again.
    Doubles {
        spaces: u16,
        roll_again: bool,
        warning: String,
    },
}

impl RuleAction {
    /// The wire tag for this action.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            RuleAction::Move { .. } => "move",
            RuleAction::MoveAndMonopoly { .. } => "move_and_monopoly",
            RuleAction::Choice { .. } => "choice",
            RuleAction::MoveAndDraw { .. } => "move_and_draw",
            RuleAction::Doubles { .. } => "doubles",
        }
    }
}

/// Dice inputs echoed back with the derived action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetails {
    pub dice1: u8,
    pub dice2: u8,
    pub speed_die: SpeedDie,
    #[serde(flatten)]
    pub action: RuleAction,
}

/// Classification of one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    /// Matched category.
    pub category: RuleCategory,

    /// Regular dice plus a numeric speed die. Symbols add nothing.
    pub total: u16,

    /// What the player must do.
    pub rule: String,

    /// Short hint.
    pub tip: String,

    /// Display icon.
    pub icon: String,

    /// Both regular dice match.
    pub is_doubles: bool,

    /// Dice echo and action tag.
    pub details: RuleDetails,
}

/// Classify a roll from raw dice values.
///
/// ```
/// use speed_die_rules::core::SpeedDie;
/// use speed_die_rules::rules::{classify_roll, RuleCategory};
///
/// let result = classify_roll(4, 5, SpeedDie::Number(2));
/// assert_eq!(result.category, RuleCategory::RegularMovement);
/// assert_eq!(result.total, 11);
/// assert_eq!(result.details.action.tag(), "move");
/// ```
#[must_use]
pub fn classify_roll(die1: u8, die2: u8, speed: SpeedDie) -> RuleResult {
    classify(&DiceRoll { die1, die2, speed })
}

/// Classify a roll.
#[must_use]
pub fn classify(roll: &DiceRoll) -> RuleResult {
    let result = if roll.is_doubles() {
        doubles_rule(roll)
    } else {
        match roll.speed {
            SpeedDie::MrMonopoly => mr_monopoly_rule(roll),
            SpeedDie::Bus => bus_rule(roll),
            SpeedDie::Chance => chance_rule(roll),
            SpeedDie::Number(_) => regular_movement_rule(roll),
        }
    };

    debug!(
        roll = %roll,
        category = %result.category,
        action = result.details.action.tag(),
        "classified roll"
    );
    result
}

fn build(
    roll: &DiceRoll,
    category: RuleCategory,
    rule: String,
    tip: &str,
    icon: &str,
    action: RuleAction,
) -> RuleResult {
    RuleResult {
        category,
        total: roll.total(),
        rule,
        tip: tip.to_string(),
        icon: icon.to_string(),
        is_doubles: category == RuleCategory::Doubles,
        details: RuleDetails {
            dice1: roll.die1,
            dice2: roll.die2,
            speed_die: roll.speed,
            action,
        },
    }
}

fn regular_movement_rule(roll: &DiceRoll) -> RuleResult {
    let total = roll.total();
    build(
        roll,
        RuleCategory::RegularMovement,
        format!("Move {} spaces forward on the board.", total),
        "Count carefully and move your piece! 🎯",
        "🎲",
        RuleAction::Move { spaces: total },
    )
}

fn mr_monopoly_rule(roll: &DiceRoll) -> RuleResult {
    let total = roll.total();
    build(
        roll,
        RuleCategory::MrMonopoly,
        format!(
            "Move {} spaces, then move to the next unowned property. \
             If the property is owned by another player, pay rent. If you own it, you're lucky!",
            total
        ),
        "Look for properties you don't own yet! 🏠",
        "🎩",
        RuleAction::MoveAndMonopoly {
            spaces: total,
            special_action: "next_unowned_property".to_string(),
        },
    )
}

fn bus_rule(roll: &DiceRoll) -> RuleResult {
    let total = roll.total();
    build(
        roll,
        RuleCategory::Bus,
        format!(
            "You have a choice! Move {} spaces normally OR move to the next Bus Ticket space on the board.",
            total
        ),
        "Use the bus if it helps you get to better properties! 🚌",
        "🚌",
        RuleAction::Choice {
            options: vec![
                ChoiceOption::Normal { spaces: total },
                ChoiceOption::Bus {
                    destination: "next_bus_ticket".to_string(),
                },
            ],
        },
    )
}

fn chance_rule(roll: &DiceRoll) -> RuleResult {
    let total = roll.total();
    build(
        roll,
        RuleCategory::Chance,
        format!(
            "Move {} spaces forward, then draw a Chance card and follow its instructions.",
            total
        ),
        "Move first, then draw your Chance card! 🎴",
        "❓",
        RuleAction::MoveAndDraw {
            spaces: total,
            card: "Chance".to_string(),
        },
    )
}

fn doubles_rule(roll: &DiceRoll) -> RuleResult {
    let total = roll.total();
    let regular = roll.regular_total();

    let (rule, icon) = match roll.speed {
        SpeedDie::Number(_) => (
            format!(
                "You rolled doubles ({} and {})! Move {} spaces, then roll again!",
                roll.die1, roll.die2, total
            ),
            "🎲🎲",
        ),
        SpeedDie::MrMonopoly => (
            format!(
                "Doubles with Mr. Monopoly! Move {} spaces, go to the next unowned property, then roll again!",
                regular
            ),
            "🎩🎲",
        ),
        SpeedDie::Bus => (
            format!(
                "Doubles with Bus! Choose to move {} spaces OR take the bus to the next Bus Ticket, then roll again!",
                regular
            ),
            "🚌🎲",
        ),
        SpeedDie::Chance => (
            format!(
                "Doubles with CHANCE! Move {} spaces, draw a Chance card, then roll again!",
                regular
            ),
            "❓🎲",
        ),
    };

    build(
        roll,
        RuleCategory::Doubles,
        rule,
        "Doubles are lucky, but three in a row sends you to Jail! ⚠️",
        icon,
        RuleAction::Doubles {
            spaces: total,
            roll_again: true,
            warning: DOUBLES_WARNING.to_string(),
        },
    )
}
