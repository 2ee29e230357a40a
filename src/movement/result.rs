//! Movement outcomes.
//!
//! A `MovementResult` is a fresh, caller-owned value. Every variant except
//! `BusChoice` resolves to one destination; `BusChoice` carries two
//! undecided options and leaves the pick to the player.

use serde::{Deserialize, Serialize};

use super::path::Path;
use crate::board::Square;
use crate::core::SquareId;

/// Follow-up the caller must handle after the token moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpAction {
    /// Crossed the start square: pay the start bonus.
    #[serde(rename = "collect_go")]
    CollectStartBonus,
    /// Landed by Mr. Monopoly: buy the property or pay rent.
    #[serde(rename = "check_property_ownership")]
    CheckOwnership,
    /// Draw a Chance card.
    #[serde(rename = "draw_chance_card")]
    DrawCard,
    /// Token is now in jail.
    #[serde(rename = "in_jail")]
    InJail,
}

impl FollowUpAction {
    /// Wire token for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FollowUpAction::CollectStartBonus => "collect_go",
            FollowUpAction::CheckOwnership => "check_property_ownership",
            FollowUpAction::DrawCard => "draw_chance_card",
            FollowUpAction::InJail => "in_jail",
        }
    }
}

impl std::fmt::Display for FollowUpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete move: where the token ends up and how it gets there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Final square.
    pub destination: SquareId,

    /// Squares visited, start and destination inclusive.
    pub path: Path,

    /// The move crossed the start square.
    #[serde(rename = "passedGO")]
    pub passed_start: bool,

    /// Record of the destination square.
    pub landed_square: Square,
}

/// The "walk" side of a bus choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOption {
    #[serde(flatten)]
    pub leg: Leg,

    /// Spaces walked (regular dice only).
    pub movement: u16,
}

/// Both sides of a bus choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusOptions {
    /// Walk the regular dice total.
    pub normal: WalkOption,

    /// Ride to the next bus-ticket square.
    pub bus: Leg,
}

/// Outcome of resolving a roll (or a jail order) against the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum MovementResult {
    /// Numeric speed die: walk the full total.
    Normal {
        start_position: SquareId,
        #[serde(flatten)]
        leg: Leg,
        total_movement: u16,
        is_doubles: bool,
        special_actions: Vec<FollowUpAction>,
    },

    /// Mr. Monopoly: walk the regular total, then advance to the next
    /// property, railroad or utility.
    AdvanceToProperty {
        start_position: SquareId,
        normal_destination: SquareId,
        #[serde(flatten)]
        leg: Leg,
        is_doubles: bool,
        special_actions: Vec<FollowUpAction>,
    },

    /// Bus: the player picks one of two options.
    BusChoice {
        start_position: SquareId,
        is_doubles: bool,
        options: BusOptions,
    },

    /// `?` face: walk the regular total, then draw a card.
    DrawCardMove {
        start_position: SquareId,
        #[serde(flatten)]
        leg: Leg,
        movement: u16,
        is_doubles: bool,
        special_actions: Vec<FollowUpAction>,
    },

    /// Sent straight to jail.
    GoToJail {
        start_position: SquareId,
        #[serde(flatten)]
        leg: Leg,
        special_actions: Vec<FollowUpAction>,
    },
}

impl MovementResult {
    /// Wire tag of this outcome.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            MovementResult::Normal { .. } => "normal",
            MovementResult::AdvanceToProperty { .. } => "advance_to_property",
            MovementResult::BusChoice { .. } => "bus_choice",
            MovementResult::DrawCardMove { .. } => "draw_card_move",
            MovementResult::GoToJail { .. } => "go_to_jail",
        }
    }

    #[must_use]
    pub fn start_position(&self) -> SquareId {
        match self {
            MovementResult::Normal { start_position, .. }
            | MovementResult::AdvanceToProperty { start_position, .. }
            | MovementResult::BusChoice { start_position, .. }
            | MovementResult::DrawCardMove { start_position, .. }
            | MovementResult::GoToJail { start_position, .. } => *start_position,
        }
    }

    /// The resolved move, or `None` for an undecided bus choice.
    #[must_use]
    pub fn leg(&self) -> Option<&Leg> {
        match self {
            MovementResult::Normal { leg, .. }
            | MovementResult::AdvanceToProperty { leg, .. }
            | MovementResult::DrawCardMove { leg, .. }
            | MovementResult::GoToJail { leg, .. } => Some(leg),
            MovementResult::BusChoice { .. } => None,
        }
    }

    /// Every candidate move: one, or two for a bus choice.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Leg> {
        match self {
            MovementResult::BusChoice { options, .. } => vec![&options.normal.leg, &options.bus],
            _ => self.leg().into_iter().collect(),
        }
    }

    /// Final square, or `None` for an undecided bus choice.
    #[must_use]
    pub fn destination(&self) -> Option<SquareId> {
        self.leg().map(|leg| leg.destination)
    }

    /// Bus options, if this is a bus choice.
    #[must_use]
    pub fn bus_options(&self) -> Option<&BusOptions> {
        match self {
            MovementResult::BusChoice { options, .. } => Some(options),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_doubles(&self) -> bool {
        match self {
            MovementResult::Normal { is_doubles, .. }
            | MovementResult::AdvanceToProperty { is_doubles, .. }
            | MovementResult::BusChoice { is_doubles, .. }
            | MovementResult::DrawCardMove { is_doubles, .. } => *is_doubles,
            MovementResult::GoToJail { .. } => false,
        }
    }

    /// Follow-ups for a resolved move. Empty for a bus choice: the caller
    /// derives them from the option the player picks.
    #[must_use]
    pub fn special_actions(&self) -> &[FollowUpAction] {
        match self {
            MovementResult::Normal { special_actions, .. }
            | MovementResult::AdvanceToProperty { special_actions, .. }
            | MovementResult::DrawCardMove { special_actions, .. }
            | MovementResult::GoToJail { special_actions, .. } => special_actions,
            MovementResult::BusChoice { .. } => &[],
        }
    }

    /// Player-facing summary.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            MovementResult::Normal { is_doubles: true, .. } => "You rolled doubles! Roll again.".to_string(),
            MovementResult::Normal { total_movement, .. } => format!("Move {} spaces.", total_movement),
            MovementResult::AdvanceToProperty { .. } => "Mr. Monopoly! Move to the next property.".to_string(),
            MovementResult::BusChoice { .. } => "Bus! Choose: move normally or take the bus.".to_string(),
            MovementResult::DrawCardMove { movement, .. } => {
                format!("Move {} spaces, then draw a Chance card.", movement)
            }
            MovementResult::GoToJail { .. } => {
                "Go directly to Jail! Do not pass GO, do not collect $200.".to_string()
            }
        }
    }

    /// Player-facing hint, where one applies.
    #[must_use]
    pub fn tip(&self) -> Option<&'static str> {
        match self {
            MovementResult::Normal { .. } => None,
            MovementResult::AdvanceToProperty { .. } => {
                Some("If unowned, you can buy it. If owned by others, pay rent!")
            }
            MovementResult::BusChoice { .. } => Some("Compare both options and choose strategically!"),
            MovementResult::DrawCardMove { .. } => Some("Move first, then draw your card!"),
            MovementResult::GoToJail { .. } => Some(
                "You can get out by: paying $50, using a Get Out of Jail card, or rolling doubles.",
            ),
        }
    }
}
