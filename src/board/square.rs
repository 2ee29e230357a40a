//! Square records.
//!
//! A `Square` is the static data for one board position, as stored in the
//! board asset. Field names follow the asset's camelCase JSON keys.

use serde::{Deserialize, Serialize};

use crate::core::SquareId;

/// Kind of board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareType {
    Start,
    Property,
    Railroad,
    Utility,
    Tax,
    Chance,
    CommunityChest,
    Special,
}

impl SquareType {
    /// Squares that can be bought: properties, railroads, utilities.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(self, SquareType::Property | SquareType::Railroad | SquareType::Utility)
    }

    /// Squares whose landing triggers an instruction (corners, cards, tax).
    #[must_use]
    pub const fn requires_action(self) -> bool {
        matches!(
            self,
            SquareType::Special | SquareType::Chance | SquareType::CommunityChest | SquareType::Tax
        )
    }
}

/// One board square.
///
/// ## Example
///
/// ```
/// use speed_die_rules::board::{Square, SquareType};
/// use speed_die_rules::core::SquareId;
///
/// let square = Square::new(SquareId::new(5), "Reading Railroad", SquareType::Railroad)
///     .with_price(200)
///     .with_bus_ticket();
///
/// assert!(square.has_bus_ticket);
/// assert!(square.kind.is_purchasable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    /// Position on the board.
    pub id: SquareId,

    /// Square kind.
    #[serde(rename = "type")]
    pub kind: SquareType,

    /// Display name.
    pub name: String,

    /// Purchase price (properties, railroads, utilities).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,

    /// Color group (properties only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Amount owed (tax squares).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,

    /// Square is a bus-ticket stop.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_bus_ticket: bool,

    /// Instruction tag for corner squares (e.g. `go_to_jail`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Square {
    /// Create a square with no optional attributes.
    #[must_use]
    pub fn new(id: SquareId, name: impl Into<String>, kind: SquareType) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            price: None,
            color: None,
            amount: None,
            has_bus_ticket: false,
            action: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn with_bus_ticket(mut self) -> Self {
        self.has_bus_ticket = true;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Check if landing here sends the token to jail.
    #[must_use]
    pub fn is_go_to_jail(&self) -> bool {
        self.action.as_deref() == Some("go_to_jail")
    }
}
