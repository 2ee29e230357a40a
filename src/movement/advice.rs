//! Bus-choice advice.
//!
//! A simple heuristic that scores the two landing squares of a bus choice.
//! Advisory only: the resolver never picks an option on its own.

use serde::{Deserialize, Serialize};

use super::result::BusOptions;
use crate::board::{Square, SquareType};

/// Which bus option the heuristic favours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Bus,
    Normal,
    Either,
}

/// Advice for a bus choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRecommendation {
    #[serde(rename = "recommendation")]
    pub choice: Recommendation,
    pub reason: String,
}

/// Strategic value of landing on `square`.
///
/// The start bonus goes to the square of kind [`SquareType::Start`],
/// whatever it is called.
#[must_use]
pub fn square_score(square: &Square) -> i32 {
    let mut score = match square.kind {
        SquareType::Property => 5,
        SquareType::Railroad => 4,
        SquareType::Utility => 3,
        SquareType::Start => 10,
        SquareType::Tax => -5,
        _ => 0,
    };

    if square.name == "Free Parking" {
        score += 2;
    }
    if square.is_go_to_jail() {
        score -= 10;
    }
    score
}

/// Compare the walk and bus landing squares.
///
/// Ties (equal scores) come back as [`Recommendation::Either`].
#[must_use]
pub fn recommend_bus(normal: &Square, bus: &Square) -> BusRecommendation {
    let normal_score = square_score(normal);
    let bus_score = square_score(bus);

    if bus_score > normal_score {
        BusRecommendation {
            choice: Recommendation::Bus,
            reason: format!("Taking the bus to {} is strategically better!", bus.name),
        }
    } else if normal_score > bus_score {
        BusRecommendation {
            choice: Recommendation::Normal,
            reason: format!("Normal movement to {} is better!", normal.name),
        }
    } else {
        BusRecommendation {
            choice: Recommendation::Either,
            reason: "Both options are similar. Your choice!".to_string(),
        }
    }
}

impl BusOptions {
    /// Advice for this pair of options.
    #[must_use]
    pub fn recommend(&self) -> BusRecommendation {
        recommend_bus(&self.normal.leg.landed_square, &self.bus.landed_square)
    }
}
