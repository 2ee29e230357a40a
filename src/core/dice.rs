//! Dice values.
//!
//! A roll is two regular six-sided dice plus one speed die. The speed die
//! shows 1, 2 or 3, or one of three symbols:
//!
//! | Face | Label | Effect |
//! | --- | --- | --- |
//! | `Bus` | `"Bus"` | choose: walk normally or ride to the next bus ticket |
//! | `MrMonopoly` | `"Mr. Monopoly"` | walk, then advance to the next property |
//! | `Chance` | `"?"` | walk, then draw a Chance card |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::REGULAR_DIE_FACES;
use super::error::{Error, Result};

/// The face shown by the speed die.
///
/// Numeric faces are stored as-is. Values outside 1-3 are not rejected
/// here; they are plain movement like any other number. The resolver
/// refuses a roll whose total would walk a full lap of the board.
///
/// Serializes as a bare number for numeric faces and as the face label
/// (`"Bus"`, `"Mr. Monopoly"`, `"?"`) for symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFace", into = "RawFace")]
pub enum SpeedDie {
    /// Numeric face, added to the regular dice.
    Number(u8),
    /// Bus symbol.
    Bus,
    /// Mr. Monopoly symbol: advance to the next property.
    MrMonopoly,
    /// Question mark: draw a Chance card.
    Chance,
}

/// Wire form of a speed die face.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFace {
    Number(u8),
    Label(String),
}

impl From<SpeedDie> for RawFace {
    fn from(face: SpeedDie) -> Self {
        match face {
            SpeedDie::Number(n) => RawFace::Number(n),
            symbol => RawFace::Label(symbol.label()),
        }
    }
}

impl TryFrom<RawFace> for SpeedDie {
    type Error = Error;

    fn try_from(raw: RawFace) -> Result<Self> {
        match raw {
            RawFace::Number(n) => Ok(SpeedDie::Number(n)),
            RawFace::Label(label) => label.parse(),
        }
    }
}

impl SpeedDie {
    /// All six faces of the physical speed die, in face order.
    pub const FACES: [SpeedDie; 6] = [
        SpeedDie::Number(1),
        SpeedDie::Number(2),
        SpeedDie::Number(3),
        SpeedDie::Bus,
        SpeedDie::MrMonopoly,
        SpeedDie::Chance,
    ];

    /// Get the numeric value, or `None` for a symbol.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            SpeedDie::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Check if this face is one of the three symbols.
    #[must_use]
    pub const fn is_symbol(self) -> bool {
        !matches!(self, SpeedDie::Number(_))
    }

    /// Spaces this face adds to the regular dice total.
    #[must_use]
    pub const fn movement(self) -> u8 {
        match self {
            SpeedDie::Number(n) => n,
            _ => 0,
        }
    }

    /// Face label as printed on the die.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            SpeedDie::Number(n) => n.to_string(),
            SpeedDie::Bus => "Bus".to_string(),
            SpeedDie::MrMonopoly => "Mr. Monopoly".to_string(),
            SpeedDie::Chance => "?".to_string(),
        }
    }
}

impl std::fmt::Display for SpeedDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for SpeedDie {
    type Err = Error;

    /// Parse a face label.
    ///
    /// ```
    /// use speed_die_rules::core::SpeedDie;
    ///
    /// assert_eq!("2".parse::<SpeedDie>().unwrap(), SpeedDie::Number(2));
    /// assert_eq!("Mr. Monopoly".parse::<SpeedDie>().unwrap(), SpeedDie::MrMonopoly);
    /// assert!("Rocket".parse::<SpeedDie>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Bus" => Ok(SpeedDie::Bus),
            "Mr. Monopoly" => Ok(SpeedDie::MrMonopoly),
            "?" => Ok(SpeedDie::Chance),
            other => other
                .parse::<u8>()
                .map(SpeedDie::Number)
                .map_err(|_| Error::InvalidSpeedDie(s.to_string())),
        }
    }
}

impl From<u8> for SpeedDie {
    fn from(n: u8) -> Self {
        SpeedDie::Number(n)
    }
}

/// One roll of all three dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First regular die.
    pub die1: u8,
    /// Second regular die.
    pub die2: u8,
    /// Speed die.
    pub speed: SpeedDie,
}

impl DiceRoll {
    /// Create a roll. Values are not range-checked; see [`DiceRoll::validate`].
    #[must_use]
    pub fn new(die1: u8, die2: u8, speed: impl Into<SpeedDie>) -> Self {
        Self {
            die1,
            die2,
            speed: speed.into(),
        }
    }

    /// Both regular dice show the same value.
    #[must_use]
    pub const fn is_doubles(&self) -> bool {
        self.die1 == self.die2
    }

    /// Sum of the two regular dice.
    #[must_use]
    pub const fn regular_total(&self) -> u16 {
        self.die1 as u16 + self.die2 as u16
    }

    /// Regular dice plus a numeric speed die.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.regular_total() + self.speed.movement() as u16
    }

    /// Check that both regular dice are in `1..=6`.
    pub fn validate(&self) -> Result<()> {
        for value in [self.die1, self.die2] {
            if !(1..=REGULAR_DIE_FACES).contains(&value) {
                return Err(Error::InvalidDie { value });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} + [{}]", self.die1, self.die2, self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_faces() {
        assert_eq!("1".parse::<SpeedDie>().unwrap(), SpeedDie::Number(1));
        assert_eq!("3".parse::<SpeedDie>().unwrap(), SpeedDie::Number(3));
        assert_eq!("Bus".parse::<SpeedDie>().unwrap(), SpeedDie::Bus);
        assert_eq!("?".parse::<SpeedDie>().unwrap(), SpeedDie::Chance);
        assert_eq!("0".parse::<SpeedDie>().unwrap(), SpeedDie::Number(0));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Rocket".parse::<SpeedDie>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_labels_round_trip() {
        for face in SpeedDie::FACES {
            assert_eq!(face.label().parse::<SpeedDie>().unwrap(), face);
        }
    }

    #[test]
    fn test_movement() {
        assert_eq!(SpeedDie::Number(2).movement(), 2);
        assert_eq!(SpeedDie::Bus.movement(), 0);
        assert!(SpeedDie::MrMonopoly.is_symbol());
        assert!(!SpeedDie::Number(1).is_symbol());
        assert_eq!(SpeedDie::Chance.number(), None);
    }

    #[test]
    fn test_roll_totals() {
        let roll = DiceRoll::new(4, 5, 2u8);
        assert_eq!(roll.regular_total(), 9);
        assert_eq!(roll.total(), 11);
        assert!(!roll.is_doubles());

        let symbolic = DiceRoll::new(3, 3, SpeedDie::Bus);
        assert_eq!(symbolic.total(), 6);
        assert!(symbolic.is_doubles());
    }

    #[test]
    fn test_validate() {
        assert!(DiceRoll::new(1, 6, 1u8).validate().is_ok());
        assert!(matches!(
            DiceRoll::new(0, 3, 1u8).validate(),
            Err(Error::InvalidDie { value: 0 })
        ));
        assert!(matches!(
            DiceRoll::new(3, 7, 1u8).validate(),
            Err(Error::InvalidDie { value: 7 })
        ));
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&SpeedDie::Number(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&SpeedDie::MrMonopoly).unwrap(), "\"Mr. Monopoly\"");

        let face: SpeedDie = serde_json::from_str("\"?\"").unwrap();
        assert_eq!(face, SpeedDie::Chance);
        let face: SpeedDie = serde_json::from_str("3").unwrap();
        assert_eq!(face, SpeedDie::Number(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceRoll::new(2, 3, SpeedDie::Chance).to_string(), "2 + 3 + [?]");
    }
}
