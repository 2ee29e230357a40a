//! Rule categories and their reference text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Explanation returned for an unrecognized category name.
pub const FALLBACK_EXPLANATION: &str = "Follow the rule for this situation! 🎲";

/// A rule category.
///
/// The classifier produces the first five. `Jail` and `SpecialSpaces`
/// only appear in the reference table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    #[serde(rename = "Regular Movement")]
    RegularMovement,
    #[serde(rename = "Mr. Monopoly")]
    MrMonopoly,
    #[serde(rename = "Bus")]
    Bus,
    #[serde(rename = "CHANCE")]
    Chance,
    #[serde(rename = "Doubles")]
    Doubles,
    #[serde(rename = "Jail")]
    Jail,
    #[serde(rename = "Special Spaces")]
    SpecialSpaces,
}

impl RuleCategory {
    /// All categories in reference order.
    pub const ALL: [RuleCategory; 7] = [
        RuleCategory::RegularMovement,
        RuleCategory::MrMonopoly,
        RuleCategory::Bus,
        RuleCategory::Chance,
        RuleCategory::Doubles,
        RuleCategory::Jail,
        RuleCategory::SpecialSpaces,
    ];

    /// 1-based reference id.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            RuleCategory::RegularMovement => 1,
            RuleCategory::MrMonopoly => 2,
            RuleCategory::Bus => 3,
            RuleCategory::Chance => 4,
            RuleCategory::Doubles => 5,
            RuleCategory::Jail => 6,
            RuleCategory::SpecialSpaces => 7,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleCategory::RegularMovement => "Regular Movement",
            RuleCategory::MrMonopoly => "Mr. Monopoly",
            RuleCategory::Bus => "Bus",
            RuleCategory::Chance => "CHANCE",
            RuleCategory::Doubles => "Doubles",
            RuleCategory::Jail => "Jail",
            RuleCategory::SpecialSpaces => "Special Spaces",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            RuleCategory::RegularMovement => "🎲",
            RuleCategory::MrMonopoly => "🎩",
            RuleCategory::Bus => "🚌",
            RuleCategory::Chance => "❓",
            RuleCategory::Doubles => "🎲🎲",
            RuleCategory::Jail => "👮",
            RuleCategory::SpecialSpaces => "⭐",
        }
    }

    /// One-line summary for a category list.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            RuleCategory::RegularMovement => "Move the total of all three dice",
            RuleCategory::MrMonopoly => "Move to next unowned property",
            RuleCategory::Bus => "Choose bus or normal movement",
            RuleCategory::Chance => "Draw a Chance card",
            RuleCategory::Doubles => "Roll again!",
            RuleCategory::Jail => "Go to Jail or get out",
            RuleCategory::SpecialSpaces => "Go, Free Parking, Tax, etc.",
        }
    }

    /// Longer, player-friendly explanation.
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            RuleCategory::RegularMovement => {
                "Add up all the numbers and move that many spaces! Easy peasy! 🎯"
            }
            RuleCategory::MrMonopoly => {
                "Mr. Monopoly helps you find properties! Move normally, then zoom to the next property you can buy! 🎩"
            }
            RuleCategory::Bus => {
                "The bus is like a shortcut! You can take it to skip ahead, or walk normally. Your choice! 🚌"
            }
            RuleCategory::Chance => {
                "Mystery time! Move your piece, then pick a Chance card to see what happens! ❓"
            }
            RuleCategory::Doubles => {
                "Lucky you! When both dice match, you get to roll again! But watch out - three doubles means jail time! 🎲🎲"
            }
            RuleCategory::Jail => {
                "Uh oh! You're in jail. You can pay $50, use a Get Out card, or try to roll doubles! 👮"
            }
            RuleCategory::SpecialSpaces => {
                "Some board spaces are special! Follow the instructions on that space. ⭐"
            }
        }
    }

    /// Reference entry for this category.
    #[must_use]
    pub fn info(self) -> CategoryInfo {
        CategoryInfo {
            id: self.id(),
            name: self.name(),
            icon: self.icon(),
            description: self.summary(),
        }
    }

    /// Reference entries for every category.
    #[must_use]
    pub fn all() -> Vec<CategoryInfo> {
        Self::ALL.iter().map(|c| c.info()).collect()
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// One row of the category reference table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: u8,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Long explanation for a category name.
///
/// ```
/// use speed_die_rules::rules::{describe_category, FALLBACK_EXPLANATION};
///
/// assert!(describe_category("Bus").contains("shortcut"));
/// assert_eq!(describe_category("Teleport"), FALLBACK_EXPLANATION);
/// ```
#[must_use]
pub fn describe_category(category: &str) -> &'static str {
    category
        .parse::<RuleCategory>()
        .map(RuleCategory::explanation)
        .unwrap_or(FALLBACK_EXPLANATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for category in RuleCategory::ALL {
            assert_eq!(category.name().parse::<RuleCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_reference_table() {
        let table = RuleCategory::all();
        assert_eq!(table.len(), 7);
        assert_eq!(table[0].name, "Regular Movement");
        assert_eq!(table[6].id, 7);
        assert_eq!(table[5].icon, "👮");
    }

    #[test]
    fn test_describe_category() {
        assert!(describe_category("Doubles").contains("roll again"));
        assert!(describe_category("Jail").contains("$50"));
        assert_eq!(describe_category("doubles"), FALLBACK_EXPLANATION);
        assert_eq!(describe_category(""), FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&RuleCategory::Chance).unwrap(), "\"CHANCE\"");
        let parsed: RuleCategory = serde_json::from_str("\"Regular Movement\"").unwrap();
        assert_eq!(parsed, RuleCategory::RegularMovement);
    }
}
