//! Rule variants.

use serde::{Deserialize, Serialize};

/// Which rule set a game is played under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleVariant {
    /// Classic rules: a full board with no line is a draw.
    #[default]
    Standard,
    /// Each player keeps at most three marks; a fourth evicts their oldest.
    /// Only a line ends the game.
    NoDraw,
}

impl RuleVariant {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Normal",
            Self::NoDraw => "No Draw",
        }
    }

    /// One-line description of the rules.
    pub fn description(self) -> &'static str {
        match self {
            Self::Standard => "Classic Tic Tac Toe rules.",
            Self::NoDraw => "Oldest marks removed after 3. No draws possible!",
        }
    }

    /// True when marks can be evicted.
    pub fn evicts(self) -> bool {
        matches!(self, Self::NoDraw)
    }
}
