use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GoError;

/// Whether the engine enforces color alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// Either color may place at any time.
    #[default]
    Free,
    /// A color may not act twice in a row; passes count as acting.
    Alternating,
}

impl fmt::Display for TurnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOrder::Free => write!(f, "free"),
            TurnOrder::Alternating => write!(f, "alternating"),
        }
    }
}

impl std::str::FromStr for TurnOrder {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(TurnOrder::Free),
            "alternating" => Ok(TurnOrder::Alternating),
            _ => Err(GoError::invalid(format!("unknown turn order: {s}"))),
        }
    }
}

/// Per-game rule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub turn_order: TurnOrder,
}

impl Rules {
    pub fn alternating() -> Self {
        Rules {
            turn_order: TurnOrder::Alternating,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn enforces_turns(&self) -> bool {
        self.turn_order == TurnOrder::Alternating
    }
}
