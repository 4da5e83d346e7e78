use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
}

/// Represents a single turn in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
        }
    }

    pub fn is_play(&self) -> bool {
        self.kind == Move::Play
    }
}

/// Strict color alternation. Kept apart from board legality so free
/// placement (problem setup, analysis) can skip it.
///
/// A pass counts as acting: the passing color may not act again until the
/// other color has moved or passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSequencer {
    last: Option<Stone>,
}

impl TurnSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The color that acted last, by move or pass.
    pub fn last(&self) -> Option<Stone> {
        self.last
    }

    pub fn next_allowed(&self, stone: Stone) -> bool {
        self.last != Some(stone)
    }

    /// Black opens; afterwards the side that did not act last.
    pub fn to_play(&self) -> Stone {
        self.last.map_or(Stone::Black, Stone::opp)
    }

    pub fn record_move(&mut self, stone: Stone) {
        self.last = Some(stone);
    }

    pub fn record_pass(&mut self, stone: Stone) {
        self.last = Some(stone);
    }
}
