use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Color of a placed stone. An empty cell is `None` wherever a cell is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Decode a stored cell value. Zero is an empty cell.
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Board dump character. `highlight` selects the lower case form used for
    /// the most recent move.
    pub fn symbol(self, highlight: bool) -> char {
        match (self, highlight) {
            (Stone::Black, false) => 'B',
            (Stone::Black, true) => 'b',
            (Stone::White, false) => 'W',
            (Stone::White, true) => 'w',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}
