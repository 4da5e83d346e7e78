use std::fmt;

/// Why a move was refused. Rejections are ordinary outcomes of interactive
/// play, not caller bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    Occupied,
    Ko,
    Suicide,
    OutOfTurn,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::Occupied => write!(f, "point is occupied"),
            IllegalMove::Ko => write!(f, "ko violation"),
            IllegalMove::Suicide => write!(f, "suicide"),
            IllegalMove::OutOfTurn => write!(f, "out of turn"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// Coordinate outside `[0, size)`.
    OutOfRange,
    /// Malformed input: liberties of an empty cell, bad layout, bad config.
    InvalidArgument(String),
    IllegalMove(IllegalMove),
}

impl GoError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GoError::InvalidArgument(msg.into())
    }

    /// The rejection reason, if this is a rejected move rather than bad input.
    pub fn illegal_move(&self) -> Option<IllegalMove> {
        match self {
            GoError::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfRange => write!(f, "not on board"),
            GoError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GoError::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
        }
    }
}

impl std::error::Error for GoError {}

impl From<IllegalMove> for GoError {
    fn from(reason: IllegalMove) -> Self {
        GoError::IllegalMove(reason)
    }
}

impl From<serde_json::Error> for GoError {
    fn from(e: serde_json::Error) -> Self {
        GoError::InvalidArgument(e.to_string())
    }
}
