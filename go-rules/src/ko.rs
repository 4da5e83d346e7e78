use serde::{Deserialize, Serialize};

use crate::Point;
use crate::capture::Capture;
use crate::stone::Stone;

/// A single-point ko: the point just emptied by a one-stone capture and the
/// color that may not retake it on the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.pos == point && self.illegal == stone
    }
}

/// Remembers the single ko point left by the previous move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KoTracker {
    ko: Option<Ko>,
}

impl KoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    /// Replace the ko state after an accepted placement.
    pub fn record(&mut self, capture: &Capture) -> Option<Ko> {
        self.ko = capture.ko();
        self.ko
    }

    pub fn clear(&mut self) {
        self.ko = None;
    }
}
