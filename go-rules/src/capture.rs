use crate::Point;
use crate::goban::Goban;
use crate::group::{self, Group};
use crate::ko::Ko;
use crate::stone::Stone;

/// Stones removed by a single placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Color of the stone that was placed.
    pub stone: Stone,
    /// Opponent stones removed.
    pub captured: Vec<Point>,
    /// The placed stone's own group, removed because it had no liberties left.
    pub self_captured: Vec<Point>,
    /// The placed stone's group once the dead stones are gone. `None` when it
    /// was removed itself.
    pub placed: Option<Group>,
}

impl Capture {
    pub fn none(stone: Stone) -> Self {
        Capture {
            stone,
            captured: Vec::new(),
            self_captured: Vec::new(),
            placed: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.captured.is_empty() && self.self_captured.is_empty()
    }

    /// Ko left behind by this capture.
    ///
    /// One opponent stone was taken, and the capturing stone stands alone with
    /// the emptied point as its only liberty. Retaking would capture exactly
    /// one stone back, so the opponent may not play there next. A capturing
    /// stone joined to its own color, or with other liberties, leaves no ko.
    pub fn ko(&self) -> Option<Ko> {
        match (self.captured.as_slice(), &self.placed) {
            ([pos], Some(own)) if own.len() == 1 && own.liberties == [*pos] => Some(Ko {
                pos: *pos,
                illegal: self.stone.opp(),
            }),
            _ => None,
        }
    }
}

/// Remove every group left without liberties by the stone just placed at `point`.
///
/// Opponent groups go first; the placed group is checked afterwards against
/// the opened board. `point` must hold `stone`.
pub(crate) fn resolve(goban: &mut Goban, point: Point, stone: Stone) -> Capture {
    let mut capture = Capture::none(stone);

    let dead: Vec<Group> = group::neighbor_groups(goban, point, stone.opp())
        .into_iter()
        .filter(Group::is_dead)
        .collect();
    for group in dead {
        remove(goban, &group);
        capture.captured.extend(group.stones);
    }

    if let Ok(own) = group::analyze(goban, point) {
        if own.is_dead() {
            remove(goban, &own);
            capture.self_captured = own.stones;
        } else {
            capture.placed = Some(own);
        }
    }

    if !capture.is_empty() {
        tracing::debug!(
            "{stone} at {point:?} captured {} stone(s), lost {}",
            capture.captured.len(),
            capture.self_captured.len()
        );
    }

    capture
}

fn remove(goban: &mut Goban, group: &Group) {
    for &p in &group.stones {
        goban.clear_at(p);
    }
}
