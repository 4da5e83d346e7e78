//! Flood fill over same-colored stones.

use crate::Point;
use crate::error::GoError;
use crate::goban::Goban;
use crate::stone::Stone;

/// A maximal 4-connected set of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    /// Distinct empty points adjacent to the group.
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Compute the group rooted at `point`.
///
/// Fails with `OutOfRange` off the board and `InvalidArgument` on an empty
/// point.
pub fn analyze(goban: &Goban, point: Point) -> Result<Group, GoError> {
    let stone = goban
        .get(point)?
        .ok_or_else(|| GoError::invalid(format!("no stone at {point:?}")))?;

    let cells = goban.board().len();
    let mut visited = vec![false; cells];
    let mut seen_liberty = vec![false; cells];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    let mut stack = vec![point];
    visited[goban.idx(point.0, point.1)] = true;

    while let Some(p) = stack.pop() {
        stones.push(p);
        for n in goban.neighbors(p) {
            let ni = goban.idx(n.0, n.1);
            match goban.stone_at(n) {
                None => {
                    if !seen_liberty[ni] {
                        seen_liberty[ni] = true;
                        liberties.push(n);
                    }
                }
                Some(s) if s == stone && !visited[ni] => {
                    visited[ni] = true;
                    stack.push(n);
                }
                Some(_) => {}
            }
        }
    }

    Ok(Group {
        stone,
        stones,
        liberties,
    })
}

/// Distinct groups of `stone` color touching `point`, each analyzed once.
pub(crate) fn neighbor_groups(goban: &Goban, point: Point, stone: Stone) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for n in goban.neighbors(point) {
        if goban.stone_at(n) != Some(stone) {
            continue;
        }
        if groups.iter().any(|g| g.contains(n)) {
            continue;
        }
        // `n` is on the board and occupied, so analysis cannot fail.
        if let Ok(group) = analyze(goban, n) {
            groups.push(group);
        }
    }

    groups
}
