use crate::Point;
use crate::error::{GoError, IllegalMove};
use crate::goban::Goban;
use crate::group;
use crate::ko::Ko;
use crate::stone::Stone;

/// Board legality of placing `stone` at `point`: bounds, occupancy, ko, then
/// suicide. Turn order is not considered here.
///
/// Capturing relieves suicide: a move that leaves an adjacent opponent group
/// without liberties is legal even if the placed stone has none before the
/// capture is resolved.
pub fn check(goban: &Goban, ko: Option<&Ko>, point: Point, stone: Stone) -> Result<(), GoError> {
    if goban.get(point)?.is_some() {
        return Err(IllegalMove::Occupied.into());
    }

    if ko.is_some_and(|ko| ko.forbids(point, stone)) {
        return Err(IllegalMove::Ko.into());
    }

    let mut scratch = goban.clone();
    scratch.set_stone(point, stone)?;

    let captures = group::neighbor_groups(&scratch, point, stone.opp())
        .iter()
        .any(|g| g.is_dead());
    if captures {
        return Ok(());
    }

    if group::analyze(&scratch, point)?.is_dead() {
        return Err(IllegalMove::Suicide.into());
    }

    Ok(())
}

pub fn is_legal(goban: &Goban, ko: Option<&Ko>, point: Point, stone: Stone) -> bool {
    check(goban, ko, point, stone).is_ok()
}
