use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::capture;
use crate::error::{GoError, IllegalMove};
use crate::goban::Goban;
use crate::group::{self, Group};
use crate::ko::{Ko, KoTracker};
use crate::legality;
use crate::rules::Rules;
use crate::stone::Stone;
use crate::turn::{Move, Turn, TurnSequencer};

/// Prisoners taken, indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: usize) {
        let count = count as u32;
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Outcome of an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Opponent stones removed by the move.
    pub captured: Vec<Point>,
    /// Ko left for the opponent's next move.
    pub ko: Option<Ko>,
}

/// One game: board, ko, turn order and history.
///
/// Every method runs to completion without suspension. Callers sharing a game
/// across threads should hold the whole engine behind one lock.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Rules,
    goban: Goban,
    ko: KoTracker,
    turns: TurnSequencer,
    captures: Captures,
    moves: Vec<Turn>,
}

impl Engine {
    /// Empty `size` x `size` board with free placement.
    pub fn new(size: u8) -> Result<Self, GoError> {
        Self::with_rules(size, Rules::default())
    }

    pub fn with_rules(size: u8, rules: Rules) -> Result<Self, GoError> {
        Ok(Self::create(Goban::new(size)?, rules))
    }

    /// Start from a text position (see `Goban::from_layout`). The position
    /// is taken as given: no ko, no turn recorded, no history.
    pub fn from_layout(layout: &[&str], rules: Rules) -> Result<Self, GoError> {
        Ok(Self::create(Goban::from_layout(layout)?, rules))
    }

    /// Replay `moves` onto an empty board, stopping at the first rejected turn.
    pub fn with_moves(size: u8, rules: Rules, moves: &[Turn]) -> Result<Self, GoError> {
        let mut engine = Self::with_rules(size, rules)?;
        for turn in moves {
            match (turn.kind, turn.pos) {
                (Move::Play, Some(point)) => {
                    engine.place_stone(point, turn.stone)?;
                }
                (Move::Play, None) => {
                    return Err(GoError::invalid("play turn without a point"));
                }
                (Move::Pass, _) => engine.pass(turn.stone)?,
            }
        }
        Ok(engine)
    }

    fn create(goban: Goban, rules: Rules) -> Self {
        Engine {
            rules,
            goban,
            ko: KoTracker::new(),
            turns: TurnSequencer::new(),
            captures: Captures::new(),
            moves: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.get()
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    /// Point of the most recent placement, if the last turn was one.
    pub fn last_play(&self) -> Option<Point> {
        self.moves.last().filter(|t| t.is_play()).and_then(|t| t.pos)
    }

    /// Color expected next under alternation.
    pub fn to_play(&self) -> Stone {
        self.turns.to_play()
    }

    pub fn stone_at(&self, point: Point) -> Result<Option<Stone>, GoError> {
        self.goban.get(point)
    }

    pub fn group(&self, point: Point) -> Result<Group, GoError> {
        group::analyze(&self.goban, point)
    }

    pub fn liberty_count(&self, point: Point) -> Result<usize, GoError> {
        Ok(self.group(point)?.liberty_count())
    }

    // -- Legality --

    /// Everything `place_stone` would reject, without touching the game.
    pub fn check(&self, point: Point, stone: Stone) -> Result<(), GoError> {
        self.check_turn(stone)?;
        legality::check(&self.goban, self.ko.get(), point, stone)
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.check(point, stone).is_ok()
    }

    fn check_turn(&self, stone: Stone) -> Result<(), GoError> {
        if self.rules.enforces_turns() && !self.turns.next_allowed(stone) {
            return Err(IllegalMove::OutOfTurn.into());
        }
        Ok(())
    }

    // -- Game actions --

    /// Place a stone and resolve captures. A rejected move leaves the game
    /// untouched.
    pub fn place_stone(&mut self, point: Point, stone: Stone) -> Result<Placement, GoError> {
        if let Err(e) = self.check(point, stone) {
            tracing::debug!("rejected {stone} at {point:?}: {e}");
            return Err(e);
        }

        self.goban.set_stone(point, stone)?;
        let capture = capture::resolve(&mut self.goban, point, stone);
        let ko = self.ko.record(&capture);

        self.captures.add(stone, capture.captured.len());
        self.captures.add(stone.opp(), capture.self_captured.len());
        self.turns.record_move(stone);
        self.moves.push(Turn::play(stone, point));

        tracing::trace!("{stone} played {point:?}\n{self}");

        Ok(Placement {
            captured: capture.captured,
            ko,
        })
    }

    /// Pass. Lifts any ko; only turn order can refuse it.
    pub fn pass(&mut self, stone: Stone) -> Result<(), GoError> {
        if let Err(e) = self.check_turn(stone) {
            tracing::debug!("rejected pass by {stone}: {e}");
            return Err(e);
        }

        self.ko.clear();
        self.turns.record_pass(stone);
        self.moves.push(Turn::pass(stone));
        tracing::trace!("{stone} passed");
        Ok(())
    }
}

/// Board dump with the latest placement in lower case.
impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.goban.dump(self.last_play()))
    }
}
