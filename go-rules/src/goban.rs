use arrayvec::ArrayVec;
use std::fmt;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// Square Go board stored as a flat row-major array.
///
/// Points are `(x, y)`: `x` is the column and `y` the row, so a cell lives
/// at `y * size + x`. The text dump prints one line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
}

impl Goban {
    /// Create an empty `size` x `size` board.
    pub fn new(size: u8) -> Result<Self, GoError> {
        if size == 0 {
            return Err(GoError::invalid("board size must be at least 1"));
        }

        Ok(Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
        })
    }

    /// Build a board from text rows. `B`/`b` is Black, `W`/`w` is White and
    /// `-`, `+` or `.` is an empty point. Spaces are ignored so a dump can be
    /// read back.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        let size = u8::try_from(layout.len())
            .map_err(|_| GoError::invalid(format!("layout has {} rows", layout.len())))?;
        let mut goban = Goban::new(size)?;

        for (y, row) in layout.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size as usize {
                return Err(GoError::invalid(format!(
                    "row {y} has {} points, expected {size}",
                    cells.len()
                )));
            }

            for (x, c) in cells.into_iter().enumerate() {
                let stone = match c {
                    'B' | 'b' => Stone::Black,
                    'W' | 'w' => Stone::White,
                    '-' | '+' | '.' => continue,
                    other => {
                        return Err(GoError::invalid(format!(
                            "unexpected character {other:?} at ({x}, {y})"
                        )));
                    }
                };
                goban.set_stone((x as u8, y as u8), stone)?;
            }
        }

        Ok(goban)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    /// The stone at `point`, `None` for an empty point.
    pub fn get(&self, point: Point) -> Result<Option<Stone>, GoError> {
        let i = self.checked_idx(point)?;
        Ok(Stone::from_int(self.board[i]))
    }

    /// Like `get`, for points already known to be on the board.
    pub(crate) fn stone_at(&self, (x, y): Point) -> Option<Stone> {
        Stone::from_int(self.board[self.idx(x, y)])
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.board.iter().filter(|&&s| s == stone.to_int()).count()
    }

    /// Render the board with one highlighted (lower case) point.
    pub fn dump(&self, highlight: Option<Point>) -> String {
        let mut out = String::with_capacity(self.board.len() * 2);
        for y in 0..self.size {
            for x in 0..self.size {
                if x > 0 {
                    out.push(' ');
                }
                out.push(match self.stone_at((x, y)) {
                    Some(stone) => stone.symbol(highlight == Some((x, y))),
                    None => '-',
                });
            }
            out.push('\n');
        }
        out
    }

    // -- Mutation (engine only) --

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) -> Result<(), GoError> {
        let i = self.checked_idx(point)?;
        self.board[i] = stone.to_int();
        Ok(())
    }

    /// Unchecked clear, for points already known to be on the board.
    pub(crate) fn clear_at(&mut self, (x, y): Point) {
        let i = self.idx(x, y);
        self.board[i] = 0;
    }

    // -- Graph helpers --

    /// The 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    #[inline]
    pub(crate) fn idx(&self, x: u8, y: u8) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn checked_idx(&self, point: Point) -> Result<usize, GoError> {
        if self.on_board(point) {
            Ok(self.idx(point.0, point.1))
        } else {
            Err(GoError::OutOfRange)
        }
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(None))
    }
}
