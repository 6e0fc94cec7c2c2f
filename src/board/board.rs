//! Board structure: cell ownership for both sides

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{EngineError, EngineResult};

/// Game board.
///
/// Every cell is in exactly one of the three `Stone` states: a position is
/// never set in both bitboards. Equality is cell-by-cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Board in the canonical starting position.
    ///
    /// Black holds (3,3) and (4,4), White holds (3,4) and (4,3).
    pub fn new() -> Self {
        let half = (BOARD_SIZE / 2) as u8;
        let mut board = Self::empty();
        board.set(Pos::new(half - 1, half - 1), Stone::Black);
        board.set(Pos::new(half, half), Stone::Black);
        board.set(Pos::new(half, half - 1), Stone::White);
        board.set(Pos::new(half - 1, half), Stone::White);
        board
    }

    /// Board with every cell empty.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// True iff `0 <= row < 8` and `0 <= col < 8`.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Checked cell read for signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if the coordinate is off the grid.
    pub fn owner(&self, row: i32, col: i32) -> EngineResult<Stone> {
        Pos::try_new(row, col)
            .map(|pos| self.get(pos))
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell. `Stone::Empty` clears it.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Stone::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
            Stone::Empty => {
                self.black.clear(pos);
                self.white.clear(pos);
            }
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Number of cells in the given state.
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => self.empty_count(),
        }
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.black.count() - self.white.count()
    }

    /// Total discs on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight lines of eight symbols separated by single spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the snapshot format written by `Display`.
///
/// Blank lines are skipped and whitespace between cells is ignored, so both
/// `B W . .` and `BW..` rows are accepted.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut rows = 0usize;

        for line in s.lines() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            if rows == BOARD_SIZE {
                return Err(EngineError::Parse(format!(
                    "more than {BOARD_SIZE} rows"
                )));
            }
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::Parse(format!(
                    "row {rows} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let stone = Stone::from_symbol(ch).ok_or_else(|| {
                    EngineError::Parse(format!("unexpected symbol '{ch}' at row {rows}"))
                })?;
                board.set(Pos::new(rows as u8, col as u8), stone);
            }
            rows += 1;
        }

        if rows != BOARD_SIZE {
            return Err(EngineError::Parse(format!(
                "found {rows} rows, expected {BOARD_SIZE}"
            )));
        }
        Ok(board)
    }
}
