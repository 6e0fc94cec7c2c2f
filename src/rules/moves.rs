//! Move generation for Reversi
//!
//! A move is legal for `color` when the target cell is empty and, in at least
//! one of the eight directions, a contiguous run of opponent discs starting
//! next to the target is closed by a disc of `color`. The run length is the
//! number of discs that direction captures.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// A legal move together with the number of opponent discs it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub pos: Pos,
    pub captures: u32,
}

/// Count opponent discs bracketed along one direction from `pos`.
///
/// Returns 0 when the run hits the edge or an empty cell before a disc of
/// `color`, or when the adjacent cell is not an opponent disc.
#[inline]
pub fn captures_in_direction(board: &Board, pos: Pos, dr: i8, dc: i8, color: Stone) -> u32 {
    if !color.is_player() || !pos.on_board() {
        return 0;
    }
    let opponent = color.opponent();

    let mut run = 0u32;
    let mut cursor = pos.offset(dr, dc);
    while let Some(cell) = cursor {
        let stone = board.get(cell);
        if stone == opponent {
            run += 1;
            cursor = cell.offset(dr, dc);
        } else if stone == color {
            return run;
        } else {
            return 0;
        }
    }

    // Ran off the board without closing the run
    0
}

/// Total discs `color` would capture by playing at `pos`.
///
/// Occupied and off-grid cells capture nothing.
#[must_use]
pub fn capture_count(board: &Board, pos: Pos, color: Stone) -> u32 {
    if !pos.on_board() || !board.is_empty(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| captures_in_direction(board, pos, dr, dc, color))
        .sum()
}

/// Check whether `color` may play at `pos`.
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, color: Stone) -> bool {
    capture_count(board, pos, color) > 0
}

/// All legal moves for `color`, in row-major order.
///
/// An empty result means `color` has to pass.
#[must_use]
pub fn legal_moves(board: &Board, color: Stone) -> Vec<LegalMove> {
    let mut moves = Vec::with_capacity(16);
    if !color.is_player() {
        return moves;
    }

    for pos in Pos::all() {
        let captures = capture_count(board, pos, color);
        if captures > 0 {
            moves.push(LegalMove { pos, captures });
        }
    }
    moves
}

/// Check whether `color` has at least one legal move.
#[must_use]
pub fn can_play(board: &Board, color: Stone) -> bool {
    color.is_player() && Pos::all().any(|pos| is_legal_move(board, pos, color))
}
