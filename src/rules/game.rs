//! End-of-game queries
//!
//! The search never calls these: a position where neither side can move is
//! simply searched until the depth runs out. They exist for the game driver,
//! which owns turn order and final scoring.

use crate::board::{Board, Stone};

use super::moves::can_play;

/// Disc counts as `(black, white)`.
#[inline]
#[must_use]
pub fn stone_counts(board: &Board) -> (u32, u32) {
    (board.count(Stone::Black), board.count(Stone::White))
}

/// True when neither side has a legal move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !can_play(board, Stone::Black) && !can_play(board, Stone::White)
}

/// Side with more discs once the game is over.
///
/// Returns `None` while either side can still move, and on a draw.
#[must_use]
pub fn winner(board: &Board) -> Option<Stone> {
    if !is_game_over(board) {
        return None;
    }
    let (black, white) = stone_counts(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Stone::Black),
        std::cmp::Ordering::Less => Some(Stone::White),
        std::cmp::Ordering::Equal => None,
    }
}
