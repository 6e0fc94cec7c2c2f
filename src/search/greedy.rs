//! One-ply capture maximizer
//!
//! Picks the legal move that flips the most discs, with no lookahead.
//! Ties go to the first move in row-major order.

use crate::board::{Board, Stone};
use crate::rules::{legal_moves, LegalMove};

/// Legal move with the highest capture count, `None` if `color` must pass.
#[must_use]
pub fn greedy_move(board: &Board, color: Stone) -> Option<LegalMove> {
    legal_moves(board, color)
        .into_iter()
        .fold(None, |best, mv| match best {
            Some(b) if b.captures >= mv.captures => Some(b),
            _ => Some(mv),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_greedy_opening_takes_first() {
        let board = Board::new();
        let mv = greedy_move(&board, Stone::Black).unwrap();
        assert_eq!(mv.pos, Pos::new(2, 4));
        assert_eq!(mv.captures, 1);
    }

    #[test]
    fn test_greedy_prefers_larger_capture() {
        let mut board = Board::empty();
        board.set(Pos::new(5, 0), Stone::Black);
        board.set(Pos::new(6, 0), Stone::White);
        board.set(Pos::new(7, 1), Stone::White);
        board.set(Pos::new(7, 2), Stone::White);
        board.set(Pos::new(7, 3), Stone::Black);

        // (7,0) closes both runs: one up, two to the right
        let mv = greedy_move(&board, Stone::Black).unwrap();
        assert_eq!(mv.pos, Pos::new(7, 0));
        assert_eq!(mv.captures, 3);
    }

    #[test]
    fn test_greedy_pass() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Stone::Black);
        assert_eq!(greedy_move(&board, Stone::White), None);
    }
}
