//! Positional weights for the 8x8 board
//!
//! Corners are worth the most, edges and the inner ring next, and the cells
//! adjacent to corners are worth nothing since taking them usually hands
//! the corner to the opponent.

use crate::board::{Pos, BOARD_SIZE};

/// Per-cell weight, indexed `[row][col]`. Symmetric under both mirrors.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [25, 0, 6, 5, 5, 6, 0, 25],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [6, 1, 4, 3, 3, 4, 1, 6],
    [5, 1, 3, 2, 2, 3, 1, 5],
    [5, 1, 3, 2, 2, 3, 1, 5],
    [6, 1, 4, 3, 3, 4, 1, 6],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [25, 0, 6, 5, 5, 6, 0, 25],
];

/// Weight of a single cell
#[inline]
pub fn position_weight(pos: Pos) -> i32 {
    POSITION_WEIGHTS[pos.row as usize][pos.col as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_symmetric() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let w = POSITION_WEIGHTS[r][c];
                assert_eq!(w, POSITION_WEIGHTS[BOARD_SIZE - 1 - r][c]);
                assert_eq!(w, POSITION_WEIGHTS[r][BOARD_SIZE - 1 - c]);
                assert_eq!(w, POSITION_WEIGHTS[c][r]);
            }
        }
    }

    #[test]
    fn test_corners_dominate() {
        let corner = position_weight(Pos::new(0, 0));
        for pos in Pos::all() {
            assert!(position_weight(pos) <= corner);
        }
        assert_eq!(position_weight(Pos::new(1, 1)), 0);
        assert_eq!(position_weight(Pos::new(0, 1)), 0);
    }
}
