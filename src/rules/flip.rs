//! In-place move application with exact undo
//!
//! `apply_move` places a disc and flips every bracketed opponent run,
//! recording the flipped cells in a `ChangeList`. Passing that list to
//! `undo_move` restores the board cell-for-cell, so the search can walk the
//! tree on a single working board without copying it.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, DIRECTIONS};
use crate::error::{EngineError, EngineResult};

use super::moves::captures_in_direction;

/// Upper bound on discs flipped by one move: every direction can hold at most
/// `BOARD_SIZE - 2` opponent discs between the move and the closing disc.
pub const MAX_FLIPS: usize = DIRECTIONS.len() * (BOARD_SIZE - 2);

/// Cells changed by one `apply_move`, consumed by the matching `undo_move`.
///
/// Flipped cells are stored in traversal order: directions in `DIRECTIONS`
/// order, nearest cell first. Each flipped cell previously belonged to
/// `color.opponent()`.
#[derive(Debug, Clone, Copy)]
pub struct ChangeList {
    pos: Pos,
    color: Stone,
    flipped: [Pos; MAX_FLIPS],
    count: u8,
}

impl ChangeList {
    fn new(pos: Pos, color: Stone) -> Self {
        Self {
            pos,
            color,
            flipped: [Pos { row: 0, col: 0 }; MAX_FLIPS],
            count: 0,
        }
    }

    #[inline]
    fn push(&mut self, pos: Pos) {
        self.flipped[self.count as usize] = pos;
        self.count += 1;
    }

    /// The cell the disc was placed on
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The side that moved
    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Owner of every flipped cell before the move
    #[inline]
    pub fn previous_owner(&self) -> Stone {
        self.color.opponent()
    }

    /// Flipped cells in traversal order
    #[inline]
    pub fn flipped(&self) -> &[Pos] {
        &self.flipped[..self.count as usize]
    }

    /// Number of flipped cells (the move's capture count)
    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Play `color` at `pos`, flipping every bracketed opponent run.
///
/// # Errors
///
/// - `EngineError::InvalidColor` if `color` is `Stone::Empty`
/// - `EngineError::OutOfBounds` if `pos` is off the grid
/// - `EngineError::InvalidMove` if the cell is occupied or the move flips
///   nothing
///
/// On error the board is left untouched.
pub fn apply_move(board: &mut Board, pos: Pos, color: Stone) -> EngineResult<ChangeList> {
    if !color.is_player() {
        return Err(EngineError::InvalidColor(color));
    }
    if !pos.on_board() {
        return Err(EngineError::OutOfBounds {
            row: i32::from(pos.row),
            col: i32::from(pos.col),
        });
    }
    let invalid = || EngineError::InvalidMove {
        row: pos.row,
        col: pos.col,
        color,
    };
    if !board.is_empty(pos) {
        return Err(invalid());
    }

    let mut changes = ChangeList::new(pos, color);
    for &(dr, dc) in &DIRECTIONS {
        let run = captures_in_direction(board, pos, dr, dc, color);
        let mut cursor = pos;
        for _ in 0..run {
            // The run was just measured, so every step stays on the board
            let Some(next) = cursor.offset(dr, dc) else {
                break;
            };
            board.set(next, color);
            changes.push(next);
            cursor = next;
        }
    }

    if changes.is_empty() {
        return Err(invalid());
    }
    board.set(pos, color);
    Ok(changes)
}

/// Revert a move made by `apply_move`.
///
/// Flips are restored independently of their order.
pub fn undo_move(board: &mut Board, changes: &ChangeList) {
    let previous = changes.previous_owner();
    board.set(changes.pos(), Stone::Empty);
    for &pos in changes.flipped() {
        board.set(pos, previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::moves::{capture_count, legal_moves};

    #[test]
    fn test_apply_opening_move() {
        let mut board = Board::new();
        let changes = apply_move(&mut board, Pos::new(2, 4), Stone::Black).unwrap();

        assert_eq!(changes.flipped(), &[Pos::new(3, 4)]);
        assert_eq!(changes.previous_owner(), Stone::White);
        assert_eq!(board.get(Pos::new(2, 4)), Stone::Black);
        assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
        assert_eq!(board.count(Stone::Black), 4);
        assert_eq!(board.count(Stone::White), 1);
    }

    #[test]
    fn test_undo_restores_board() {
        let original = Board::new();
        let mut board = original.clone();
        let changes = apply_move(&mut board, Pos::new(5, 3), Stone::Black).unwrap();
        assert_ne!(board, original);

        undo_move(&mut board, &changes);
        assert_eq!(board, original);
    }

    #[test]
    fn test_flip_order_follows_directions() {
        let mut board = Board::empty();
        let center = Pos::new(3, 3);
        // ↑ two whites, → one white, both closed by black
        board.set(Pos::new(2, 3), Stone::White);
        board.set(Pos::new(1, 3), Stone::White);
        board.set(Pos::new(0, 3), Stone::Black);
        board.set(Pos::new(3, 4), Stone::White);
        board.set(Pos::new(3, 5), Stone::Black);

        let changes = apply_move(&mut board, center, Stone::Black).unwrap();
        assert_eq!(
            changes.flipped(),
            &[Pos::new(2, 3), Pos::new(1, 3), Pos::new(3, 4)]
        );
        assert_eq!(board.count(Stone::White), 0);
    }

    #[test]
    fn test_unbracketed_runs_untouched() {
        let mut board = Board::empty();
        // Left run closed, right run open at the edge
        board.set(Pos::new(6, 0), Stone::Black);
        board.set(Pos::new(6, 1), Stone::White);
        board.set(Pos::new(6, 3), Stone::White);
        board.set(Pos::new(6, 4), Stone::White);

        let changes = apply_move(&mut board, Pos::new(6, 2), Stone::Black).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(board.get(Pos::new(6, 3)), Stone::White);
        assert_eq!(board.get(Pos::new(6, 4)), Stone::White);
    }

    #[test]
    fn test_illegal_move_rejected_without_mutation() {
        let original = Board::new();
        let mut board = original.clone();

        let err = apply_move(&mut board, Pos::new(0, 0), Stone::Black).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMove {
                row: 0,
                col: 0,
                color: Stone::Black
            }
        );
        assert_eq!(board, original);

        // Occupied target
        assert!(apply_move(&mut board, Pos::new(3, 3), Stone::White).is_err());
        assert_eq!(board, original);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut board = Board::empty();
        board.set(Pos::new(6, 0), Stone::Black);
        board.set(Pos::new(7, 0), Stone::White);
        let original = board.clone();

        // Row 8 would alias bit 0 if it reached the bitboard
        let off_board = Pos { row: 8, col: 0 };
        assert_eq!(
            apply_move(&mut board, off_board, Stone::Black).unwrap_err(),
            EngineError::OutOfBounds { row: 8, col: 0 }
        );
        assert_eq!(board, original);
        assert_eq!(board.get(Pos::new(0, 0)), Stone::Empty);

        let far = Pos { row: 3, col: 200 };
        assert!(matches!(
            apply_move(&mut board, far, Stone::White),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert_eq!(board, original);
    }

    #[test]
    fn test_empty_color_rejected() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, Pos::new(2, 4), Stone::Empty).unwrap_err(),
            EngineError::InvalidColor(Stone::Empty)
        );
    }

    #[test]
    fn test_change_list_matches_capture_count() {
        let mut board = Board::new();
        let sequence = [
            (Pos::new(2, 4), Stone::Black),
            (Pos::new(2, 3), Stone::White),
            (Pos::new(2, 2), Stone::Black),
            (Pos::new(2, 5), Stone::White),
        ];
        for (pos, color) in sequence {
            apply_move(&mut board, pos, color).unwrap();
        }

        for mv in legal_moves(&board, Stone::Black) {
            let before = board.clone();
            let expected = capture_count(&board, mv.pos, Stone::Black);
            let changes = apply_move(&mut board, mv.pos, Stone::Black).unwrap();
            assert_eq!(changes.len() as u32, expected);
            assert_eq!(changes.len() as u32, mv.captures);
            undo_move(&mut board, &changes);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_max_flips_bound() {
        assert_eq!(MAX_FLIPS, 48);
    }
}
