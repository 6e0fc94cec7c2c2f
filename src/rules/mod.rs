//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Move legality and capture counting (bracketing runs in 8 directions)
//! - In-place move application with exact undo
//! - Game-over and winner queries for the game driver

pub mod flip;
pub mod game;
pub mod moves;

// Re-exports for convenient access
pub use flip::{apply_move, undo_move, ChangeList, MAX_FLIPS};
pub use game::{is_game_over, stone_counts, winner};
pub use moves::{
    can_play, capture_count, captures_in_direction, is_legal_move, legal_moves, LegalMove,
};
