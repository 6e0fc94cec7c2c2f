//! Reversi AI Engine
//!
//! A deterministic engine for 8x8 Reversi (Othello):
//! - Exact move legality: a move must bracket at least one opponent run
//! - In-place move application with an exact undo
//! - Fixed-depth minimax with alpha-beta pruning
//! - Material or positional leaf evaluation
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, move application/undo, end-of-game queries
//! - [`eval`]: Leaf evaluation
//! - [`search`]: Alpha-beta search and the greedy fallback
//! - [`engine`]: The entry point a game driver calls
//! - [`config`]: Engine settings, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use reversi::{apply_move, AIEngine, Board, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! // Black moves first
//! if let Some(pos) = engine.choose_move(&board, Stone::Black).unwrap() {
//!     apply_move(&mut board, pos, Stone::Black).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! print!("{board}");
//! ```
//!
//! # Scope
//!
//! Turn order, time limits and final scoring belong to the caller. The
//! engine only answers "which move would you play here".

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{EngineConfig, Strategy};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, EngineResult};
pub use eval::Evaluator;
pub use rules::{apply_move, legal_moves, undo_move, ChangeList, LegalMove};
