//! Search module for the Reversi AI
//!
//! Contains:
//! - Fixed-depth alpha-beta minimax with capture-count move ordering
//! - A one-ply greedy capture maximizer

pub mod alphabeta;
pub mod greedy;

pub use alphabeta::{order_moves, NodeKind, SearchResult, SearchStats, Searcher, INF};
pub use greedy::greedy_move;
