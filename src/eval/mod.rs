//! Position evaluation for the search leaves
//!
//! - [`heuristic`]: the `Evaluator` variants and their scoring
//! - [`weights`]: the positional weight table

pub mod heuristic;
pub mod weights;

pub use heuristic::Evaluator;
pub use weights::{position_weight, POSITION_WEIGHTS};
