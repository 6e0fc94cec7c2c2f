//! Heuristic evaluation of a board from one side's point of view
//!
//! Both variants are pure functions of the board. The search always scores
//! leaves from the root player's perspective, so minimizing nodes minimize
//! the root player's advantage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Stone};

use super::weights::position_weight;

/// Leaf evaluation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluator {
    /// Disc differential: `count(me) - count(opponent)`
    #[default]
    Material,
    /// Sum of positional weights over the cells `me` owns
    Positional,
}

impl Evaluator {
    /// Score `board` for `me` against `opponent`.
    ///
    /// # Returns
    /// Positive values favour `me`. The positional variant never goes below
    /// zero since it only counts `me`'s discs.
    #[must_use]
    pub fn score(self, board: &Board, me: Stone, opponent: Stone) -> i32 {
        match self {
            Evaluator::Material => material(board, me, opponent),
            Evaluator::Positional => positional(board, me),
        }
    }
}

/// Disc count difference.
#[inline]
fn material(board: &Board, me: Stone, opponent: Stone) -> i32 {
    if !me.is_player() || !opponent.is_player() {
        return 0;
    }
    board.count(me) as i32 - board.count(opponent) as i32
}

/// Weighted sum over `me`'s discs.
fn positional(board: &Board, me: Stone) -> i32 {
    let Some(stones) = board.stones(me) else {
        return 0;
    };
    stones.iter_ones().map(position_weight).sum()
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Material => f.write_str("material"),
            Evaluator::Positional => f.write_str("positional"),
        }
    }
}

impl FromStr for Evaluator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(Evaluator::Material),
            "positional" => Ok(Evaluator::Positional),
            other => Err(format!(
                "unknown evaluator '{other}' (expected material or positional)"
            )),
        }
    }
}
