//! Fixed-depth minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Reversi AI.
//!
//! # Features
//!
//! - Explicit Maximizing/Minimizing node kinds, flipped every ply
//! - Leaves scored from the root player's perspective at every depth
//! - In-place apply/undo on one working board (no per-node copies)
//! - Capture-count move ordering for earlier cutoffs
//! - Forced passes consume a ply and hand the turn to the other side
//!
//! There is no transposition table and no time limit: a search always runs
//! to its fixed depth and is deterministic for a given board and settings.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Stone};
//! use reversi::eval::Evaluator;
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new(Evaluator::Material);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Stone::Black, 3).unwrap();
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::error::{EngineError, EngineResult};
use crate::eval::Evaluator;
use crate::rules::{apply_move, legal_moves, undo_move, LegalMove};

/// Infinity score for alpha-beta bounds. Larger than any leaf score.
pub const INF: i32 = 1_000_000;

/// Which side of the minimax a node is on.
///
/// `Maximizing` nodes are the root player's turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Maximizing,
    Minimizing,
}

impl NodeKind {
    /// Node kind one ply deeper
    #[inline]
    pub fn flip(self) -> NodeKind {
        match self {
            NodeKind::Maximizing => NodeKind::Minimizing,
            NodeKind::Minimizing => NodeKind::Maximizing,
        }
    }

    /// Value a node of this kind starts from before seeing any child
    #[inline]
    fn worst(self) -> i32 {
        match self {
            NodeKind::Maximizing => -INF,
            NodeKind::Minimizing => INF,
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes where remaining siblings were skipped (alpha >= beta)
    pub cutoffs: u64,
    /// Nodes where the side to move had no legal move
    pub passes: u64,
    /// Depth-0 nodes scored by the evaluator
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` if the side to move must pass or depth is 0
    pub best_move: Option<Pos>,
    /// Minimax value of the root from the root player's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Legal moves for `color`, sorted by capture count (most first) when
/// `ordered` is set.
///
/// The sort is stable, so equal capture counts keep row-major order. Any
/// search that needs to agree move-for-move with this one must use the same
/// ordering.
#[must_use]
pub fn order_moves(board: &Board, color: Stone, ordered: bool) -> Vec<LegalMove> {
    let mut moves = legal_moves(board, color);
    if ordered {
        moves.sort_by(|a, b| b.captures.cmp(&a.captures));
    }
    moves
}

/// Alpha-beta searcher.
///
/// Holds the evaluation settings and the counters of the last search.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    move_ordering: bool,
    nodes: u64,
    root_depth: u8,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with move ordering enabled.
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            move_ordering: true,
            nodes: 0,
            root_depth: 0,
            stats: SearchStats::default(),
        }
    }

    /// Enable or disable capture-count move ordering.
    ///
    /// Ordering only affects how much is pruned and which of several
    /// equally valued moves is reported.
    #[must_use]
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    #[inline]
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    #[inline]
    pub fn set_evaluator(&mut self, evaluator: Evaluator) {
        self.evaluator = evaluator;
    }

    #[inline]
    pub fn move_ordering(&self) -> bool {
        self.move_ordering
    }

    #[inline]
    pub fn set_move_ordering(&mut self, enabled: bool) {
        self.move_ordering = enabled;
    }

    /// Search `max_depth` plies for the best move of `color`.
    ///
    /// The board is a snapshot: it is copied once into a working board that
    /// the search mutates and restores.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidColor` if `color` is `Stone::Empty`. Any other
    /// error means the move generator and the mutator disagree.
    pub fn search(
        &mut self,
        board: &Board,
        color: Stone,
        max_depth: u8,
    ) -> EngineResult<SearchResult> {
        if !color.is_player() {
            return Err(EngineError::InvalidColor(color));
        }

        self.nodes = 0;
        self.root_depth = max_depth;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let (score, best_move) = self.alpha_beta(
            &mut work_board,
            color,
            color,
            max_depth,
            -INF,
            INF,
            NodeKind::Maximizing,
        )?;
        debug_assert_eq!(&work_board, board, "search must restore the board");

        Ok(SearchResult {
            best_move,
            score,
            depth: max_depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        })
    }

    /// Recursive minimax step with alpha-beta pruning.
    ///
    /// `root` fixes the scoring perspective for the whole tree; `acting` is
    /// the side to move at this node. Returns the node value and, for nodes
    /// where `acting` actually moved, the move that produced it.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        root: Stone,
        acting: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        kind: NodeKind,
    ) -> EngineResult<(i32, Option<Pos>)> {
        self.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return Ok((self.evaluator.score(board, root, root.opponent()), None));
        }

        let moves = order_moves(board, acting, self.move_ordering);

        // Forced pass: the other side moves, one ply deeper. If it cannot
        // move either, the passes continue until depth runs out.
        if moves.is_empty() {
            self.stats.passes += 1;
            let (value, _) = self.alpha_beta(
                board,
                root,
                acting.opponent(),
                depth - 1,
                alpha,
                beta,
                kind.flip(),
            )?;
            return Ok((value, None));
        }

        let mut best_value = kind.worst();
        let mut best_move = None;

        for mv in &moves {
            let changes = apply_move(board, mv.pos, acting)?;
            let child = self.alpha_beta(
                board,
                root,
                acting.opponent(),
                depth - 1,
                alpha,
                beta,
                kind.flip(),
            );
            undo_move(board, &changes);
            let (value, _) = child?;

            if depth == self.root_depth {
                trace!(
                    row = mv.pos.row,
                    col = mv.pos.col,
                    captures = mv.captures,
                    value,
                    "root candidate"
                );
            }

            // Ties keep the earlier move
            match kind {
                NodeKind::Maximizing => {
                    if value > best_value {
                        best_value = value;
                        best_move = Some(mv.pos);
                        alpha = alpha.max(value);
                    }
                }
                NodeKind::Minimizing => {
                    if value < best_value {
                        best_value = value;
                        best_move = Some(mv.pos);
                        beta = beta.min(value);
                    }
                }
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_value, best_move))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}
