//! Main AI engine: the single entry point for a game driver
//!
//! The driver hands in a board snapshot and the color to move; the engine
//! returns a move or `None` for a pass. The snapshot is never modified: the
//! search works on its own copy.
//!
//! The driver remains responsible for re-validating the returned move
//! against its own board, applying it, detecting the end of the game and
//! enforcing time limits.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, EngineConfig, Stone};
//!
//! let config = EngineConfig { max_depth: 2, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config).unwrap();
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{EngineConfig, Strategy};
use crate::error::{ConfigError, EngineError, EngineResult};
use crate::rules::can_play;
use crate::search::{greedy_move, SearchResult, Searcher};

/// Which strategy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Side to move had no legal move; nothing was searched
    Pass,
    /// Immediate capture maximizer
    Greedy,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score from the mover's perspective. For
    /// `SearchType::Greedy` this is the capture count of the move instead,
    /// and for `SearchType::Pass` it is 0.
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::Pass,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn greedy(pos: Pos, captures: u32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: captures as i32,
            search_type: SearchType::Greedy,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI Engine for Reversi.
///
/// # Example
///
/// ```
/// use reversi::{AIEngine, Board, Stone};
///
/// let mut engine = AIEngine::new();
/// let board = Board::new();
/// if let Some(best_move) = engine.choose_move(&board, Stone::Black).unwrap() {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration
    /// (depth 3, material evaluation, move ordering on).
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            searcher: Self::build_searcher(&config),
            config,
        }
    }

    /// Create an engine from an explicit configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::Validation` if the configuration is out of range.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            searcher: Self::build_searcher(&config),
            config,
        })
    }

    fn build_searcher(config: &EngineConfig) -> Searcher {
        Searcher::new(config.evaluator).with_move_ordering(config.move_ordering)
    }

    /// Pick a move for `color` on the snapshot `board`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when `color` has no legal move, or when the configured
    /// depth is 0.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidColor` if `color` is `Stone::Empty`.
    pub fn choose_move(&mut self, board: &Board, color: Stone) -> EngineResult<Option<Pos>> {
        Ok(self.get_move_with_stats(board, color)?.best_move)
    }

    /// Pick a move and report how it was found.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidColor` if `color` is `Stone::Empty`.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> EngineResult<MoveResult> {
        if !color.is_player() {
            return Err(EngineError::InvalidColor(color));
        }
        let start = Instant::now();

        if !can_play(board, color) {
            warn!(%color, "no legal move, passing");
            return Ok(MoveResult::pass(elapsed_ms(start)));
        }

        let result = match self.config.strategy {
            Strategy::Greedy => match greedy_move(board, color) {
                Some(mv) => MoveResult::greedy(mv.pos, mv.captures, elapsed_ms(start)),
                None => MoveResult::pass(elapsed_ms(start)),
            },
            Strategy::AlphaBeta => {
                let search = self.searcher.search(board, color, self.config.max_depth)?;
                debug!(
                    cutoffs = search.stats.cutoffs,
                    passes = search.stats.passes,
                    leaves = search.stats.leaves,
                    "search finished"
                );
                MoveResult::from_alphabeta(search, elapsed_ms(start))
            }
        };

        debug!(
            %color,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            strategy = %self.config.strategy,
            "move chosen"
        );
        Ok(result)
    }

    /// Change the search depth.
    ///
    /// # Errors
    ///
    /// `ConfigError::Validation` if `depth` exceeds the configured limit;
    /// the previous depth is kept.
    pub fn set_max_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        let config = EngineConfig {
            max_depth: depth,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current search depth
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
