//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! max_depth = 4
//! evaluator = "positional"
//! move_ordering = true
//! strategy = "alpha_beta"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::eval::Evaluator;

/// Deepest search the configuration accepts.
pub const MAX_SEARCH_DEPTH: u8 = 12;

/// How the engine picks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fixed-depth minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Most captures right now, no lookahead
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AlphaBeta => f.write_str("alpha_beta"),
            Strategy::Greedy => f.write_str("greedy"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "alpha_beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            "greedy" => Ok(Strategy::Greedy),
            other => Err(format!(
                "unknown strategy '{other}' (expected alpha_beta or greedy)"
            )),
        }
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies; 0 returns no move without searching
    pub max_depth: u8,
    /// Leaf evaluation function
    pub evaluator: Evaluator,
    /// Sort candidates by capture count before searching them
    pub move_ordering: bool,
    /// Move selection strategy
    pub strategy: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            evaluator: Evaluator::Material,
            move_ordering: true,
            strategy: Strategy::AlphaBeta,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "max_depth must be <= {MAX_SEARCH_DEPTH}, got {}",
                self.max_depth
            )));
        }
        Ok(())
    }
}
