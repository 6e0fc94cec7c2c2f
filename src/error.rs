//! Error types for the Reversi engine
//!
//! Coordinate and move errors indicate a broken caller contract: the move
//! generator never produces them during search. "No legal move" is not an
//! error anywhere in this crate; it is an empty move list or `None`.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Stone;

/// Errors raised by board access, move application and engine entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the 8x8 grid
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Move applied that is not legal for the stated side
    #[error("illegal move at ({row}, {col}) for {color}")]
    InvalidMove { row: u8, col: u8, color: Stone },

    /// `Stone::Empty` passed where a side to move is required
    #[error("{0} is not a player color")]
    InvalidColor(Stone),

    /// Malformed board snapshot text
    #[error("board snapshot parse error: {0}")]
    Parse(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
