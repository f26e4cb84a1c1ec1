use std::fmt;
use std::path::PathBuf;

/// Why a column cannot take the human's piece
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfRange,
    ColumnFull,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::OutOfRange => write!(f, "out of range"),
            InvalidReason::ColumnFull => write!(f, "full"),
        }
    }
}

/// Errors rejecting a human move. The session is left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} {reason}")]
    InvalidMove { column: usize, reason: InvalidReason },

    #[error("Game is over")]
    GameAlreadyOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
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
