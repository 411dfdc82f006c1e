//! Engine error types

use thiserror::Error;

/// Errors raised by the engine and its settings layer.
///
/// Blocked moves and calls made after game over are not errors; they are
/// reported as `false` or treated as no-ops.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("piece sequence must contain at least one piece")]
    EmptySequence,

    #[error("invalid speed table: {0}")]
    InvalidSpeedTable(String),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    SerializeConfig(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
