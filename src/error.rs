use thiserror::Error;

pub type Result<T> = std::result::Result<T, StepboardError>;

#[derive(Debug, Error)]
pub enum StepboardError {
    #[error("Unknown column: {0}")]
    InvalidColumn(String),

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Position {position} is out of range for column {column} ({len} cards)")]
    PositionOutOfRange {
        column: String,
        position: usize,
        len: usize,
    },

    #[error("Source and destination are the same column: {0}")]
    SameColumnMove(String),

    #[error("Drop from {from} onto {to} is not allowed")]
    DropRejected { from: String, to: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
