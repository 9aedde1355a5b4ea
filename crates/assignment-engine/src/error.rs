//! Error types for assignment-engine operations.
//!
//! Scheduling and qualification conflicts are *data*, returned inside result
//! records — only genuinely fatal conditions surface as `EngineError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A time-of-day string was not a valid `HH:MM` on a 24-hour clock.
    #[error("Invalid time {input:?}: {reason}")]
    TimeFormat { input: String, reason: String },

    /// The game a status calculation was asked about does not exist.
    #[error("Game {0} not found")]
    GameNotFound(String),

    /// The data-access collaborator failed a read.
    #[error("Store error: {0}")]
    Store(String),

    /// A bulk validation batch was empty or over the size limit.
    #[error("Bulk validation accepts 1 to {max} assignments, got {got}")]
    BatchSize { got: usize, max: usize },
}

/// Convenience alias used throughout assignment-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
