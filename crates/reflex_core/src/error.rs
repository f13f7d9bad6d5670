//! Error types for the session engine
//!
//! Placement exhaustion is never returned to callers: the placement code
//! falls back to relaxed placement and reports the error through the log.
//! Persistence errors are surfaced so callers can log them and keep playing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),

    #[error("Placement exhausted after {attempts} attempts, separation constraint relaxed")]
    PlacementExhausted { attempts: u32 },

    #[error("Score storage unavailable: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Score file is malformed: {0}")]
    MalformedScores(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
