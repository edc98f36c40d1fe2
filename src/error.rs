//! Error types for the take-away engine.

use thiserror::Error;

use crate::core::{Move, PlayerId};

/// Main error type for the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("illegal move {mv}: {remaining} remaining, at most {max_take} per turn")]
    IllegalMove {
        mv: Move,
        remaining: u32,
        max_take: u8,
    },

    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("not waiting on a human move: {expected} is an agent")]
    NotAwaitingHuman { expected: PlayerId },

    #[error("waiting on a human move from {player}")]
    AwaitingHuman { player: PlayerId },

    #[error("match is already over")]
    MatchOver,

    #[error("game '{name}' not found")]
    GameNotFound { name: String },

    #[error("game '{name}' already exists")]
    DuplicateGame { name: String },

    #[error("invalid score {score}: {message}")]
    InvalidScore { score: i64, message: String },

    #[error("cannot bet {requested}: only {available} in the wallet")]
    InsufficientFunds { requested: i64, available: i64 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl EngineError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
