//! Error types for the practice engine.

use thiserror::Error;

/// Result type alias using PreconditionViolation.
pub type Result<T> = std::result::Result<T, PreconditionViolation>;

/// Calls the practice flow must never make. Counters are untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    #[error("session is completed, restart to practice again")]
    SessionCompleted,

    #[error("option {option:?} is not offered by the current question")]
    UnknownOption { option: String },

    #[error("current question was already answered")]
    AlreadyAnswered,
}
