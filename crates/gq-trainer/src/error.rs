//! Error types for the trainer services.

use thiserror::Error;

use gq_core::CoreError;

/// Result type for trainer operations.
pub type TrainerResult<T> = Result<T, TrainerError>;

/// Errors that can occur while driving a training session.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// A caller required a quest ID that does not resolve.
    #[error("unknown quest: {0}")]
    UnknownQuest(String),

    /// No quest is currently active.
    #[error("no active quest")]
    NoActiveQuest,

    /// Collection error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
