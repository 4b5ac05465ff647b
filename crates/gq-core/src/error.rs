use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when mutating an indexed collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The entity carries no usable key (empty or whitespace-only).
    #[error("entity has an empty key")]
    EmptyKey,

    /// An entity with the same key is already present.
    #[error("duplicate key: \"{0}\"")]
    DuplicateKey(String),

    /// The requested key does not exist in the collection.
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),

    /// A replacement entity's own key disagrees with the key being updated.
    #[error("key mismatch: expected \"{expected}\", replacement has \"{found}\"")]
    KeyMismatch {
        /// The key the update was addressed to.
        expected: String,
        /// The key the replacement entity actually carries.
        found: String,
    },
}
