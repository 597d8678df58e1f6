use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the domain and use-case layers.
///
/// All four kinds propagate unmodified to the caller; nothing inside the
/// core catches, retries or downgrades them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum DomainError {
    /// Bad input format or a blank required field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required lookup found no matching record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation would violate a uniqueness or consistency rule
    /// that a single aggregate cannot see (duplicate email, catalog
    /// metadata mismatch).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation is invalid for the current lifecycle state of the
    /// aggregate (already borrowed, not borrowed, wrong borrower).
    #[error("Invalid state: {0}")]
    State(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }

    pub fn state(message: impl Into<String>) -> Self {
        DomainError::State(message.into())
    }
}

/// Result type alias for convenience
pub type DomainResult<T> = Result<T, DomainError>;
