//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating event IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The UUID portion of the ID is invalid.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The UUID is not a version 4 (random) UUID.
    #[error("expected a version 4 UUID, got version {actual}")]
    WrongVersion { actual: usize },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }
}
