//! Error types for event construction.

use thiserror::Error;

/// Errors that can occur when constructing an event.
///
/// Every variant is fatal to the construction attempt: no partial envelope
/// is ever produced, and callers branch on the variant rather than the
/// message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// One or more required top-level event inputs are missing.
    #[error("missing required event inputs: {}", .fields.join(", "))]
    MissingRequiredInputs { fields: Vec<&'static str> },

    /// One or more required metadata configuration fields are missing.
    #[error("missing required metadata fields: {}", .fields.join(", "))]
    MissingMetadataFields { fields: Vec<&'static str> },

    /// One or more required request context fields are missing.
    #[error("missing required request context fields: {}", .fields.join(", "))]
    MissingRequestContextFields { fields: Vec<&'static str> },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}
