//! The ID generation seam.
//!
//! Generation is the only non-deterministic operation in this crate, so it
//! sits behind a trait. Production code uses [`RandomIds`]; tests inject a
//! fixed source.

use crate::EventId;

/// A source of fresh event IDs.
pub trait IdSource: Send + Sync {
    /// Generates one new, globally unique event ID.
    fn generate(&self) -> EventId;
}

/// The production ID source: cryptographically random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn generate(&self) -> EventId {
        EventId::new()
    }
}
