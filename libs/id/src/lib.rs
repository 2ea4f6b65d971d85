//! # emitkit-id
//!
//! Event ID type, generation, and validation for emitkit.
//!
//! ## Design Principles
//!
//! - Event IDs are system-generated, never caller-supplied
//! - Every ID is an RFC 4122 version 4 (random) UUID
//! - IDs have a canonical string representation with strict parsing
//! - IDs support roundtrip serialization (parse → format → parse)
//! - Generation goes through the [`IdSource`] seam so tests can supply
//!   deterministic sources
//!
//! ## ID Format
//!
//! The canonical form is the hyphenated lowercase UUID string:
//!
//! - `26dd1faf-a901-4413-92db-9e09b7915a3c`
//!
//! This format provides:
//! - Uniqueness (122 bits of randomness)
//! - Interoperability (RFC 4122 is the lingua franca of event buses)
//! - Human readability (recognizable at a glance in logs)

mod error;
mod source;
mod types;

pub use error::IdError;
pub use source::{IdSource, RandomIds};
pub use types::EventId;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
