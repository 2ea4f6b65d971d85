//! # emitkit-events
//!
//! Event envelope construction and validation for emitkit.
//!
//! ## Design Principles
//!
//! - An envelope is built exactly once and never mutated afterward
//! - Validation happens before any derivation; construction is all-or-nothing
//! - Derived values (id, timestamps, routing source) are generated at
//!   construction time, never lazily
//! - Non-deterministic inputs (clock, id generation, host environment) are
//!   injected collaborators, never ambient state
//!
//! ## Envelope
//!
//! A finished [`EventEnvelope`] carries:
//! - Routing (`bus_target`, `source`, `detail_type`)
//! - A serialized `detail` body whose top-level shape is exactly
//!   `{metadata, data}`
//!
//! ## Metadata
//!
//! The metadata block merges three sources:
//! - Static [`MetadataConfig`] (organizational ownership, classification)
//! - Environment facts (runtime, function identity, region)
//! - Per-request [`RequestContext`] (correlation, timing, lifecycle stage)

mod clock;
mod context;
mod envelope;
mod environment;
mod error;
mod metadata;

pub use clock::{Clock, SystemClock};
pub use context::RequestContext;
pub use envelope::{EmittableEvent, EventDetail, EventEnvelope, EventInput};
pub use environment::{EnvironmentFacts, ProcessEnv, StaticFacts};
pub use error::EventError;
pub use metadata::{DataSensitivity, EventType, Jurisdiction, Metadata, MetadataConfig};

/// Re-export the ID types for consumers that need them directly.
pub use emitkit_id::{EventId, IdSource, RandomIds};
