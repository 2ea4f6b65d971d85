//! Event construction: validation, derivation, and the finished envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use emitkit_id::{IdSource, RandomIds};

use crate::clock::{Clock, SystemClock};
use crate::context::RequestContext;
use crate::environment::EnvironmentFacts;
use crate::error::EventError;
use crate::metadata::{Metadata, MetadataConfig};

/// Caller-supplied input for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// The kind of interaction that occurred; becomes the envelope's
    /// detail type and the last segment of its routing source.
    pub event_name: String,
    /// Name of the destination bus.
    pub bus_target: String,
    /// Payload for the event's `data` field: a JSON object or a string.
    pub data: Value,
    /// Static metadata configuration, reusable across events.
    pub metadata_config: MetadataConfig,
}

/// The body serialized into an envelope's `detail` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    /// Metadata for the event.
    pub metadata: Metadata,
    /// Data for the event.
    pub data: Value,
}

/// A finished, bus-ready event envelope.
///
/// Built exactly once inside [`EmittableEvent`]; never mutated afterward.
/// Transports consume the four fields as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Name of the destination bus.
    pub bus_target: String,
    /// Routing key: `{domain}.{system}.{event name}`, always lowercase.
    pub source: String,
    /// The declared event type; equals the event name.
    pub detail_type: String,
    /// JSON-serialized [`EventDetail`] body.
    pub detail: String,
}

/// Builds one bus-ready event from caller input, environment facts, and the
/// originating request context.
///
/// Construction is the only failure opportunity: validation of all three
/// input sources runs before any derivation, and a failed construction
/// yields no instance at all. [`get`](Self::get) cannot fail.
///
/// # Example
///
/// ```no_run
/// use emitkit_events::{EmittableEvent, EventInput, ProcessEnv, RequestContext};
/// # fn demo(input: EventInput, context: RequestContext) -> Result<(), emitkit_events::EventError> {
/// let event = EmittableEvent::new(input, &ProcessEnv, &context)?;
/// let envelope = event.get();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmittableEvent {
    envelope: EventEnvelope,
}

impl EmittableEvent {
    /// Builds an event using the system clock and random ID generation.
    pub fn new(
        input: EventInput,
        facts: &dyn EnvironmentFacts,
        context: &RequestContext,
    ) -> Result<Self, EventError> {
        Self::with_sources(input, facts, context, &RandomIds, &SystemClock)
    }

    /// Builds an event with explicit ID and clock sources.
    ///
    /// Tests supply deterministic sources here; production callers use
    /// [`EmittableEvent::new`].
    pub fn with_sources(
        input: EventInput,
        facts: &dyn EnvironmentFacts,
        context: &RequestContext,
        ids: &dyn IdSource,
        clock: &dyn Clock,
    ) -> Result<Self, EventError> {
        validate_input(&input)?;
        validate_metadata_config(&input.metadata_config)?;
        validate_request_context(context)?;

        let envelope = produce_envelope(input, facts, context, ids, clock)?;
        Ok(Self { envelope })
    }

    /// Returns the finished envelope.
    pub fn get(&self) -> &EventEnvelope {
        &self.envelope
    }

    /// Consumes the event, returning the envelope for handoff to a transport.
    pub fn into_envelope(self) -> EventEnvelope {
        self.envelope
    }
}

/// JSON values that count as absent under the falsy-means-missing policy.
///
/// Empty strings, zero, false, and null are indistinguishable from omission;
/// objects and arrays always count as present.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn validate_input(input: &EventInput) -> Result<(), EventError> {
    let mut fields = Vec::new();
    if input.event_name.is_empty() {
        fields.push("eventName");
    }
    if input.bus_target.is_empty() {
        fields.push("busTarget");
    }
    if is_falsy(&input.data) {
        fields.push("data");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        error!(missing = ?fields, "missing required fields to create the event");
        Err(EventError::MissingRequiredInputs { fields })
    }
}

fn validate_metadata_config(config: &MetadataConfig) -> Result<(), EventError> {
    let mut fields = Vec::new();
    if config.version == 0 {
        fields.push("version");
    }
    if config.domain.is_empty() {
        fields.push("domain");
    }
    if config.system.is_empty() {
        fields.push("system");
    }
    if config.service.is_empty() {
        fields.push("service");
    }
    if config.team.is_empty() {
        fields.push("team");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        error!(missing = ?fields, "missing required fields to produce metadata");
        Err(EventError::MissingMetadataFields { fields })
    }
}

fn validate_request_context(context: &RequestContext) -> Result<(), EventError> {
    let mut fields = Vec::new();
    if context.account_id.is_empty() {
        fields.push("accountId");
    }
    if context.resource_path.is_empty() {
        fields.push("resourcePath");
    }
    if context.request_id.is_empty() {
        fields.push("requestId");
    }
    if context.request_time_epoch == 0 {
        fields.push("requestTimeEpoch");
    }
    if context.stage.is_empty() {
        fields.push("stage");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        error!(missing = ?fields, "missing required request context fields to produce metadata");
        Err(EventError::MissingRequestContextFields { fields })
    }
}

fn produce_envelope(
    input: EventInput,
    facts: &dyn EnvironmentFacts,
    context: &RequestContext,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<EventEnvelope, EventError> {
    let EventInput {
        event_name,
        bus_target,
        data,
        metadata_config,
    } = input;

    // The routing source derives from the raw configuration values, not any
    // already-lowercased alias.
    let source = format!(
        "{}.{}.{}",
        metadata_config.domain.to_lowercase(),
        metadata_config.system.to_lowercase(),
        event_name.to_lowercase()
    );

    let metadata = produce_metadata(event_name.clone(), metadata_config, facts, context, ids, clock);

    let detail = serde_json::to_string(&EventDetail { metadata, data })?;

    Ok(EventEnvelope {
        bus_target,
        source,
        detail_type: event_name,
        detail,
    })
}

/// Assembles the metadata union: configuration fields first, dynamic fields
/// after. Dynamic fields win on any key collision; the key sets are disjoint
/// so in practice there is none.
fn produce_metadata(
    event_name: String,
    config: MetadataConfig,
    facts: &dyn EnvironmentFacts,
    context: &RequestContext,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Metadata {
    // One clock read and one ID generation per construction. Both timestamp
    // forms derive from the same instant.
    let now = clock.now();

    Metadata {
        version: config.version,
        event_type: config.event_type,
        domain: config.domain,
        system: config.system,
        service: config.service,
        team: config.team,
        host_platform: config.host_platform,
        owner: config.owner,
        jurisdiction: config.jurisdiction,
        tags: config.tags,
        data_sensitivity: config.data_sensitivity,
        error: config.error,
        event_name,
        id: ids.generate(),
        correlation_id: context.request_id.clone(),
        timestamp: now.timestamp_millis().to_string(),
        timestamp_human: now,
        request_time_epoch: context.request_time_epoch,
        lifecycle_stage: context.stage.clone(),
        resource: context.resource_path.clone(),
        account_id: context.account_id.clone(),
        region: facts.region(),
        runtime: facts.runtime(),
        function_name: facts.function_name(),
        function_memory_size: facts.function_memory_size(),
        function_version: facts.function_version(),
    }
}
