//! Request-scoped context captured from the originating call.

use serde::{Deserialize, Serialize};

/// A subset of the originating call's request context.
///
/// All five fields are required at event construction time. `request_id`
/// becomes the event's correlation id: upstream callers must propagate it
/// unchanged across the whole call chain rather than regenerate it per hop,
/// so that every event in one logical transaction can be correlated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Account identifier the call ran under.
    pub account_id: String,
    /// HTTP route, resource name, or similar; maps to the metadata
    /// `resource` field.
    pub resource_path: String,
    /// Identifier of the correlated call chain; maps to `correlationId`.
    pub request_id: String,
    /// Epoch milliseconds of the first origin request in the chain.
    pub request_time_epoch: i64,
    /// Deployment stage; maps to `lifecycleStage`.
    pub stage: String,
}
