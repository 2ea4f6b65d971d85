//! Metadata model: static configuration and the derived per-event block.

use chrono::{DateTime, Utc};
use emitkit_id::EventId;
use serde::{Deserialize, Serialize};

/// The kind of event being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// An event occurring within the domain.
    DomainEvent,
    /// An event crossing domain boundaries.
    IntegrationEvent,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::DomainEvent => write!(f, "DomainEvent"),
            EventType::IntegrationEvent => write!(f, "IntegrationEvent"),
        }
    }
}

/// The legal region the emitting service operates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    /// European Union.
    Eu,
    /// USA, or North America generally.
    Us,
    /// China.
    Cn,
    /// Asia generally, minus China.
    Apj,
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Jurisdiction::Eu => "eu",
            Jurisdiction::Us => "us",
            Jurisdiction::Cn => "cn",
            Jurisdiction::Apj => "apj",
        };
        write!(f, "{}", s)
    }
}

/// Data sensitivity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSensitivity {
    Public,
    Sensitive,
    Proprietary,
    Secret,
}

impl std::fmt::Display for DataSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataSensitivity::Public => "public",
            DataSensitivity::Sensitive => "sensitive",
            DataSensitivity::Proprietary => "proprietary",
            DataSensitivity::Secret => "secret",
        };
        write!(f, "{}", s)
    }
}

/// Static, caller-supplied metadata configuration.
///
/// One configuration is typically created per service and reused across all
/// events that service emits. `version`, `domain`, `system`, `service`, and
/// `team` are presence-checked at construction time; the remaining fields
/// are structurally required by the type but not validated further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataConfig {
    /// Integer version of the event. Zero counts as missing.
    pub version: u32,
    /// The kind of event this configuration produces.
    pub event_type: EventType,
    /// Which domain the event is part of.
    pub domain: String,
    /// Which system the event is part of.
    pub system: String,
    /// Which service the event is part of.
    pub service: String,
    /// The team responsible for the emitting service.
    pub team: String,
    /// Platform hosting the emitting solution, e.g. `aws`, `azure`, `gcp`.
    pub host_platform: String,
    /// Owner of the host platform.
    pub owner: String,
    /// Legal region for the emitting service.
    pub jurisdiction: Jurisdiction,
    /// Additional optional tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Data sensitivity classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sensitivity: Option<DataSensitivity>,
    /// Does this event represent an error? Defaults to unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

/// The complete, derived metadata block for one emitted event.
///
/// Union of the static configuration, the environment facts, and the
/// dynamically computed fields. Field order follows the wire contract:
/// configuration first, dynamic values after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: u32,
    pub event_type: EventType,
    pub domain: String,
    pub system: String,
    pub service: String,
    pub team: String,
    pub host_platform: String,
    pub owner: String,
    pub jurisdiction: Jurisdiction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sensitivity: Option<DataSensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,

    /// Name of the event.
    pub event_name: String,
    /// Globally unique identifier, generated once per construction.
    pub id: EventId,
    /// Identifier of the correlated call chain, copied unchanged from the
    /// originating request.
    pub correlation_id: String,
    /// Construction instant in Unix epoch milliseconds.
    pub timestamp: String,
    /// The same instant in ISO 8601 form.
    pub timestamp_human: DateTime<Utc>,
    /// Epoch milliseconds of the first origin request in the call chain.
    pub request_time_epoch: i64,
    /// Deployment lifecycle stage the event pertains to.
    pub lifecycle_stage: String,
    /// HTTP route, resource name, or similar emission point.
    pub resource: String,
    /// Account identifier the originating call ran under.
    pub account_id: String,
    /// Cloud region the event was emitted from.
    pub region: String,
    /// Execution runtime identifier.
    pub runtime: String,
    /// Name of the function that ran.
    pub function_name: String,
    /// RAM allocated to the function.
    pub function_memory_size: String,
    /// Version of the function.
    pub function_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MetadataConfig {
        MetadataConfig {
            version: 1,
            event_type: EventType::DomainEvent,
            domain: "MyDomain".to_string(),
            system: "MySystem".to_string(),
            service: "MyService".to_string(),
            team: "MyTeam".to_string(),
            host_platform: "aws".to_string(),
            owner: "Sam Person".to_string(),
            jurisdiction: Jurisdiction::Eu,
            tags: None,
            data_sensitivity: None,
            error: None,
        }
    }

    #[test]
    fn test_event_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EventType::DomainEvent).unwrap(),
            "\"DomainEvent\""
        );
        assert_eq!(
            serde_json::to_string(&EventType::IntegrationEvent).unwrap(),
            "\"IntegrationEvent\""
        );
    }

    #[test]
    fn test_jurisdiction_serialization() {
        assert_eq!(serde_json::to_string(&Jurisdiction::Eu).unwrap(), "\"eu\"");
        assert_eq!(serde_json::to_string(&Jurisdiction::Apj).unwrap(), "\"apj\"");
    }

    #[test]
    fn test_data_sensitivity_serialization() {
        let levels = [
            (DataSensitivity::Public, "\"public\""),
            (DataSensitivity::Sensitive, "\"sensitive\""),
            (DataSensitivity::Proprietary, "\"proprietary\""),
            (DataSensitivity::Secret, "\"secret\""),
        ];
        for (level, expected) in levels {
            assert_eq!(serde_json::to_string(&level).unwrap(), expected);
        }
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = config();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MetadataConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_uses_camel_case_keys() {
        let json = serde_json::to_string(&config()).unwrap();
        assert!(json.contains("\"eventType\""));
        assert!(json.contains("\"hostPlatform\""));
        assert!(!json.contains("\"host_platform\""));
    }

    #[test]
    fn test_config_optional_fields_omitted_when_unset() {
        let json = serde_json::to_string(&config()).unwrap();
        assert!(!json.contains("\"tags\""));
        assert!(!json.contains("\"dataSensitivity\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_config_optional_fields_present_when_set() {
        let config = MetadataConfig {
            tags: Some(vec!["payments".to_string()]),
            data_sensitivity: Some(DataSensitivity::Proprietary),
            error: Some(false),
            ..config()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"tags\":[\"payments\"]"));
        assert!(json.contains("\"dataSensitivity\":\"proprietary\""));
        assert!(json.contains("\"error\":false"));
    }

    #[test]
    fn test_config_parses_without_optional_fields() {
        let json = r#"{
            "version": 1,
            "eventType": "DomainEvent",
            "domain": "MyDomain",
            "system": "MySystem",
            "service": "MyService",
            "team": "MyTeam",
            "hostPlatform": "aws",
            "owner": "Sam Person",
            "jurisdiction": "eu"
        }"#;
        let parsed: MetadataConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, config());
    }
}
