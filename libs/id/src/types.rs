//! The event ID type.
//!
//! A single ID type covers every emitted event. The canonical form is the
//! hyphenated lowercase UUID string; parsing is strict and rejects anything
//! that is not a version 4 UUID.

use uuid::Uuid;

use crate::IdError;

/// A globally unique identifier for one emitted event.
///
/// Exactly one `EventId` is generated per event construction. Two events
/// built from identical inputs still carry distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new ID with a fresh version 4 UUID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ID from a raw UUID.
    ///
    /// The UUID must already be version 4; use [`EventId::parse`] when the
    /// input is untrusted.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Parses an ID from a string.
    ///
    /// The string must be a valid RFC 4122 version 4 UUID.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let uuid = Uuid::parse_str(s).map_err(|e| IdError::InvalidUuid(e.to_string()))?;

        let version = uuid.get_version_num();
        if version != 4 {
            return Err(IdError::WrongVersion { actual: version });
        }

        Ok(Self(uuid))
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for EventId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<Uuid> for EventId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}
