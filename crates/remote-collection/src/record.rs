//! Record Identity
//!
//! Core trait for synced entities and their server-assigned identifier.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Core trait for all entities held in a [`crate::CollectionCache`]
pub trait Record: Clone {
    /// Returns the entity's server-assigned identifier
    fn id(&self) -> &RecordId;
}

/// Opaque identifier token assigned by the remote system.
///
/// Compared and hashed by token only. The JSON shape it arrived in (number or
/// string) is remembered so it is sent back the same way.
#[derive(Debug, Clone, Default)]
pub struct RecordId {
    token: String,
    numeric: bool,
}

impl RecordId {
    /// Identifier that serializes as a JSON string
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            numeric: false,
        }
    }

    /// Identifier that serializes as a JSON number
    pub fn numeric(value: i64) -> Self {
        Self {
            token: value.to_string(),
            numeric: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl From<&str> for RecordId {
    fn from(token: &str) -> Self {
        RecordId::new(token)
    }
}

impl From<String> for RecordId {
    fn from(token: String) -> Self {
        RecordId::new(token)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(value) = self.token.parse::<i64>() {
                return serializer.serialize_i64(value);
            }
            if let Ok(value) = self.token.parse::<u64>() {
                return serializer.serialize_u64(value);
            }
        }
        serializer.serialize_str(&self.token)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireId::deserialize(deserializer)? {
            WireId::Signed(value) => RecordId::numeric(value),
            WireId::Unsigned(value) => RecordId {
                token: value.to_string(),
                numeric: true,
            },
            WireId::Text(token) => RecordId::new(token),
        })
    }
}
