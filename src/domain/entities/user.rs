//! User profile returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend user record.
///
/// Kept as raw JSON; the client only peeks at a few well-known fields for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    /// Wraps a JSON value. `null` is not a profile.
    #[must_use]
    pub fn new(value: Value) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the raw JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes profile and returns the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Serializes to the compact JSON form used for persistence.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    /// Parses a persisted profile. Returns `None` for `null`.
    ///
    /// # Errors
    /// Returns error if the input is not valid JSON.
    pub fn from_json(raw: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str::<Value>(raw).map(Self::new)
    }

    /// Best-effort name for display.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
    }
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.display_name(), self.0.get("id")) {
            (Some(name), Some(id)) => write!(f, "{name} ({id})"),
            (Some(name), None) => write!(f, "{name}"),
            _ => write!(f, "{}", self.0),
        }
    }
}
