//! Analytics event record.
//!
//! An event is a name, a timestamp relative to session start, and a flat bag
//! of JSON fields. Serialized, the fields sit beside `name` and `timestamp`
//! in one object, which is the shape the beacon endpoint receives.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Event names emitted by the page.
pub mod names {
    pub const PAGE_VIEW: &str = "page_view";
    pub const EXPERIENCE_EXPANDED: &str = "experience_expanded";
    pub const SCROLL_DEPTH: &str = "scroll_depth";
    pub const SECTION_VIEWED: &str = "section_viewed";
    pub const TIME_MILESTONE: &str = "time_milestone";
    pub const SESSION_END: &str = "session_end";
}

/// Keys owned by the event envelope; payload fields may not shadow them.
const RESERVED_KEYS: [&str; 2] = ["name", "timestamp"];

/// A single analytics event. Immutable once appended to an [`crate::EventLog`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    /// Event tag, e.g. `"scroll_depth"`.
    pub name: String,
    /// Milliseconds since session start.
    pub timestamp: u64,
    /// Event-specific payload, flattened into the envelope when serialized.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    /// Build an event with no payload fields.
    #[must_use]
    pub fn new(name: impl Into<String>, timestamp: u64) -> Self {
        Self { name: name.into(), timestamp, fields: Map::new() }
    }

    /// Attach a payload field. Reserved envelope keys are ignored.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if !RESERVED_KEYS.contains(&key) {
            self.fields.insert(key.to_owned(), value.into());
        }
        self
    }

    /// Attach every entry of `fields`, skipping reserved keys.
    #[must_use]
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        for (key, value) in fields {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                self.fields.insert(key, value);
            }
        }
        self
    }

    /// Look up a payload field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize to the JSON object delivered to the beacon endpoint.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a payload value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
