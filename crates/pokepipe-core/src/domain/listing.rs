//! Transient extraction types produced by the source port.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Resource name (e.g. "bulbasaur").
    pub name: String,
    /// Detail locator as returned by the listing (absolute URL).
    pub locator: String,
}

impl ListingItem {
    /// Create a listing item.
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }

    /// The target handed to the detail fetch for this item.
    ///
    /// Detail fetches are addressed by name; the fetcher resolves it against
    /// its configured base URL.
    pub fn detail_target(&self) -> &str {
        &self.name
    }
}

/// Opaque detail payload as received from the remote API.
///
/// Only the transformer looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDetailPayload(Value);

impl RawDetailPayload {
    /// Wrap a decoded JSON document.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON document.
    pub const fn as_json(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON document.
    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for RawDetailPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
