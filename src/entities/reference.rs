use serde::{Deserialize, Serialize};

/// The atomic `(key, name, kind)` identifier used throughout the entity
/// model. Lists of entities, cross-references inside entities, and
/// materialized choice options all carry these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    /// Stable lookup key, e.g. `"simple-weapons"`.
    pub key: String,
    /// Display name, e.g. `"Simple Weapons"`.
    pub name: String,
    /// Entity kind derived from the item's API URL path segment
    /// (`/api/equipment/club` → `"equipment"`). Empty when the source
    /// carried no URL.
    #[serde(default)]
    pub kind: String,
}

impl ReferenceItem {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// Extract the entity kind from an API URL like `/api/equipment/club`.
///
/// Returns an empty string for absent or too-short URLs rather than
/// erroring; a reference without a kind is still usable by key.
pub(crate) fn kind_from_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 3 {
        return String::new();
    }

    parts[2].to_string()
}
