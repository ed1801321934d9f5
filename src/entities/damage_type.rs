use serde::{Deserialize, Serialize};

/// A damage type such as bludgeoning or radiant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageType {
    pub key: String,
    pub name: String,
    /// Entity kind derived from the damage type's API URL.
    pub kind: String,
    pub description: Vec<String>,
}
