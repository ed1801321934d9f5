use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// A skill tied to an ability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub key: String,
    pub name: String,
    pub description: Vec<String>,
    pub ability_score: Option<ReferenceItem>,
    /// Entity kind derived from the skill's API URL.
    pub kind: String,
}
