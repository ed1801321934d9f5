use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// A proficiency and the entity it grants proficiency with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiency {
    pub key: String,
    pub name: String,
    pub kind: ProficiencyKind,
    pub reference: Option<ReferenceItem>,
}

/// Broad proficiency families, mapped from the upstream `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyKind {
    Armor,
    Weapon,
    Tool,
    SavingThrow,
    Skill,
    Instrument,
    Vehicle,
    /// Anything the upstream adds that this crate does not classify.
    Other,
}

impl ProficiencyKind {
    /// Map the upstream type string to a kind, falling back to `Other`
    /// for values added after this crate was written.
    pub(crate) fn from_api(value: &str) -> Self {
        match value {
            "ARMOR" => ProficiencyKind::Armor,
            "WEAPONS" => ProficiencyKind::Weapon,
            "TOOLS" | "ARTISANS_TOOLS" | "GAMING_SETS" | "OTHER_TOOLS" => ProficiencyKind::Tool,
            "SAVING_THROWS" => ProficiencyKind::SavingThrow,
            "SKILLS" => ProficiencyKind::Skill,
            "MUSICAL_INSTRUMENTS" => ProficiencyKind::Instrument,
            "VEHICLES" => ProficiencyKind::Vehicle,
            _ => ProficiencyKind::Other,
        }
    }
}
