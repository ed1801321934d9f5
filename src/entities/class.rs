use serde::{Deserialize, Serialize};

use super::{Choice, ReferenceItem};

/// A character class. Starting-equipment options are fully resolved by
/// the time a `Class` is handed out: every equipment-category placeholder
/// has been expanded into an explicit option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub key: String,
    pub name: String,
    pub hit_die: u32,
    pub description: String,
    /// Everything the class is proficient with, unsplit.
    pub proficiencies: Vec<ReferenceItem>,
    /// Proficiencies bucketed by kind, derived from `proficiencies`.
    pub armor_proficiencies: Vec<ReferenceItem>,
    pub weapon_proficiencies: Vec<ReferenceItem>,
    pub tool_proficiencies: Vec<ReferenceItem>,
    pub saving_throws: Vec<ReferenceItem>,
    /// Ability scores gating multiclassing into this class.
    pub primary_abilities: Vec<ReferenceItem>,
    pub starting_equipment: Vec<StartingEquipment>,
    pub proficiency_choices: Vec<Choice>,
    pub starting_equipment_options: Vec<Choice>,
}

/// A fixed starting-equipment grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingEquipment {
    pub equipment: ReferenceItem,
    pub quantity: u32,
}
