use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// One level of a class progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassLevel {
    pub key: String,
    pub level: u32,
    pub ability_score_bonuses: u32,
    pub proficiency_bonus: i32,
    pub class: Option<ReferenceItem>,
    pub features: Vec<ReferenceItem>,
    pub spellcasting: Option<Spellcasting>,
    pub class_specific: Option<ClassSpecific>,
}

/// Spell slot and known-spell counts at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellcasting {
    pub cantrips_known: u32,
    pub spells_known: u32,
    /// Slots for spell levels 1 through 9.
    pub spell_slots: [u32; 9],
}

/// Per-class level data for the classes that carry any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassSpecific {
    Barbarian {
        rage_count: u32,
        rage_damage_bonus: u32,
        brutal_critical_dice: u32,
    },
    Bard {
        bardic_inspiration_die: u32,
        song_of_rest_die: u32,
        magical_secrets_max_5: u32,
        magical_secrets_max_7: u32,
        magical_secrets_max_9: u32,
    },
    Cleric {
        channel_divinity_charges: u32,
        destroy_undead_cr: f32,
    },
    Ranger {
        favored_enemies: u32,
        favored_terrain: u32,
    },
}
