use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// A spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub key: String,
    pub name: String,
    pub level: u32,
    pub range: String,
    pub ritual: bool,
    pub duration: String,
    pub concentration: bool,
    pub casting_time: String,
    pub damage: Option<SpellDamage>,
    pub dc: Option<SpellDc>,
    pub area_of_effect: Option<AreaOfEffect>,
    pub school: Option<ReferenceItem>,
    pub classes: Vec<ReferenceItem>,
}

/// Damage dealt by a spell, keyed by the slot level it is cast at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDamage {
    pub damage_type: Option<ReferenceItem>,
    /// Dice expression per slot level, e.g. `3 → "8d6"`. Empty for spells
    /// whose damage does not scale with slot level.
    #[serde(default)]
    pub damage_at_slot_level: BTreeMap<u8, String>,
}

/// The saving throw a spell forces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDc {
    pub dc_type: Option<ReferenceItem>,
    /// What a successful save does, e.g. `"half"` or `"none"`.
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOfEffect {
    /// Shape, e.g. `"sphere"` or `"cone"`.
    pub kind: String,
    /// Size in feet.
    pub size: u32,
}
