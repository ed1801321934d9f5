use serde::{Deserialize, Serialize};

use super::{Damage, ReferenceItem};

/// A monster stat block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub key: String,
    pub name: String,
    pub size: String,
    pub kind: String,
    pub alignment: String,
    /// Sum of the upstream armor-class entries (base + armor + shield).
    pub armor_class: i32,
    pub hit_points: u32,
    pub hit_dice: String,
    pub speed: Option<MonsterSpeed>,
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub proficiencies: Vec<MonsterProficiency>,
    pub damage_vulnerabilities: Vec<String>,
    pub damage_resistances: Vec<String>,
    pub damage_immunities: Vec<String>,
    pub condition_immunities: Vec<ReferenceItem>,
    pub senses: Option<MonsterSenses>,
    pub languages: String,
    pub challenge_rating: f32,
    pub xp: u32,
    pub actions: Vec<MonsterAction>,
    pub image_url: String,
}

/// Movement modes, as the API reports them (`"30 ft."`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonsterSpeed {
    pub walk: String,
    pub burrow: String,
    pub fly: String,
    pub swim: String,
    pub climb: String,
}

/// A skill or saving-throw proficiency with its bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterProficiency {
    pub value: i32,
    pub proficiency: ReferenceItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonsterSenses {
    pub blindsight: String,
    pub darkvision: String,
    pub tremorsense: String,
    pub truesight: String,
    pub passive_perception: i32,
}

/// One entry in a monster's action list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterAction {
    pub name: String,
    pub multiattack_type: String,
    pub attack_bonus: i32,
    pub description: String,
    /// Sub-actions of a multiattack.
    pub actions: Vec<ActionOption>,
    pub damage: Vec<Damage>,
}

/// A sub-action referenced by a multiattack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOption {
    pub action_name: String,
    pub count: u32,
    pub kind: String,
    pub attack_bonus: i32,
    pub dc: Option<ActionDc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDc {
    pub dc_type: Option<ReferenceItem>,
    pub dc_value: i32,
    /// What a successful save does, e.g. `"half"`.
    pub success_type: String,
}
