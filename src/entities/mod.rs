//! Public entity model for the D&D 5e reference API.
//!
//! Every type here is a plain value: built once from a decoded API
//! response, embedded into whatever is consuming it, and never mutated
//! afterwards. Wire-format concerns (upstream field names, dynamic
//! discriminators) live in the `wire` module, not here.

mod background;
mod choice;
mod class;
mod damage_type;
mod equipment;
mod feature;
mod level;
mod monster;
mod proficiency;
mod race;
mod reference;
mod skill;
mod spell;

pub use background::{Background, BackgroundFeature};
pub use choice::{Choice, ChoiceOption, OptionList, OptionSource};
pub use class::{Class, StartingEquipment};
pub use damage_type::DamageType;
pub use equipment::{
    Armor, ArmorClass, Cost, Damage, Equipment, EquipmentCategory, Gear, Weapon, WeaponRange,
};
pub use feature::Feature;
pub use level::{ClassLevel, ClassSpecific, Spellcasting};
pub use monster::{
    ActionDc, ActionOption, Monster, MonsterAction, MonsterProficiency, MonsterSenses,
    MonsterSpeed,
};
pub use proficiency::{Proficiency, ProficiencyKind};
pub use race::{AbilityBonus, Race};
pub use reference::ReferenceItem;
pub(crate) use reference::kind_from_url;
pub use skill::Skill;
pub use spell::{AreaOfEffect, Spell, SpellDamage, SpellDc};
