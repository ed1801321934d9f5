use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// A piece of equipment. The upstream API serves weapons and armor with
/// extra fields on top of the generic shape; the variant is picked by the
/// equipment category at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Gear(Gear),
    Weapon(Weapon),
    Armor(Armor),
}

impl Equipment {
    pub fn key(&self) -> &str {
        match self {
            Equipment::Gear(g) => &g.key,
            Equipment::Weapon(w) => &w.key,
            Equipment::Armor(a) => &a.key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Equipment::Gear(g) => &g.name,
            Equipment::Weapon(w) => &w.name,
            Equipment::Armor(a) => &a.name,
        }
    }

    pub fn category(&self) -> Option<&ReferenceItem> {
        match self {
            Equipment::Gear(g) => g.category.as_ref(),
            Equipment::Weapon(w) => w.category.as_ref(),
            Equipment::Armor(a) => a.category.as_ref(),
        }
    }
}

/// Generic equipment without weapon or armor specifics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub key: String,
    pub name: String,
    pub category: Option<ReferenceItem>,
    pub cost: Option<Cost>,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub key: String,
    pub name: String,
    pub category: Option<ReferenceItem>,
    pub cost: Option<Cost>,
    pub weight: f32,
    /// `"Simple"` or `"Martial"`.
    pub weapon_category: String,
    /// `"Melee"` or `"Ranged"`.
    pub weapon_range: String,
    /// Combined category and range, e.g. `"Simple Melee"`.
    pub category_range: String,
    pub damage: Option<Damage>,
    pub two_handed_damage: Option<Damage>,
    pub range: Option<WeaponRange>,
    pub properties: Vec<ReferenceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub key: String,
    pub name: String,
    pub category: Option<ReferenceItem>,
    pub cost: Option<Cost>,
    pub weight: f32,
    /// `"Light"`, `"Medium"`, `"Heavy"`, or `"Shield"`.
    pub armor_category: String,
    pub armor_class: Option<ArmorClass>,
    pub str_minimum: u32,
    pub stealth_disadvantage: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage {
    pub damage_dice: String,
    pub damage_type: Option<ReferenceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponRange {
    pub normal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    pub base: u32,
    pub dex_bonus: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub quantity: u32,
    /// Currency unit, e.g. `"gp"` or `"sp"`.
    pub unit: String,
}

/// An equipment category with its member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCategory {
    pub key: String,
    pub name: String,
    pub equipment: Vec<ReferenceItem>,
}
