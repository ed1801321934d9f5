//! Wire-format structs for the upstream JSON envelopes.
//!
//! Every struct here mirrors exactly what the API sends; the public
//! entity model is built from these through explicit conversions.
//! Fields default aggressively because the upstream omits anything it
//! considers empty.

mod choice;

pub(crate) use choice::{choice_from_wire, choices_from_wire, ApiChoice};

use serde::Deserialize;

use crate::entities::{
    kind_from_url, AbilityBonus, ActionDc, ActionOption, AreaOfEffect, Armor,
    ArmorClass, Background, BackgroundFeature, ClassLevel, ClassSpecific, Cost, Damage,
    DamageType, EquipmentCategory, Feature, Gear, Monster, MonsterAction, MonsterProficiency,
    MonsterSenses, MonsterSpeed, Proficiency, ProficiencyKind, Race, ReferenceItem, Skill, Spell,
    SpellDamage, SpellDc, Spellcasting, StartingEquipment, Weapon, WeaponRange,
};

// ============================================================================
// Common envelope
// ============================================================================

/// The `{count, results}` envelope every list endpoint uses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiListResponse {
    #[serde(default)]
    pub results: Vec<ApiReference>,
}

/// An `{index, name, url}` triple, the upstream's universal reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiReference {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl ApiReference {
    pub fn into_item(self) -> ReferenceItem {
        let kind = kind_from_url(&self.url);
        ReferenceItem {
            key: self.index,
            name: self.name,
            kind,
        }
    }
}

pub(crate) fn items(refs: Vec<ApiReference>) -> Vec<ReferenceItem> {
    refs.into_iter().map(ApiReference::into_item).collect()
}

fn optional_item(reference: Option<ApiReference>) -> Option<ReferenceItem> {
    reference.map(ApiReference::into_item)
}

// ============================================================================
// Races
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiRace {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub size_description: String,
    #[serde(default)]
    pub ability_bonuses: Vec<ApiAbilityBonus>,
    #[serde(default)]
    pub languages: Vec<ApiReference>,
    #[serde(default)]
    pub traits: Vec<ApiReference>,
    #[serde(default)]
    pub subraces: Vec<ApiReference>,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub starting_proficiency_options: Option<ApiChoice>,
    #[serde(default)]
    pub language_options: Option<ApiChoice>,
}

impl ApiRace {
    pub fn into_race(self) -> Race {
        Race {
            key: self.index,
            name: self.name,
            speed: self.speed,
            size: self.size,
            size_description: self.size_description,
            ability_bonuses: self
                .ability_bonuses
                .into_iter()
                .filter_map(ApiAbilityBonus::into_bonus)
                .collect(),
            languages: items(self.languages),
            traits: items(self.traits),
            subraces: items(self.subraces),
            starting_proficiencies: items(self.starting_proficiencies),
            starting_proficiency_options: choice_from_wire(self.starting_proficiency_options),
            language_options: choice_from_wire(self.language_options),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiAbilityBonus {
    #[serde(default)]
    pub ability_score: Option<ApiReference>,
    #[serde(default)]
    pub bonus: i32,
}

impl ApiAbilityBonus {
    fn into_bonus(self) -> Option<AbilityBonus> {
        Some(AbilityBonus {
            ability_score: self.ability_score?.into_item(),
            bonus: self.bonus,
        })
    }
}

// ============================================================================
// Classes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiClass {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hit_die: u32,
    #[serde(default)]
    pub proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub proficiency_choices: Vec<ApiChoice>,
    #[serde(default)]
    pub saving_throws: Vec<ApiReference>,
    #[serde(default)]
    pub starting_equipment: Vec<ApiStartingEquipment>,
    #[serde(default)]
    pub starting_equipment_options: Vec<ApiChoice>,
    #[serde(default)]
    pub multi_classing: Option<ApiMulticlassing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMulticlassing {
    #[serde(default)]
    pub prerequisites: Vec<ApiMulticlassingPrerequisite>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMulticlassingPrerequisite {
    #[serde(default)]
    pub ability_score: Option<ApiReference>,
}

/// Abilities gating multiclassing, read as the class's primary abilities.
pub(crate) fn primary_abilities(multiclassing: Option<ApiMulticlassing>) -> Vec<ReferenceItem> {
    let Some(multiclassing) = multiclassing else {
        return Vec::new();
    };

    multiclassing
        .prerequisites
        .into_iter()
        .filter_map(|p| p.ability_score)
        .map(ApiReference::into_item)
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiStartingEquipment {
    #[serde(default)]
    pub equipment: Option<ApiReference>,
    #[serde(default)]
    pub quantity: u32,
}

pub(crate) fn starting_equipment(raw: Vec<ApiStartingEquipment>) -> Vec<StartingEquipment> {
    raw.into_iter()
        .filter_map(|s| {
            Some(StartingEquipment {
                equipment: s.equipment?.into_item(),
                quantity: s.quantity,
            })
        })
        .collect()
}

// ============================================================================
// Class levels
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiClassLevel {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub ability_score_bonuses: u32,
    #[serde(default)]
    pub prof_bonus: i32,
    #[serde(default)]
    pub features: Vec<ApiReference>,
    #[serde(default)]
    pub spellcasting: Option<ApiSpellcasting>,
    #[serde(default)]
    pub class_specific: Option<ApiClassSpecific>,
    #[serde(default)]
    pub class: Option<ApiReference>,
}

impl ApiClassLevel {
    pub fn into_level(self) -> ClassLevel {
        let class_key = self
            .class
            .as_ref()
            .map(|c| c.index.clone())
            .unwrap_or_default();

        ClassLevel {
            key: self.index,
            level: self.level,
            ability_score_bonuses: self.ability_score_bonuses,
            proficiency_bonus: self.prof_bonus,
            features: items(self.features),
            spellcasting: self.spellcasting.map(ApiSpellcasting::into_spellcasting),
            class_specific: class_specific(&class_key, self.class_specific),
            class: optional_item(self.class),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSpellcasting {
    #[serde(default)]
    pub cantrips_known: u32,
    #[serde(default)]
    pub spells_known: u32,
    #[serde(default)]
    pub spell_slots_level_1: u32,
    #[serde(default)]
    pub spell_slots_level_2: u32,
    #[serde(default)]
    pub spell_slots_level_3: u32,
    #[serde(default)]
    pub spell_slots_level_4: u32,
    #[serde(default)]
    pub spell_slots_level_5: u32,
    #[serde(default)]
    pub spell_slots_level_6: u32,
    #[serde(default)]
    pub spell_slots_level_7: u32,
    #[serde(default)]
    pub spell_slots_level_8: u32,
    #[serde(default)]
    pub spell_slots_level_9: u32,
}

impl ApiSpellcasting {
    fn into_spellcasting(self) -> Spellcasting {
        Spellcasting {
            cantrips_known: self.cantrips_known,
            spells_known: self.spells_known,
            spell_slots: [
                self.spell_slots_level_1,
                self.spell_slots_level_2,
                self.spell_slots_level_3,
                self.spell_slots_level_4,
                self.spell_slots_level_5,
                self.spell_slots_level_6,
                self.spell_slots_level_7,
                self.spell_slots_level_8,
                self.spell_slots_level_9,
            ],
        }
    }
}

/// The upstream sends one flat object whose populated fields depend on
/// the class; the class key picks the variant.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiClassSpecific {
    #[serde(default)]
    pub rage_count: u32,
    #[serde(default)]
    pub rage_damage_bonus: u32,
    #[serde(default)]
    pub brutal_critical_dice: u32,
    #[serde(default)]
    pub bardic_inspiration_die: u32,
    #[serde(default)]
    pub song_of_rest_die: u32,
    #[serde(default)]
    pub magical_secrets_max_5: u32,
    #[serde(default)]
    pub magical_secrets_max_7: u32,
    #[serde(default)]
    pub magical_secrets_max_9: u32,
    #[serde(default)]
    pub channel_divinity_charges: u32,
    #[serde(default)]
    pub destroy_undead_cr: f32,
    #[serde(default)]
    pub favored_enemies: u32,
    #[serde(default)]
    pub favored_terrain: u32,
}

fn class_specific(class_key: &str, raw: Option<ApiClassSpecific>) -> Option<ClassSpecific> {
    let raw = raw?;
    match class_key {
        "barbarian" => Some(ClassSpecific::Barbarian {
            rage_count: raw.rage_count,
            rage_damage_bonus: raw.rage_damage_bonus,
            brutal_critical_dice: raw.brutal_critical_dice,
        }),
        "bard" => Some(ClassSpecific::Bard {
            bardic_inspiration_die: raw.bardic_inspiration_die,
            song_of_rest_die: raw.song_of_rest_die,
            magical_secrets_max_5: raw.magical_secrets_max_5,
            magical_secrets_max_7: raw.magical_secrets_max_7,
            magical_secrets_max_9: raw.magical_secrets_max_9,
        }),
        "cleric" => Some(ClassSpecific::Cleric {
            channel_divinity_charges: raw.channel_divinity_charges,
            destroy_undead_cr: raw.destroy_undead_cr,
        }),
        "ranger" => Some(ClassSpecific::Ranger {
            favored_enemies: raw.favored_enemies,
            favored_terrain: raw.favored_terrain,
        }),
        _ => None,
    }
}

// ============================================================================
// Spells
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSpell {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub casting_time: String,
    #[serde(default)]
    pub damage: Option<ApiSpellDamage>,
    #[serde(default)]
    pub dc: Option<ApiSpellDc>,
    #[serde(default)]
    pub area_of_effect: Option<ApiAreaOfEffect>,
    #[serde(default)]
    pub school: Option<ApiReference>,
    #[serde(default)]
    pub classes: Vec<ApiReference>,
}

impl ApiSpell {
    pub fn into_spell(self) -> Spell {
        Spell {
            key: self.index,
            name: self.name,
            level: self.level,
            range: self.range,
            ritual: self.ritual,
            duration: self.duration,
            concentration: self.concentration,
            casting_time: self.casting_time,
            damage: self.damage.map(|d| SpellDamage {
                damage_type: optional_item(d.damage_type),
                damage_at_slot_level: d.damage_at_slot_level,
            }),
            dc: self.dc.map(|dc| SpellDc {
                dc_type: optional_item(dc.dc_type),
                success: dc.dc_success,
            }),
            area_of_effect: self.area_of_effect.map(|aoe| AreaOfEffect {
                kind: aoe.kind,
                size: aoe.size,
            }),
            school: optional_item(self.school),
            classes: items(self.classes),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSpellDamage {
    #[serde(default)]
    pub damage_type: Option<ApiReference>,
    #[serde(default)]
    pub damage_at_slot_level: std::collections::BTreeMap<u8, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSpellDc {
    #[serde(default)]
    pub dc_type: Option<ApiReference>,
    #[serde(default)]
    pub dc_success: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiAreaOfEffect {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: u32,
}

// ============================================================================
// Monsters
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMonster {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub armor_class: Vec<ApiArmorClassEntry>,
    #[serde(default)]
    pub hit_points: u32,
    #[serde(default)]
    pub hit_dice: String,
    #[serde(default)]
    pub speed: Option<ApiMonsterSpeed>,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub dexterity: u32,
    #[serde(default)]
    pub constitution: u32,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub wisdom: u32,
    #[serde(default)]
    pub charisma: u32,
    #[serde(default)]
    pub proficiencies: Vec<ApiMonsterProficiency>,
    #[serde(default)]
    pub damage_vulnerabilities: Vec<String>,
    #[serde(default)]
    pub damage_resistances: Vec<String>,
    #[serde(default)]
    pub damage_immunities: Vec<String>,
    #[serde(default)]
    pub condition_immunities: Vec<ApiReference>,
    #[serde(default)]
    pub senses: Option<ApiMonsterSenses>,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub challenge_rating: f32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub actions: Vec<ApiMonsterAction>,
    #[serde(default)]
    pub image: String,
}

impl ApiMonster {
    pub fn into_monster(self) -> Monster {
        Monster {
            key: self.index,
            name: self.name,
            size: self.size,
            kind: self.kind,
            alignment: self.alignment,
            armor_class: self.armor_class.iter().map(|ac| ac.value).sum(),
            hit_points: self.hit_points,
            hit_dice: self.hit_dice,
            speed: self.speed.map(|s| MonsterSpeed {
                walk: s.walk,
                burrow: s.burrow,
                fly: s.fly,
                swim: s.swim,
                climb: s.climb,
            }),
            strength: self.strength,
            dexterity: self.dexterity,
            constitution: self.constitution,
            intelligence: self.intelligence,
            wisdom: self.wisdom,
            charisma: self.charisma,
            proficiencies: self
                .proficiencies
                .into_iter()
                .filter_map(|p| {
                    Some(MonsterProficiency {
                        value: p.value,
                        proficiency: p.proficiency?.into_item(),
                    })
                })
                .collect(),
            damage_vulnerabilities: self.damage_vulnerabilities,
            damage_resistances: self.damage_resistances,
            damage_immunities: self.damage_immunities,
            condition_immunities: items(self.condition_immunities),
            senses: self.senses.map(|s| MonsterSenses {
                blindsight: s.blindsight,
                darkvision: s.darkvision,
                tremorsense: s.tremorsense,
                truesight: s.truesight,
                passive_perception: s.passive_perception,
            }),
            languages: self.languages,
            challenge_rating: self.challenge_rating,
            xp: self.xp,
            actions: self
                .actions
                .into_iter()
                .map(ApiMonsterAction::into_action)
                .collect(),
            image_url: self.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArmorClassEntry {
    #[serde(default)]
    pub value: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMonsterSpeed {
    #[serde(default)]
    pub walk: String,
    #[serde(default)]
    pub burrow: String,
    #[serde(default)]
    pub fly: String,
    #[serde(default)]
    pub swim: String,
    #[serde(default)]
    pub climb: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMonsterProficiency {
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub proficiency: Option<ApiReference>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMonsterSenses {
    #[serde(default)]
    pub blindsight: String,
    #[serde(default)]
    pub darkvision: String,
    #[serde(default)]
    pub tremorsense: String,
    #[serde(default)]
    pub truesight: String,
    #[serde(default)]
    pub passive_perception: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMonsterAction {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub multiattack_type: String,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub actions: Vec<ApiActionOption>,
    #[serde(default)]
    pub damage: Vec<ApiDamage>,
}

impl ApiMonsterAction {
    fn into_action(self) -> MonsterAction {
        MonsterAction {
            name: self.name,
            multiattack_type: self.multiattack_type,
            attack_bonus: self.attack_bonus,
            description: self.desc,
            actions: self
                .actions
                .into_iter()
                .map(|a| ActionOption {
                    action_name: a.action_name,
                    count: a.count,
                    kind: a.kind,
                    attack_bonus: a.attack_bonus,
                    dc: a.dc.map(|dc| ActionDc {
                        dc_type: optional_item(dc.dc_type),
                        dc_value: dc.dc_value,
                        success_type: dc.success_type,
                    }),
                })
                .collect(),
            damage: self.damage.into_iter().map(ApiDamage::into_damage).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiActionOption {
    #[serde(default)]
    pub action_name: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub dc: Option<ApiActionDc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiActionDc {
    #[serde(default)]
    pub dc_type: Option<ApiReference>,
    #[serde(default)]
    pub dc_value: i32,
    #[serde(default)]
    pub success_type: String,
}

// ============================================================================
// Equipment
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEquipment {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: Option<ApiCost>,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub equipment_category: Option<ApiReference>,
}

impl ApiEquipment {
    /// Key of the equipment category, used to pick the decode variant.
    pub fn category_key(&self) -> &str {
        self.equipment_category
            .as_ref()
            .map(|c| c.index.as_str())
            .unwrap_or("")
    }

    pub fn into_gear(self) -> Gear {
        Gear {
            key: self.index,
            name: self.name,
            category: optional_item(self.equipment_category),
            cost: self.cost.map(ApiCost::into_cost),
            weight: self.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiWeapon {
    #[serde(flatten)]
    pub base: ApiEquipment,
    #[serde(default)]
    pub weapon_category: String,
    #[serde(default)]
    pub weapon_range: String,
    #[serde(default)]
    pub category_range: String,
    #[serde(default)]
    pub damage: Option<ApiDamage>,
    #[serde(default)]
    pub two_handed_damage: Option<ApiDamage>,
    #[serde(default)]
    pub range: Option<ApiWeaponRange>,
    #[serde(default)]
    pub properties: Vec<ApiReference>,
}

impl ApiWeapon {
    pub fn into_weapon(self) -> Weapon {
        Weapon {
            key: self.base.index,
            name: self.base.name,
            category: optional_item(self.base.equipment_category),
            cost: self.base.cost.map(ApiCost::into_cost),
            weight: self.base.weight,
            weapon_category: self.weapon_category,
            weapon_range: self.weapon_range,
            category_range: self.category_range,
            damage: self.damage.map(ApiDamage::into_damage),
            two_handed_damage: self.two_handed_damage.map(ApiDamage::into_damage),
            range: self.range.map(|r| WeaponRange { normal: r.normal }),
            properties: items(self.properties),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArmor {
    #[serde(flatten)]
    pub base: ApiEquipment,
    #[serde(default)]
    pub armor_category: String,
    #[serde(default)]
    pub armor_class: Option<ApiArmorClass>,
    #[serde(default)]
    pub str_minimum: u32,
    #[serde(default)]
    pub stealth_disadvantage: bool,
}

impl ApiArmor {
    pub fn into_armor(self) -> Armor {
        Armor {
            key: self.base.index,
            name: self.base.name,
            category: optional_item(self.base.equipment_category),
            cost: self.base.cost.map(ApiCost::into_cost),
            weight: self.base.weight,
            armor_category: self.armor_category,
            armor_class: self.armor_class.map(|ac| ArmorClass {
                base: ac.base,
                dex_bonus: ac.dex_bonus,
            }),
            str_minimum: self.str_minimum,
            stealth_disadvantage: self.stealth_disadvantage,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDamage {
    #[serde(default)]
    pub damage_dice: String,
    #[serde(default)]
    pub damage_type: Option<ApiReference>,
}

impl ApiDamage {
    fn into_damage(self) -> Damage {
        Damage {
            damage_dice: self.damage_dice,
            damage_type: optional_item(self.damage_type),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiWeaponRange {
    #[serde(default)]
    pub normal: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArmorClass {
    #[serde(default)]
    pub base: u32,
    #[serde(default)]
    pub dex_bonus: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCost {
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit: String,
}

impl ApiCost {
    fn into_cost(self) -> Cost {
        Cost {
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEquipmentCategory {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<ApiReference>,
}

impl ApiEquipmentCategory {
    pub fn into_category(self) -> EquipmentCategory {
        EquipmentCategory {
            key: self.index,
            name: self.name,
            equipment: items(self.equipment),
        }
    }
}

// ============================================================================
// Features, skills, proficiencies, damage types
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiFeature {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub class: Option<ApiReference>,
    #[serde(default)]
    pub feature_specific: Option<ApiFeatureSpecific>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiFeatureSpecific {
    #[serde(default)]
    pub subfeature_options: Option<ApiChoice>,
}

impl ApiFeature {
    pub fn into_feature(self) -> Feature {
        Feature {
            key: self.index,
            name: self.name,
            level: self.level,
            class: optional_item(self.class),
            subfeature_options: self
                .feature_specific
                .and_then(|f| choice_from_wire(f.subfeature_options)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSkill {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub ability_score: Option<ApiReference>,
    #[serde(default)]
    pub url: String,
}

impl ApiSkill {
    pub fn into_skill(self) -> Skill {
        let kind = kind_from_url(&self.url);
        Skill {
            key: self.index,
            name: self.name,
            description: self.desc,
            ability_score: optional_item(self.ability_score),
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiProficiency {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub reference: Option<ApiReference>,
}

impl ApiProficiency {
    pub fn into_proficiency(self) -> Proficiency {
        Proficiency {
            key: self.index,
            name: self.name,
            kind: ProficiencyKind::from_api(&self.kind),
            reference: optional_item(self.reference),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDamageType {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl ApiDamageType {
    pub fn into_damage_type(self) -> DamageType {
        let kind = kind_from_url(&self.url);
        DamageType {
            key: self.index,
            name: self.name,
            kind,
            description: self.desc,
        }
    }
}

// ============================================================================
// Backgrounds
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiBackground {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub language_options: Option<ApiChoice>,
    #[serde(default)]
    pub starting_equipment: Vec<ApiStartingEquipment>,
    #[serde(default)]
    pub starting_equipment_options: Vec<ApiChoice>,
    #[serde(default)]
    pub feature: Option<ApiBackgroundFeature>,
    #[serde(default)]
    pub personality_traits: Option<ApiChoice>,
    #[serde(default)]
    pub ideals: Option<ApiChoice>,
    #[serde(default)]
    pub bonds: Option<ApiChoice>,
    #[serde(default)]
    pub flaws: Option<ApiChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiBackgroundFeature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
}

impl ApiBackground {
    pub fn into_background(self) -> Background {
        Background {
            key: self.index,
            name: self.name,
            skill_proficiencies: items(self.starting_proficiencies),
            language_options: choice_from_wire(self.language_options),
            starting_equipment: starting_equipment(self.starting_equipment),
            starting_equipment_options: choices_from_wire(self.starting_equipment_options),
            feature: self.feature.map(|f| BackgroundFeature {
                name: f.name,
                description: f.desc.join("\n"),
            }),
            personality_traits: choice_from_wire(self.personality_traits),
            ideals: choice_from_wire(self.ideals),
            bonds: choice_from_wire(self.bonds),
            flaws: choice_from_wire(self.flaws),
        }
    }
}
