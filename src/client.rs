//! The live API client.
//!
//! Every accessor is the same shape: GET through the transport seam,
//! check the status, decode the wire envelope, map it into the public
//! entity model. The one place with real work is `get_class`, which runs
//! the choice resolver over the starting-equipment options before the
//! class is handed out.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::api::{Dnd5eApi, MonsterFilter, SpellFilter};
use crate::backgrounds::{builtin_background, builtin_background_list};
use crate::entities::{
    Background, Class, ClassLevel, DamageType, Equipment, EquipmentCategory, Feature, Monster,
    Proficiency, Race, ReferenceItem, Skill, Spell,
};
use crate::error::Error;
use crate::http::{default_transport, HttpClient};
use crate::resolve::{CategoryLookup, Resolver};
use crate::wire;

/// Base URL of the public API instance.
pub const DEFAULT_BASE_URL: &str = "https://www.dnd5eapi.co/api/";

const HTTP_STATUS_OK: u16 = 200;

/// Client for the D&D 5e rules reference API.
#[derive(Clone)]
pub struct Dnd5eClient {
    transport: Arc<dyn HttpClient>,
    base_url: String,
}

impl Dnd5eClient {
    /// Create a client over the default `reqwest` transport.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_transport(Arc::new(default_transport()?)))
    }

    /// Create a client over a caller-supplied transport. Timeout and
    /// retry policy belong to the transport, not to this client.
    pub fn with_transport(transport: Arc<dyn HttpClient>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.transport.get(&url).await?;

        if response.status != HTTP_STATUS_OK {
            return Err(Error::UnexpectedStatus(response.status));
        }

        Ok(response.body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.get_bytes(path).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_list(&self, path: &str) -> Result<Vec<ReferenceItem>, Error> {
        let response: wire::ApiListResponse = self.get_json(path).await?;
        Ok(wire::items(response.results))
    }

    async fn spells_by_level(&self, level: Option<u32>) -> Result<Vec<ReferenceItem>, Error> {
        let path = match level {
            None => "spells".to_string(),
            Some(level) => format!("spells?level={level}"),
        };
        self.get_list(&path).await
    }

    async fn spells_by_class(&self, class: &str) -> Result<Vec<ReferenceItem>, Error> {
        if class.is_empty() {
            return Err(Error::Config("spell class filter is empty".to_string()));
        }
        self.get_list(&format!("classes/{class}/spells")).await
    }
}

#[async_trait]
impl CategoryLookup for Dnd5eClient {
    async fn list_items_in_category(&self, key: &str) -> Result<Vec<ReferenceItem>, Error> {
        let category: wire::ApiEquipmentCategory =
            self.get_json(&format!("equipment-categories/{key}")).await?;
        Ok(wire::items(category.equipment))
    }
}

#[async_trait]
impl Dnd5eApi for Dnd5eClient {
    async fn list_races(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("races").await
    }

    async fn get_race(&self, key: &str) -> Result<Race, Error> {
        let raw: wire::ApiRace = self.get_json(&format!("races/{key}")).await?;
        Ok(raw.into_race())
    }

    async fn list_classes(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("classes").await
    }

    async fn get_class(&self, key: &str) -> Result<Class, Error> {
        let raw: wire::ApiClass = self.get_json(&format!("classes/{key}")).await?;

        // Starting-equipment options may hide category placeholders at
        // any depth; a class never leaves here with one unresolved.
        let mut resolver = Resolver::new(self);
        let starting_equipment_options = resolver
            .resolve_choices(wire::choices_from_wire(raw.starting_equipment_options))
            .await?;

        let proficiencies = wire::items(raw.proficiencies);
        let (armor, weapon, tool) = categorize_proficiencies(&proficiencies);

        Ok(Class {
            key: raw.index.clone(),
            name: raw.name,
            hit_die: raw.hit_die,
            description: class_description(&raw.index).to_string(),
            proficiencies,
            armor_proficiencies: armor,
            weapon_proficiencies: weapon,
            tool_proficiencies: tool,
            saving_throws: wire::items(raw.saving_throws),
            primary_abilities: wire::primary_abilities(raw.multi_classing),
            starting_equipment: wire::starting_equipment(raw.starting_equipment),
            proficiency_choices: wire::choices_from_wire(raw.proficiency_choices),
            starting_equipment_options,
        })
    }

    async fn get_class_level(&self, key: &str, level: u32) -> Result<ClassLevel, Error> {
        if key.is_empty() {
            return Err(Error::Config("class key is required".to_string()));
        }
        if level == 0 {
            return Err(Error::Config("class level is required".to_string()));
        }

        let raw: wire::ApiClassLevel = self
            .get_json(&format!("classes/{key}/levels/{level}"))
            .await?;
        Ok(raw.into_level())
    }

    async fn list_spells(&self, filter: &SpellFilter) -> Result<Vec<ReferenceItem>, Error> {
        match (&filter.class, filter.level) {
            (None, level) => self.spells_by_level(level).await,
            (Some(class), None) => self.spells_by_class(class).await,
            (Some(class), Some(level)) => {
                let level_keys: HashSet<String> = self
                    .spells_by_level(Some(level))
                    .await?
                    .into_iter()
                    .map(|item| item.key)
                    .collect();

                let class_spells = self.spells_by_class(class).await?;
                Ok(class_spells
                    .into_iter()
                    .filter(|item| level_keys.contains(&item.key))
                    .collect())
            }
        }
    }

    async fn get_spell(&self, key: &str) -> Result<Spell, Error> {
        let raw: wire::ApiSpell = self.get_json(&format!("spells/{key}")).await?;
        Ok(raw.into_spell())
    }

    async fn list_monsters(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.list_monsters_filtered(&MonsterFilter::default()).await
    }

    async fn list_monsters_filtered(
        &self,
        filter: &MonsterFilter,
    ) -> Result<Vec<ReferenceItem>, Error> {
        let path = match filter.challenge_rating {
            None => "monsters".to_string(),
            Some(cr) => format!("monsters?challenge_rating={cr}"),
        };
        self.get_list(&path).await
    }

    async fn get_monster(&self, key: &str) -> Result<Monster, Error> {
        let raw: wire::ApiMonster = self.get_json(&format!("monsters/{key}")).await?;
        Ok(raw.into_monster())
    }

    async fn list_equipment(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("equipment").await
    }

    async fn get_equipment(&self, key: &str) -> Result<Equipment, Error> {
        // The category decides the shape, so the body is decoded twice:
        // once for the envelope, once as the category-specific type.
        let body = self.get_bytes(&format!("equipment/{key}")).await?;
        let envelope: wire::ApiEquipment = serde_json::from_slice(&body)?;

        match envelope.category_key() {
            "weapon" => {
                let weapon: wire::ApiWeapon = serde_json::from_slice(&body)?;
                Ok(Equipment::Weapon(weapon.into_weapon()))
            }
            "armor" => {
                let armor: wire::ApiArmor = serde_json::from_slice(&body)?;
                Ok(Equipment::Armor(armor.into_armor()))
            }
            _ => Ok(Equipment::Gear(envelope.into_gear())),
        }
    }

    async fn get_equipment_category(&self, key: &str) -> Result<EquipmentCategory, Error> {
        let raw: wire::ApiEquipmentCategory =
            self.get_json(&format!("equipment-categories/{key}")).await?;
        Ok(raw.into_category())
    }

    async fn list_features(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("features").await
    }

    async fn get_feature(&self, key: &str) -> Result<Feature, Error> {
        let raw: wire::ApiFeature = self.get_json(&format!("features/{key}")).await?;
        Ok(raw.into_feature())
    }

    async fn list_skills(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("skills").await
    }

    async fn get_skill(&self, key: &str) -> Result<Skill, Error> {
        let raw: wire::ApiSkill = self.get_json(&format!("skills/{key}")).await?;
        Ok(raw.into_skill())
    }

    async fn get_proficiency(&self, key: &str) -> Result<Proficiency, Error> {
        let raw: wire::ApiProficiency = self.get_json(&format!("proficiencies/{key}")).await?;
        Ok(raw.into_proficiency())
    }

    async fn list_damage_types(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.get_list("damage-types").await
    }

    async fn get_damage_type(&self, key: &str) -> Result<DamageType, Error> {
        let raw: wire::ApiDamageType = self.get_json(&format!("damage-types/{key}")).await?;
        Ok(raw.into_damage_type())
    }

    async fn list_backgrounds(&self) -> Result<Vec<ReferenceItem>, Error> {
        // The public instance barely serves backgrounds; fall back to the
        // built-in table on any failure and merge on success.
        let from_api = match self.get_list("backgrounds").await {
            Ok(list) => list,
            Err(error) => {
                tracing::warn!(%error, "background list unavailable upstream, using built-ins");
                return Ok(builtin_background_list());
            }
        };

        let seen: HashSet<String> = from_api.iter().map(|item| item.key.clone()).collect();
        let mut merged = from_api;
        merged.extend(
            builtin_background_list()
                .into_iter()
                .filter(|item| !seen.contains(&item.key)),
        );

        Ok(merged)
    }

    async fn get_background(&self, key: &str) -> Result<Background, Error> {
        match self.get_json::<wire::ApiBackground>(&format!("backgrounds/{key}")).await {
            Ok(raw) => Ok(raw.into_background()),
            Err(error) => {
                tracing::warn!(%error, key, "background unavailable upstream, trying built-ins");
                builtin_background(key).ok_or_else(|| Error::NotFound(format!("background {key}")))
            }
        }
    }
}

// ============================================================================
// Class helpers
// ============================================================================

/// Split a class's proficiency grants into armor, weapon, and tool
/// buckets. Saving throws are filtered out; anything that is neither
/// armor, weapon, nor saving throw counts as a tool, which also absorbs
/// proficiency kinds added upstream later.
fn categorize_proficiencies(
    proficiencies: &[ReferenceItem],
) -> (Vec<ReferenceItem>, Vec<ReferenceItem>, Vec<ReferenceItem>) {
    let mut armor = Vec::new();
    let mut weapon = Vec::new();
    let mut tool = Vec::new();

    for proficiency in proficiencies {
        if is_armor_proficiency(&proficiency.key) {
            armor.push(proficiency.clone());
        } else if is_weapon_proficiency(&proficiency.key) {
            weapon.push(proficiency.clone());
        } else if !is_saving_throw_proficiency(&proficiency.key) {
            tool.push(proficiency.clone());
        }
    }

    (armor, weapon, tool)
}

fn is_armor_proficiency(key: &str) -> bool {
    matches!(
        key,
        "light-armor" | "medium-armor" | "heavy-armor" | "shields" | "all-armor"
    )
}

fn is_weapon_proficiency(key: &str) -> bool {
    matches!(key, "simple-weapons" | "martial-weapons")
}

fn is_saving_throw_proficiency(key: &str) -> bool {
    key.starts_with("saving-throw")
}

fn class_description(key: &str) -> &'static str {
    match key {
        "barbarian" => "A fierce warrior of primitive background who can enter a battle rage",
        "bard" => "A master of song, speech, and the magic they contain",
        "cleric" => "A priestly champion who wields divine magic in service of a higher power",
        "druid" => "A priest of nature, wielding elemental forces and transformative magic",
        "fighter" => "A master of martial combat, skilled with a variety of weapons and armor",
        "monk" => "A master of martial arts, harnessing inner power through discipline",
        "paladin" => "A holy warrior bound to a sacred oath, wielding divine magic",
        "ranger" => "A warrior of the wilderness, skilled in tracking, survival, and combat",
        "rogue" => "A scoundrel who uses stealth and trickery to achieve their goals",
        "sorcerer" => "A spellcaster who draws on inherent magic from a gift or bloodline",
        "warlock" => "A wielder of magic derived from a bargain with an extraplanar entity",
        "wizard" => "A scholarly magic-user capable of manipulating structures of reality",
        _ => "",
    }
}
