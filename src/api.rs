//! The operation surface of the rules reference API.
//!
//! [`Dnd5eApi`] is implemented by the live [`Dnd5eClient`](crate::Dnd5eClient)
//! and by [`CachedClient`](crate::CachedClient), so callers can swap a bare
//! client for a cached one without touching call sites.

use async_trait::async_trait;

use crate::entities::{
    Background, Class, ClassLevel, DamageType, Equipment, EquipmentCategory, Feature, Monster,
    Proficiency, Race, ReferenceItem, Skill, Spell,
};
use crate::error::Error;

/// Filter for spell listings. Absent fields widen the query; with both
/// present the result is the intersection, in class-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellFilter {
    pub level: Option<u32>,
    pub class: Option<String>,
}

impl SpellFilter {
    pub fn for_level(level: u32) -> Self {
        Self {
            level: Some(level),
            class: None,
        }
    }

    pub fn for_class(class: impl Into<String>) -> Self {
        Self {
            level: None,
            class: Some(class.into()),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Filter for monster listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonsterFilter {
    pub challenge_rating: Option<f32>,
}

/// Typed async accessors for every entity the API serves.
#[async_trait]
pub trait Dnd5eApi: Send + Sync {
    async fn list_races(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_race(&self, key: &str) -> Result<Race, Error>;

    async fn list_classes(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_class(&self, key: &str) -> Result<Class, Error>;
    async fn get_class_level(&self, key: &str, level: u32) -> Result<ClassLevel, Error>;

    async fn list_spells(&self, filter: &SpellFilter) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_spell(&self, key: &str) -> Result<Spell, Error>;

    async fn list_monsters(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn list_monsters_filtered(
        &self,
        filter: &MonsterFilter,
    ) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_monster(&self, key: &str) -> Result<Monster, Error>;

    async fn list_equipment(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_equipment(&self, key: &str) -> Result<Equipment, Error>;
    async fn get_equipment_category(&self, key: &str) -> Result<EquipmentCategory, Error>;

    async fn list_features(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_feature(&self, key: &str) -> Result<Feature, Error>;

    async fn list_skills(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_skill(&self, key: &str) -> Result<Skill, Error>;

    async fn get_proficiency(&self, key: &str) -> Result<Proficiency, Error>;

    async fn list_damage_types(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_damage_type(&self, key: &str) -> Result<DamageType, Error>;

    async fn list_backgrounds(&self) -> Result<Vec<ReferenceItem>, Error>;
    async fn get_background(&self, key: &str) -> Result<Background, Error>;
}
