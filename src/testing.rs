//! Testing utilities.
//!
//! This module provides tools for deterministic tests without a network:
//! - `ScriptedTransport` serves canned HTTP responses per URL
//! - `StaticCategories` is an in-memory `CategoryLookup` with call counts
//! - `MockApi` returns pre-programmed entities behind the `Dnd5eApi` trait

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{Dnd5eApi, MonsterFilter, SpellFilter};
use crate::entities::{
    Background, Class, ClassLevel, DamageType, Equipment, EquipmentCategory, Feature, Monster,
    Proficiency, Race, ReferenceItem, Skill, Spell,
};
use crate::error::Error;
use crate::http::{HttpClient, HttpResponse};
use crate::resolve::CategoryLookup;

// ============================================================================
// Scripted HTTP transport
// ============================================================================

/// An `HttpClient` that serves canned responses keyed by full URL and
/// records every request it sees. Unscripted URLs fail loudly so a test
/// cannot silently hit the wrong endpoint.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, ScriptedOutcome>>,
    requests: Mutex<Vec<String>>,
}

#[derive(Clone)]
enum ScriptedOutcome {
    Respond { status: u16, body: Vec<u8> },
    Fail(String),
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`.
    pub fn respond_json(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.routes.lock().expect("transport lock poisoned").insert(
            url.into(),
            ScriptedOutcome::Respond {
                status: 200,
                body: body.into(),
            },
        );
    }

    /// Serve an empty body with the given status for `url`.
    pub fn respond_status(&self, url: impl Into<String>, status: u16) {
        self.routes.lock().expect("transport lock poisoned").insert(
            url.into(),
            ScriptedOutcome::Respond {
                status,
                body: Vec::new(),
            },
        );
    }

    /// Fail the transport itself for `url`, as if the connection dropped.
    pub fn fail(&self, url: impl Into<String>, message: impl Into<String>) {
        self.routes
            .lock()
            .expect("transport lock poisoned")
            .insert(url.into(), ScriptedOutcome::Fail(message.into()));
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("transport lock poisoned")
            .clone()
    }

    /// How many times `url` has been requested.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .expect("transport lock poisoned")
            .iter()
            .filter(|r| r.as_str() == url)
            .count()
    }
}

#[async_trait]
impl HttpClient for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        self.requests
            .lock()
            .expect("transport lock poisoned")
            .push(url.to_string());

        let outcome = self
            .routes
            .lock()
            .expect("transport lock poisoned")
            .get(url)
            .cloned();

        match outcome {
            Some(ScriptedOutcome::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(ScriptedOutcome::Fail(message)) => Err(Error::Transport(message)),
            None => Err(Error::Transport(format!("no scripted response for {url}"))),
        }
    }
}

// ============================================================================
// Static category lookup
// ============================================================================

/// A `CategoryLookup` backed by an in-memory table.
#[derive(Default)]
pub struct StaticCategories {
    categories: HashMap<String, Vec<ReferenceItem>>,
    failures: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, key: impl Into<String>, items: Vec<ReferenceItem>) -> Self {
        self.categories.insert(key.into(), items);
        self
    }

    /// Make lookups of `key` fail with a transport error.
    pub fn with_failure(mut self, key: impl Into<String>) -> Self {
        self.failures.push(key.into());
        self
    }

    /// Every category key looked up so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("category lock poisoned").clone()
    }

    pub fn call_count(&self, key: &str) -> usize {
        self.calls
            .lock()
            .expect("category lock poisoned")
            .iter()
            .filter(|c| c.as_str() == key)
            .count()
    }
}

#[async_trait]
impl CategoryLookup for StaticCategories {
    async fn list_items_in_category(&self, key: &str) -> Result<Vec<ReferenceItem>, Error> {
        self.calls
            .lock()
            .expect("category lock poisoned")
            .push(key.to_string());

        if self.failures.iter().any(|f| f == key) {
            return Err(Error::Transport(format!("category lookup failed: {key}")));
        }

        self.categories
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("equipment category {key}")))
    }
}

// ============================================================================
// Mock API client
// ============================================================================

/// A `Dnd5eApi` with pre-programmed responses and call counting, for
/// exercising decorators like [`CachedClient`](crate::CachedClient).
/// Operations without a programmed response return `Error::NotFound`.
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<String>>,
    races: Option<Vec<ReferenceItem>>,
    race_entries: HashMap<String, Race>,
    class_entries: HashMap<String, Class>,
    spell_lists: HashMap<String, Vec<ReferenceItem>>,
    monster_entries: HashMap<String, Monster>,
    background_entries: HashMap<String, Background>,
}

fn spell_filter_key(filter: &SpellFilter) -> String {
    format!(
        "{}:{}",
        filter.class.as_deref().unwrap_or("*"),
        filter
            .level
            .map(|l| l.to_string())
            .unwrap_or_else(|| "*".to_string())
    )
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_races(mut self, races: Vec<ReferenceItem>) -> Self {
        self.races = Some(races);
        self
    }

    pub fn with_race(mut self, key: impl Into<String>, race: Race) -> Self {
        self.race_entries.insert(key.into(), race);
        self
    }

    pub fn with_class(mut self, key: impl Into<String>, class: Class) -> Self {
        self.class_entries.insert(key.into(), class);
        self
    }

    pub fn with_spell_list(mut self, filter: &SpellFilter, spells: Vec<ReferenceItem>) -> Self {
        self.spell_lists.insert(spell_filter_key(filter), spells);
        self
    }

    pub fn with_monster(mut self, key: impl Into<String>, monster: Monster) -> Self {
        self.monster_entries.insert(key.into(), monster);
        self
    }

    pub fn with_background(mut self, key: impl Into<String>, background: Background) -> Self {
        self.background_entries.insert(key.into(), background);
        self
    }

    /// Every operation invoked so far, e.g. `"get_race:dwarf"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .iter()
            .filter(|c| c.as_str() == operation)
            .count()
    }

    fn record(&self, operation: impl Into<String>) {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(operation.into());
    }

    fn unprogrammed<T>(operation: &str) -> Result<T, Error> {
        Err(Error::NotFound(format!(
            "mock response not programmed: {operation}"
        )))
    }
}

#[async_trait]
impl Dnd5eApi for MockApi {
    async fn list_races(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_races");
        match &self.races {
            Some(races) => Ok(races.clone()),
            None => Self::unprogrammed("list_races"),
        }
    }

    async fn get_race(&self, key: &str) -> Result<Race, Error> {
        self.record(format!("get_race:{key}"));
        match self.race_entries.get(key) {
            Some(race) => Ok(race.clone()),
            None => Self::unprogrammed(&format!("get_race:{key}")),
        }
    }

    async fn list_classes(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_classes");
        Self::unprogrammed("list_classes")
    }

    async fn get_class(&self, key: &str) -> Result<Class, Error> {
        self.record(format!("get_class:{key}"));
        match self.class_entries.get(key) {
            Some(class) => Ok(class.clone()),
            None => Self::unprogrammed(&format!("get_class:{key}")),
        }
    }

    async fn get_class_level(&self, key: &str, level: u32) -> Result<ClassLevel, Error> {
        self.record(format!("get_class_level:{key}:{level}"));
        Self::unprogrammed(&format!("get_class_level:{key}:{level}"))
    }

    async fn list_spells(&self, filter: &SpellFilter) -> Result<Vec<ReferenceItem>, Error> {
        let filter_key = spell_filter_key(filter);
        self.record(format!("list_spells:{filter_key}"));
        match self.spell_lists.get(&filter_key) {
            Some(spells) => Ok(spells.clone()),
            None => Self::unprogrammed(&format!("list_spells:{filter_key}")),
        }
    }

    async fn get_spell(&self, key: &str) -> Result<Spell, Error> {
        self.record(format!("get_spell:{key}"));
        Self::unprogrammed(&format!("get_spell:{key}"))
    }

    async fn list_monsters(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_monsters");
        Self::unprogrammed("list_monsters")
    }

    async fn list_monsters_filtered(
        &self,
        filter: &MonsterFilter,
    ) -> Result<Vec<ReferenceItem>, Error> {
        self.record(format!("list_monsters_filtered:{:?}", filter.challenge_rating));
        Self::unprogrammed("list_monsters_filtered")
    }

    async fn get_monster(&self, key: &str) -> Result<Monster, Error> {
        self.record(format!("get_monster:{key}"));
        match self.monster_entries.get(key) {
            Some(monster) => Ok(monster.clone()),
            None => Self::unprogrammed(&format!("get_monster:{key}")),
        }
    }

    async fn list_equipment(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_equipment");
        Self::unprogrammed("list_equipment")
    }

    async fn get_equipment(&self, key: &str) -> Result<Equipment, Error> {
        self.record(format!("get_equipment:{key}"));
        Self::unprogrammed(&format!("get_equipment:{key}"))
    }

    async fn get_equipment_category(&self, key: &str) -> Result<EquipmentCategory, Error> {
        self.record(format!("get_equipment_category:{key}"));
        Self::unprogrammed(&format!("get_equipment_category:{key}"))
    }

    async fn list_features(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_features");
        Self::unprogrammed("list_features")
    }

    async fn get_feature(&self, key: &str) -> Result<Feature, Error> {
        self.record(format!("get_feature:{key}"));
        Self::unprogrammed(&format!("get_feature:{key}"))
    }

    async fn list_skills(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_skills");
        Self::unprogrammed("list_skills")
    }

    async fn get_skill(&self, key: &str) -> Result<Skill, Error> {
        self.record(format!("get_skill:{key}"));
        Self::unprogrammed(&format!("get_skill:{key}"))
    }

    async fn get_proficiency(&self, key: &str) -> Result<Proficiency, Error> {
        self.record(format!("get_proficiency:{key}"));
        Self::unprogrammed(&format!("get_proficiency:{key}"))
    }

    async fn list_damage_types(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_damage_types");
        Self::unprogrammed("list_damage_types")
    }

    async fn get_damage_type(&self, key: &str) -> Result<DamageType, Error> {
        self.record(format!("get_damage_type:{key}"));
        Self::unprogrammed(&format!("get_damage_type:{key}"))
    }

    async fn list_backgrounds(&self) -> Result<Vec<ReferenceItem>, Error> {
        self.record("list_backgrounds");
        Self::unprogrammed("list_backgrounds")
    }

    async fn get_background(&self, key: &str) -> Result<Background, Error> {
        self.record(format!("get_background:{key}"));
        match self.background_entries.get(key) {
            Some(background) => Ok(background.clone()),
            None => Self::unprogrammed(&format!("get_background:{key}")),
        }
    }
}
