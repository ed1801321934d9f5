//! TTL caching for API results.
//!
//! The reference data is effectively static, so a long TTL in front of
//! the live client removes nearly all upstream traffic. [`TtlCache`] is
//! the store: one value per key, lazily expired on the read that finds
//! the entry stale, no background sweep. [`CachedClient`] decorates any
//! [`Dnd5eApi`] implementation with one cache per entity family.
//!
//! The cache guarantees at most one entry per key, not at most one fetch
//! in flight: two tasks missing the same key concurrently will both hit
//! the upstream, and the later insert wins. For static reference data
//! that duplication is harmless, so it stays undeduplicated.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::api::{Dnd5eApi, MonsterFilter, SpellFilter};
use crate::entities::{
    Background, Class, ClassLevel, DamageType, Equipment, EquipmentCategory, Feature, Monster,
    Proficiency, Race, ReferenceItem, Skill, Spell,
};
use crate::error::Error;

/// A concurrency-safe key → value store with per-entry expiry.
pub struct TtlCache<T> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<T>>>,
}

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a fresh entry. An expired entry is evicted by the read
    /// that discovers it.
    pub async fn get(&self, key: &str) -> Option<T> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.stored_at.elapsed() <= self.ttl => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            // Re-check: another task may have refreshed the entry between
            // the read and write locks.
            if entry.stored_at.elapsed() <= self.ttl {
                return Some(entry.value.clone());
            }
            tracing::debug!(key, "evicting expired cache entry");
            entries.remove(key);
        }
        None
    }

    pub async fn put(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.into(),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }
}

async fn get_or_fetch<T, F, Fut>(cache: &TtlCache<T>, key: &str, fetch: F) -> Result<T, Error>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    if let Some(hit) = cache.get(key).await {
        return Ok(hit);
    }

    let value = fetch().await?;
    cache.put(key, value.clone()).await;
    Ok(value)
}

/// Caching decorator over any [`Dnd5eApi`] implementation.
pub struct CachedClient<C> {
    inner: C,
    refs: TtlCache<Vec<ReferenceItem>>,
    races: TtlCache<Race>,
    classes: TtlCache<Class>,
    class_levels: TtlCache<ClassLevel>,
    spells: TtlCache<Spell>,
    monsters: TtlCache<Monster>,
    equipment: TtlCache<Equipment>,
    equipment_categories: TtlCache<EquipmentCategory>,
    features: TtlCache<Feature>,
    skills: TtlCache<Skill>,
    proficiencies: TtlCache<Proficiency>,
    damage_types: TtlCache<DamageType>,
    backgrounds: TtlCache<Background>,
}

impl<C> CachedClient<C> {
    /// Wrap `inner` with one TTL for every cached operation. Reference
    /// data is static; 24 hours is a reasonable production choice.
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            refs: TtlCache::new(ttl),
            races: TtlCache::new(ttl),
            classes: TtlCache::new(ttl),
            class_levels: TtlCache::new(ttl),
            spells: TtlCache::new(ttl),
            monsters: TtlCache::new(ttl),
            equipment: TtlCache::new(ttl),
            equipment_categories: TtlCache::new(ttl),
            features: TtlCache::new(ttl),
            skills: TtlCache::new(ttl),
            proficiencies: TtlCache::new(ttl),
            damage_types: TtlCache::new(ttl),
            backgrounds: TtlCache::new(ttl),
        }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

fn spell_list_key(filter: &SpellFilter) -> String {
    match (&filter.class, filter.level) {
        (None, None) => "list:spells:all".to_string(),
        (None, Some(level)) => format!("list:spells:level:{level}"),
        (Some(class), None) => format!("list:spells:class:{class}"),
        (Some(class), Some(level)) => format!("list:spells:class:{class}:level:{level}"),
    }
}

#[async_trait]
impl<C: Dnd5eApi> Dnd5eApi for CachedClient<C> {
    async fn list_races(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:races", || self.inner.list_races()).await
    }

    async fn get_race(&self, key: &str) -> Result<Race, Error> {
        get_or_fetch(&self.races, &format!("race:{key}"), || {
            self.inner.get_race(key)
        })
        .await
    }

    async fn list_classes(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:classes", || self.inner.list_classes()).await
    }

    async fn get_class(&self, key: &str) -> Result<Class, Error> {
        get_or_fetch(&self.classes, &format!("class:{key}"), || {
            self.inner.get_class(key)
        })
        .await
    }

    async fn get_class_level(&self, key: &str, level: u32) -> Result<ClassLevel, Error> {
        get_or_fetch(&self.class_levels, &format!("class:{key}:level:{level}"), || {
            self.inner.get_class_level(key, level)
        })
        .await
    }

    async fn list_spells(&self, filter: &SpellFilter) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, &spell_list_key(filter), || {
            self.inner.list_spells(filter)
        })
        .await
    }

    async fn get_spell(&self, key: &str) -> Result<Spell, Error> {
        get_or_fetch(&self.spells, &format!("spell:{key}"), || {
            self.inner.get_spell(key)
        })
        .await
    }

    async fn list_monsters(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:monsters:all", || self.inner.list_monsters()).await
    }

    async fn list_monsters_filtered(
        &self,
        filter: &MonsterFilter,
    ) -> Result<Vec<ReferenceItem>, Error> {
        let Some(challenge_rating) = filter.challenge_rating else {
            return self.list_monsters().await;
        };

        get_or_fetch(
            &self.refs,
            &format!("list:monsters:cr:{challenge_rating}"),
            || self.inner.list_monsters_filtered(filter),
        )
        .await
    }

    async fn get_monster(&self, key: &str) -> Result<Monster, Error> {
        get_or_fetch(&self.monsters, &format!("monster:{key}"), || {
            self.inner.get_monster(key)
        })
        .await
    }

    async fn list_equipment(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:equipment", || self.inner.list_equipment()).await
    }

    async fn get_equipment(&self, key: &str) -> Result<Equipment, Error> {
        get_or_fetch(&self.equipment, &format!("equipment:{key}"), || {
            self.inner.get_equipment(key)
        })
        .await
    }

    async fn get_equipment_category(&self, key: &str) -> Result<EquipmentCategory, Error> {
        get_or_fetch(
            &self.equipment_categories,
            &format!("equipment-category:{key}"),
            || self.inner.get_equipment_category(key),
        )
        .await
    }

    async fn list_features(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:features", || self.inner.list_features()).await
    }

    async fn get_feature(&self, key: &str) -> Result<Feature, Error> {
        get_or_fetch(&self.features, &format!("feature:{key}"), || {
            self.inner.get_feature(key)
        })
        .await
    }

    async fn list_skills(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:skills", || self.inner.list_skills()).await
    }

    async fn get_skill(&self, key: &str) -> Result<Skill, Error> {
        get_or_fetch(&self.skills, &format!("skill:{key}"), || {
            self.inner.get_skill(key)
        })
        .await
    }

    async fn get_proficiency(&self, key: &str) -> Result<Proficiency, Error> {
        get_or_fetch(&self.proficiencies, &format!("proficiency:{key}"), || {
            self.inner.get_proficiency(key)
        })
        .await
    }

    async fn list_damage_types(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:damage-types", || {
            self.inner.list_damage_types()
        })
        .await
    }

    async fn get_damage_type(&self, key: &str) -> Result<DamageType, Error> {
        get_or_fetch(&self.damage_types, &format!("damage-type:{key}"), || {
            self.inner.get_damage_type(key)
        })
        .await
    }

    async fn list_backgrounds(&self) -> Result<Vec<ReferenceItem>, Error> {
        get_or_fetch(&self.refs, "list:backgrounds", || {
            self.inner.list_backgrounds()
        })
        .await
    }

    async fn get_background(&self, key: &str) -> Result<Background, Error> {
        get_or_fetch(&self.backgrounds, &format!("background:{key}"), || {
            self.inner.get_background(key)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_entries_hit_and_absent_keys_miss() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));

        cache.put("answer", 42).await;
        assert_eq!(cache.get("answer").await, Some(42));
        assert_eq!(cache.get("question").await, None);
    }

    #[tokio::test]
    async fn expired_entries_are_evicted_on_read() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_millis(10));

        cache.put("answer", 42).await;
        std::thread::sleep(Duration::from_millis(25));

        assert_eq!(cache.get("answer").await, None);
        // A second read still misses; the entry is gone, not just stale.
        assert_eq!(cache.get("answer").await, None);
    }

    #[tokio::test]
    async fn put_refreshes_the_timestamp() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_millis(40));

        cache.put("answer", 1).await;
        std::thread::sleep(Duration::from_millis(25));
        cache.put("answer", 2).await;
        std::thread::sleep(Duration::from_millis(25));

        // 50ms after the first put, but only 25ms after the refresh.
        assert_eq!(cache.get("answer").await, Some(2));
    }

    #[test]
    fn spell_keys_distinguish_filters() {
        assert_eq!(spell_list_key(&SpellFilter::default()), "list:spells:all");
        assert_eq!(
            spell_list_key(&SpellFilter::for_level(3)),
            "list:spells:level:3"
        );
        assert_eq!(
            spell_list_key(&SpellFilter::for_class("wizard")),
            "list:spells:class:wizard"
        );
        assert_eq!(
            spell_list_key(&SpellFilter::for_class("wizard").with_level(3)),
            "list:spells:class:wizard:level:3"
        );
    }
}
