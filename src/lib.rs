//! Typed client for the D&D 5e rules reference API.
//!
//! This crate provides:
//! - Async accessors for every entity the API serves (races, classes,
//!   spells, monsters, equipment, backgrounds, and the rest)
//! - A resolver that expands equipment-category choice placeholders into
//!   fully enumerated option trees
//! - A TTL caching decorator over any client implementation
//!
//! # Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//!
//! use dnd5e_api::{CachedClient, Dnd5eApi, Dnd5eClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dnd5e_api::Error> {
//!     let client = CachedClient::new(Dnd5eClient::new()?, Duration::from_secs(24 * 60 * 60));
//!
//!     let races = client.list_races().await?;
//!     println!("{} races", races.len());
//!
//!     // Starting-equipment options come back fully resolved: category
//!     // placeholders like "any simple weapon" are already expanded.
//!     let wizard = client.get_class("wizard").await?;
//!     println!("{} equipment choices", wizard.starting_equipment_options.len());
//!     Ok(())
//! }
//! ```

pub mod api;
mod backgrounds;
pub mod cache;
pub mod client;
pub mod entities;
mod error;
pub mod http;
pub mod resolve;
pub mod testing;
mod wire;

// Primary public API
pub use api::{Dnd5eApi, MonsterFilter, SpellFilter};
pub use cache::{CachedClient, TtlCache};
pub use client::{Dnd5eClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use http::{HttpClient, HttpResponse};
pub use resolve::{CategoryLookup, Resolver, MAX_CHOICE_DEPTH};
