//! Walkthrough of the cached client against the live API.
//!
//! Run with: `cargo run --example cached_walkthrough`

use std::time::Duration;

use dnd5e_api::{CachedClient, Dnd5eApi, Dnd5eClient};

#[tokio::main]
async fn main() -> Result<(), dnd5e_api::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dnd5e_api=debug".into()),
        )
        .init();

    // Reference data is static; a day-long TTL is comfortable.
    let client = CachedClient::new(Dnd5eClient::new()?, Duration::from_secs(24 * 60 * 60));

    println!("Fetching races (first call - API)...");
    let races = client.list_races().await?;
    println!("Found {} races", races.len());

    println!("Fetching races (second call - cache)...");
    let races_again = client.list_races().await?;
    println!("Found {} races (from cache)", races_again.len());

    if let Some(first) = races.first() {
        println!("Fetching details for {}...", first.name);
        let race = client.get_race(&first.key).await?;
        println!("Race: {}, Speed: {}", race.name, race.speed);
    }

    // Starting-equipment options come back fully resolved: category
    // placeholders like "any simple weapon" are expanded into the
    // category's member list.
    println!("Fetching the wizard class...");
    let wizard = client.get_class("wizard").await?;
    for choice in &wizard.starting_equipment_options {
        let description = choice.description.as_deref().unwrap_or("equipment choice");
        println!("  choose {}: {}", choice.choose, description);
        assert!(choice.is_fully_resolved());
    }

    Ok(())
}
