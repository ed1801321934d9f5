//! Built-in background data.
//!
//! The free tier of the upstream API does not serve backgrounds beyond
//! the acolyte, so the client falls back to this table when the API
//! fails or lacks a key. Only the PHB backgrounds are covered.

use crate::entities::{Background, BackgroundFeature, ReferenceItem};

/// The standard PHB background list.
pub(crate) fn builtin_background_list() -> Vec<ReferenceItem> {
    [
        ("acolyte", "Acolyte"),
        ("criminal", "Criminal"),
        ("folk-hero", "Folk Hero"),
        ("noble", "Noble"),
        ("sage", "Sage"),
        ("soldier", "Soldier"),
        ("charlatan", "Charlatan"),
        ("entertainer", "Entertainer"),
        ("guild-artisan", "Guild Artisan"),
        ("hermit", "Hermit"),
        ("outlander", "Outlander"),
        ("sailor", "Sailor"),
    ]
    .into_iter()
    .map(|(key, name)| ReferenceItem::new(key, name))
    .collect()
}

/// Detailed data for the backgrounds this crate ships offline.
pub(crate) fn builtin_background(key: &str) -> Option<Background> {
    let (name, skills, feature_name, feature_description) = match key {
        "criminal" => (
            "Criminal",
            [("skill-deception", "Skill: Deception"), ("skill-stealth", "Skill: Stealth")],
            "Criminal Contact",
            "You have a reliable and trustworthy contact who acts as your liaison to a network of other criminals.",
        ),
        "folk-hero" => (
            "Folk Hero",
            [
                ("skill-animal-handling", "Skill: Animal Handling"),
                ("skill-survival", "Skill: Survival"),
            ],
            "Rustic Hospitality",
            "Since you come from the ranks of the common folk, you fit in among them with ease.",
        ),
        "sage" => (
            "Sage",
            [("skill-arcana", "Skill: Arcana"), ("skill-history", "Skill: History")],
            "Researcher",
            "When you attempt to learn or recall a piece of lore, if you do not know that information, you often know where and from whom you can obtain it.",
        ),
        "soldier" => (
            "Soldier",
            [
                ("skill-athletics", "Skill: Athletics"),
                ("skill-intimidation", "Skill: Intimidation"),
            ],
            "Military Rank",
            "You have a military rank from your career as a soldier. Soldiers loyal to your former military organization still recognize your authority and influence.",
        ),
        "noble" => (
            "Noble",
            [("skill-history", "Skill: History"), ("skill-persuasion", "Skill: Persuasion")],
            "Position of Privilege",
            "Thanks to your noble birth, people are inclined to think the best of you.",
        ),
        "charlatan" => (
            "Charlatan",
            [
                ("skill-deception", "Skill: Deception"),
                ("skill-sleight-of-hand", "Skill: Sleight of Hand"),
            ],
            "False Identity",
            "You have created a second identity that includes documentation, established acquaintances, and disguises.",
        ),
        _ => return None,
    };

    Some(Background {
        key: key.to_string(),
        name: name.to_string(),
        skill_proficiencies: skills
            .into_iter()
            .map(|(key, name)| ReferenceItem::new(key, name))
            .collect(),
        language_options: None,
        starting_equipment: Vec::new(),
        starting_equipment_options: Vec::new(),
        feature: Some(BackgroundFeature {
            name: feature_name.to_string(),
            description: feature_description.to_string(),
        }),
        personality_traits: None,
        ideals: None,
        bonds: None,
        flaws: None,
    })
}
