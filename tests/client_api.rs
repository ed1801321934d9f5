//! Client tests against a scripted transport: wire decoding, entity
//! mapping, status handling, and in-flight choice resolution.

use std::sync::Arc;

use dnd5e_api::entities::{ChoiceOption, ClassSpecific, Equipment, OptionSource};
use dnd5e_api::testing::ScriptedTransport;
use dnd5e_api::{Dnd5eApi, Dnd5eClient, Error, SpellFilter};

const BASE: &str = "https://rules.test/api/";

fn client(transport: &Arc<ScriptedTransport>) -> Dnd5eClient {
    let shared: Arc<ScriptedTransport> = Arc::clone(transport);
    Dnd5eClient::with_transport(shared).with_base_url(BASE)
}

fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

// ============================================================================
// Lists and plain entities
// ============================================================================

#[tokio::test]
async fn list_races_maps_the_envelope() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("races"),
        r#"{"count": 2, "results": [
            {"index": "dwarf", "name": "Dwarf", "url": "/api/races/dwarf"},
            {"index": "elf", "name": "Elf", "url": "/api/races/elf"}
        ]}"#,
    );

    let races = client(&transport).list_races().await.expect("list decodes");

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].key, "dwarf");
    assert_eq!(races[0].name, "Dwarf");
    assert_eq!(races[0].kind, "races");
    assert_eq!(races[1].key, "elf");
}

#[tokio::test]
async fn transport_errors_propagate() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.fail(url("races"), "connection reset");

    let err = client(&transport).list_races().await.expect_err("must fail");
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn non_200_status_is_surfaced() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_status(url("races"), 500);

    let err = client(&transport).list_races().await.expect_err("must fail");
    assert!(matches!(err, Error::UnexpectedStatus(500)), "got {err:?}");
}

#[tokio::test]
async fn truncated_json_is_a_decode_error() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(url("races"), r#"{"count": 1, "results": [{"index": "hum"#);

    let err = client(&transport).list_races().await.expect_err("must fail");
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn get_race_maps_bonuses_and_choices() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("races/half-elf"),
        r#"{
            "index": "half-elf",
            "name": "Half-Elf",
            "speed": 30,
            "size": "Medium",
            "size_description": "Half-elves are about the same size as humans.",
            "ability_bonuses": [
                {"ability_score": {"index": "cha", "name": "CHA", "url": "/api/ability-scores/cha"}, "bonus": 2}
            ],
            "languages": [{"index": "common", "name": "Common", "url": "/api/languages/common"}],
            "traits": [{"index": "darkvision", "name": "Darkvision", "url": "/api/traits/darkvision"}],
            "subraces": [],
            "starting_proficiencies": [],
            "language_options": {
                "choose": 1,
                "type": "languages",
                "from": {
                    "option_set_type": "options_array",
                    "options": [
                        {"option_type": "reference", "item": {"index": "dwarvish", "name": "Dwarvish", "url": "/api/languages/dwarvish"}},
                        {"option_type": "reference", "item": {"index": "elvish", "name": "Elvish", "url": "/api/languages/elvish"}}
                    ]
                }
            }
        }"#,
    );

    let race = client(&transport)
        .get_race("half-elf")
        .await
        .expect("race decodes");

    assert_eq!(race.key, "half-elf");
    assert_eq!(race.speed, 30);
    assert_eq!(race.ability_bonuses.len(), 1);
    assert_eq!(race.ability_bonuses[0].ability_score.key, "cha");
    assert_eq!(race.ability_bonuses[0].bonus, 2);
    assert_eq!(race.languages[0].kind, "languages");

    let language_options = race.language_options.expect("language options present");
    assert_eq!(language_options.choose, 1);
    let Some(OptionSource::Options(list)) = &language_options.from else {
        panic!("expected explicit language options");
    };
    assert_eq!(list.options.len(), 2);
}

// ============================================================================
// Classes and resolution
// ============================================================================

const WIZARD_CLASS_BODY: &str = r#"{
    "index": "wizard",
    "name": "Wizard",
    "hit_die": 6,
    "proficiencies": [
        {"index": "daggers", "name": "Daggers", "url": "/api/proficiencies/daggers"},
        {"index": "saving-throw-int", "name": "Saving Throw: INT", "url": "/api/proficiencies/saving-throw-int"}
    ],
    "saving_throws": [
        {"index": "int", "name": "INT", "url": "/api/ability-scores/int"},
        {"index": "wis", "name": "WIS", "url": "/api/ability-scores/wis"}
    ],
    "starting_equipment": [
        {"equipment": {"index": "spellbook", "name": "Spellbook", "url": "/api/equipment/spellbook"}, "quantity": 1}
    ],
    "multi_classing": {
        "prerequisites": [
            {"ability_score": {"index": "int", "name": "INT", "url": "/api/ability-scores/int"}, "minimum_score": 13}
        ]
    },
    "proficiency_choices": [{
        "choose": 2,
        "type": "proficiencies",
        "from": {
            "option_set_type": "options_array",
            "options": [
                {"option_type": "reference", "item": {"index": "skill-arcana", "name": "Skill: Arcana", "url": "/api/proficiencies/skill-arcana"}},
                {"option_type": "reference", "item": {"index": "skill-history", "name": "Skill: History", "url": "/api/proficiencies/skill-history"}}
            ]
        }
    }],
    "starting_equipment_options": [
        {
            "desc": "(a) a light crossbow and 20 bolts or (b) any simple weapon",
            "choose": 1,
            "type": "equipment",
            "from": {
                "option_set_type": "options_array",
                "options": [
                    {
                        "option_type": "multiple",
                        "items": [
                            {"option_type": "counted_reference", "count": 1, "of": {"index": "crossbow-light", "name": "Crossbow, light", "url": "/api/equipment/crossbow-light"}},
                            {"option_type": "counted_reference", "count": 20, "of": {"index": "crossbow-bolt", "name": "Crossbow bolt", "url": "/api/equipment/crossbow-bolt"}}
                        ]
                    },
                    {
                        "option_type": "choice",
                        "choice": {
                            "desc": "any simple weapon",
                            "choose": 1,
                            "type": "equipment",
                            "from": {
                                "option_set_type": "equipment_category",
                                "equipment_category": {"index": "simple-weapons", "name": "Simple Weapons", "url": "/api/equipment-categories/simple-weapons"}
                            }
                        }
                    }
                ]
            }
        },
        {
            "desc": "any simple weapon",
            "choose": 1,
            "type": "equipment",
            "from": {
                "option_set_type": "equipment_category",
                "equipment_category": {"index": "simple-weapons", "name": "Simple Weapons", "url": "/api/equipment-categories/simple-weapons"}
            }
        }
    ]
}"#;

const SIMPLE_WEAPONS_BODY: &str = r#"{
    "index": "simple-weapons",
    "name": "Simple Weapons",
    "equipment": [
        {"index": "club", "name": "Club", "url": "/api/equipment/club"},
        {"index": "dagger", "name": "Dagger", "url": "/api/equipment/dagger"}
    ]
}"#;

#[tokio::test]
async fn get_class_resolves_every_placeholder_with_one_category_fetch() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(url("classes/wizard"), WIZARD_CLASS_BODY);
    transport.respond_json(url("equipment-categories/simple-weapons"), SIMPLE_WEAPONS_BODY);

    let wizard = client(&transport)
        .get_class("wizard")
        .await
        .expect("class decodes and resolves");

    assert_eq!(wizard.key, "wizard");
    assert_eq!(wizard.hit_die, 6);
    assert!(wizard.description.contains("scholarly magic-user"));
    assert_eq!(wizard.weapon_proficiencies.len(), 0);
    assert_eq!(wizard.tool_proficiencies.len(), 1);
    assert_eq!(wizard.tool_proficiencies[0].key, "daggers");
    assert_eq!(wizard.primary_abilities.len(), 1);
    assert_eq!(wizard.primary_abilities[0].key, "int");
    assert_eq!(wizard.starting_equipment.len(), 1);
    assert_eq!(wizard.starting_equipment[0].equipment.key, "spellbook");

    // Both placeholders pointed at simple-weapons; one fetch serves both.
    assert_eq!(
        transport.request_count(&url("equipment-categories/simple-weapons")),
        1
    );

    assert_eq!(wizard.starting_equipment_options.len(), 2);
    for choice in &wizard.starting_equipment_options {
        assert!(choice.is_fully_resolved(), "unresolved: {choice:?}");
    }

    // First choice: the crossbow bundle is untouched, the nested "any
    // simple weapon" choice is expanded in collaborator order.
    let first = &wizard.starting_equipment_options[0];
    let Some(OptionSource::Options(list)) = &first.from else {
        panic!("expected explicit options");
    };
    assert!(matches!(&list.options[0], ChoiceOption::Multiple(items) if items.len() == 2));
    let ChoiceOption::Nested(inner) = &list.options[1] else {
        panic!("expected the nested simple-weapon choice to survive");
    };
    let Some(OptionSource::Options(inner_list)) = &inner.from else {
        panic!("nested choice must be explicit after resolution");
    };
    let keys: Vec<&str> = inner_list
        .options
        .iter()
        .map(|o| match o {
            ChoiceOption::Reference(r) => r.key.as_str(),
            other => panic!("unexpected option {other:?}"),
        })
        .collect();
    assert_eq!(keys, vec!["club", "dagger"]);

    // Second choice was the bare category placeholder.
    let second = &wizard.starting_equipment_options[1];
    let Some(OptionSource::Options(second_list)) = &second.from else {
        panic!("expected explicit options");
    };
    assert_eq!(second_list.options.len(), 2);
}

#[tokio::test]
async fn get_class_fails_entirely_when_a_category_fetch_fails() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(url("classes/wizard"), WIZARD_CLASS_BODY);
    transport.respond_status(url("equipment-categories/simple-weapons"), 503);

    let err = client(&transport)
        .get_class("wizard")
        .await
        .expect_err("resolution failure must fail the class fetch");
    assert!(matches!(err, Error::UnexpectedStatus(503)), "got {err:?}");
}

#[tokio::test]
async fn get_class_level_maps_spellcasting_and_class_specific() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("classes/bard/levels/3"),
        r#"{
            "index": "bard-3",
            "level": 3,
            "ability_score_bonuses": 0,
            "prof_bonus": 2,
            "features": [
                {"index": "expertise-1", "name": "Expertise", "url": "/api/features/expertise-1"}
            ],
            "spellcasting": {
                "cantrips_known": 2,
                "spells_known": 6,
                "spell_slots_level_1": 4,
                "spell_slots_level_2": 2
            },
            "class_specific": {
                "bardic_inspiration_die": 6,
                "song_of_rest_die": 6,
                "magical_secrets_max_5": 0,
                "magical_secrets_max_7": 0,
                "magical_secrets_max_9": 0
            },
            "class": {"index": "bard", "name": "Bard", "url": "/api/classes/bard"}
        }"#,
    );

    let level = client(&transport)
        .get_class_level("bard", 3)
        .await
        .expect("level decodes");

    assert_eq!(level.level, 3);
    assert_eq!(level.proficiency_bonus, 2);
    let spellcasting = level.spellcasting.expect("bard casts");
    assert_eq!(spellcasting.spells_known, 6);
    assert_eq!(spellcasting.spell_slots, [4, 2, 0, 0, 0, 0, 0, 0, 0]);
    assert!(matches!(
        level.class_specific,
        Some(ClassSpecific::Bard {
            bardic_inspiration_die: 6,
            ..
        })
    ));
}

#[tokio::test]
async fn get_class_level_validates_its_inputs() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = client(&transport);

    let err = client.get_class_level("", 3).await.expect_err("empty key");
    assert!(matches!(err, Error::Config(_)), "got {err:?}");

    let err = client
        .get_class_level("bard", 0)
        .await
        .expect_err("zero level");
    assert!(matches!(err, Error::Config(_)), "got {err:?}");

    assert!(transport.requests().is_empty(), "no request should be made");
}

// ============================================================================
// Equipment polymorphism
// ============================================================================

#[tokio::test]
async fn weapons_decode_as_weapons() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("equipment/longsword"),
        r#"{
            "index": "longsword",
            "name": "Longsword",
            "cost": {"quantity": 15, "unit": "gp"},
            "weight": 3,
            "equipment_category": {"index": "weapon", "name": "Weapon", "url": "/api/equipment-categories/weapon"},
            "weapon_category": "Martial",
            "weapon_range": "Melee",
            "category_range": "Martial Melee",
            "damage": {"damage_dice": "1d8", "damage_type": {"index": "slashing", "name": "Slashing", "url": "/api/damage-types/slashing"}},
            "two_handed_damage": {"damage_dice": "1d10", "damage_type": {"index": "slashing", "name": "Slashing", "url": "/api/damage-types/slashing"}},
            "properties": [{"index": "versatile", "name": "Versatile", "url": "/api/weapon-properties/versatile"}]
        }"#,
    );

    let equipment = client(&transport)
        .get_equipment("longsword")
        .await
        .expect("weapon decodes");

    let Equipment::Weapon(weapon) = equipment else {
        panic!("expected a weapon, got {equipment:?}");
    };
    assert_eq!(weapon.key, "longsword");
    assert_eq!(weapon.weapon_category, "Martial");
    assert_eq!(weapon.damage.expect("damage").damage_dice, "1d8");
    assert_eq!(
        weapon.two_handed_damage.expect("versatile damage").damage_dice,
        "1d10"
    );
    assert_eq!(weapon.properties[0].key, "versatile");
}

#[tokio::test]
async fn armor_decodes_as_armor() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("equipment/chain-mail"),
        r#"{
            "index": "chain-mail",
            "name": "Chain Mail",
            "cost": {"quantity": 75, "unit": "gp"},
            "weight": 55,
            "equipment_category": {"index": "armor", "name": "Armor", "url": "/api/equipment-categories/armor"},
            "armor_category": "Heavy",
            "armor_class": {"base": 16, "dex_bonus": false},
            "str_minimum": 13,
            "stealth_disadvantage": true
        }"#,
    );

    let equipment = client(&transport)
        .get_equipment("chain-mail")
        .await
        .expect("armor decodes");

    let Equipment::Armor(armor) = equipment else {
        panic!("expected armor, got {equipment:?}");
    };
    assert_eq!(armor.armor_category, "Heavy");
    let armor_class = armor.armor_class.expect("armor class");
    assert_eq!(armor_class.base, 16);
    assert!(!armor_class.dex_bonus);
    assert!(armor.stealth_disadvantage);
}

#[tokio::test]
async fn everything_else_decodes_as_gear() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("equipment/torch"),
        r#"{
            "index": "torch",
            "name": "Torch",
            "cost": {"quantity": 1, "unit": "cp"},
            "weight": 1,
            "equipment_category": {"index": "adventuring-gear", "name": "Adventuring Gear", "url": "/api/equipment-categories/adventuring-gear"}
        }"#,
    );

    let equipment = client(&transport)
        .get_equipment("torch")
        .await
        .expect("gear decodes");

    let Equipment::Gear(gear) = equipment else {
        panic!("expected gear, got {equipment:?}");
    };
    assert_eq!(gear.key, "torch");
    assert_eq!(gear.cost.expect("cost").unit, "cp");
}

// ============================================================================
// Spells
// ============================================================================

#[tokio::test]
async fn spell_filter_intersects_class_and_level_in_class_order() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("spells?level=3"),
        r#"{"count": 3, "results": [
            {"index": "fireball", "name": "Fireball", "url": "/api/spells/fireball"},
            {"index": "fly", "name": "Fly", "url": "/api/spells/fly"},
            {"index": "revivify", "name": "Revivify", "url": "/api/spells/revivify"}
        ]}"#,
    );
    transport.respond_json(
        url("classes/wizard/spells"),
        r#"{"count": 3, "results": [
            {"index": "fly", "name": "Fly", "url": "/api/spells/fly"},
            {"index": "magic-missile", "name": "Magic Missile", "url": "/api/spells/magic-missile"},
            {"index": "fireball", "name": "Fireball", "url": "/api/spells/fireball"}
        ]}"#,
    );

    let spells = client(&transport)
        .list_spells(&SpellFilter::for_class("wizard").with_level(3))
        .await
        .expect("intersection succeeds");

    let keys: Vec<&str> = spells.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["fly", "fireball"]);
}

#[tokio::test]
async fn empty_class_filter_is_rejected() {
    let transport = Arc::new(ScriptedTransport::new());

    let err = client(&transport)
        .list_spells(&SpellFilter::for_class(""))
        .await
        .expect_err("empty class is invalid");
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[tokio::test]
async fn get_spell_maps_slot_level_damage() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("spells/fireball"),
        r#"{
            "index": "fireball",
            "name": "Fireball",
            "level": 3,
            "range": "150 feet",
            "ritual": false,
            "duration": "Instantaneous",
            "concentration": false,
            "casting_time": "1 action",
            "damage": {
                "damage_type": {"index": "fire", "name": "Fire", "url": "/api/damage-types/fire"},
                "damage_at_slot_level": {"3": "8d6", "4": "9d6"}
            },
            "dc": {"dc_type": {"index": "dex", "name": "DEX", "url": "/api/ability-scores/dex"}, "dc_success": "half"},
            "area_of_effect": {"type": "sphere", "size": 20},
            "school": {"index": "evocation", "name": "Evocation", "url": "/api/magic-schools/evocation"},
            "classes": [{"index": "wizard", "name": "Wizard", "url": "/api/classes/wizard"}]
        }"#,
    );

    let spell = client(&transport)
        .get_spell("fireball")
        .await
        .expect("spell decodes");

    assert_eq!(spell.level, 3);
    let damage = spell.damage.expect("fireball deals damage");
    assert_eq!(damage.damage_type.expect("typed").key, "fire");
    assert_eq!(damage.damage_at_slot_level.get(&3).map(String::as_str), Some("8d6"));
    assert_eq!(spell.dc.expect("dc").success, "half");
    assert_eq!(spell.area_of_effect.expect("aoe").size, 20);
}

// ============================================================================
// Monsters
// ============================================================================

#[tokio::test]
async fn monster_list_filter_becomes_a_query_parameter() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("monsters?challenge_rating=0.25"),
        r#"{"count": 1, "results": [
            {"index": "goblin", "name": "Goblin", "url": "/api/monsters/goblin"}
        ]}"#,
    );

    let monsters = client(&transport)
        .list_monsters_filtered(&dnd5e_api::MonsterFilter {
            challenge_rating: Some(0.25),
        })
        .await
        .expect("filtered list decodes");

    assert_eq!(monsters.len(), 1);
    assert_eq!(monsters[0].key, "goblin");
}

#[tokio::test]
async fn monster_armor_class_entries_are_summed() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("monsters/goblin"),
        r#"{
            "index": "goblin",
            "name": "Goblin",
            "size": "Small",
            "type": "humanoid",
            "alignment": "neutral evil",
            "armor_class": [{"type": "armor", "value": 13}, {"type": "shield", "value": 2}],
            "hit_points": 7,
            "hit_dice": "2d6",
            "speed": {"walk": "30 ft."},
            "strength": 8,
            "dexterity": 14,
            "constitution": 10,
            "intelligence": 10,
            "wisdom": 8,
            "charisma": 8,
            "proficiencies": [
                {"value": 6, "proficiency": {"index": "skill-stealth", "name": "Skill: Stealth", "url": "/api/proficiencies/skill-stealth"}}
            ],
            "condition_immunities": [],
            "senses": {"darkvision": "60 ft.", "passive_perception": 9},
            "languages": "Common, Goblin",
            "challenge_rating": 0.25,
            "xp": 50,
            "actions": [
                {
                    "name": "Scimitar",
                    "attack_bonus": 4,
                    "desc": "Melee Weapon Attack: +4 to hit.",
                    "damage": [{"damage_dice": "1d6+2", "damage_type": {"index": "slashing", "name": "Slashing", "url": "/api/damage-types/slashing"}}]
                }
            ],
            "image": "/api/images/monsters/goblin.png"
        }"#,
    );

    let goblin = client(&transport)
        .get_monster("goblin")
        .await
        .expect("monster decodes");

    assert_eq!(goblin.armor_class, 15);
    assert_eq!(goblin.speed.expect("speed").walk, "30 ft.");
    assert_eq!(goblin.senses.expect("senses").passive_perception, 9);
    assert_eq!(goblin.proficiencies[0].value, 6);
    assert_eq!(goblin.actions[0].damage[0].damage_dice, "1d6+2");
    assert_eq!(goblin.image_url, "/api/images/monsters/goblin.png");
}

// ============================================================================
// Backgrounds and fallbacks
// ============================================================================

#[tokio::test]
async fn background_list_falls_back_to_builtins_when_upstream_fails() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_status(url("backgrounds"), 404);

    let backgrounds = client(&transport)
        .list_backgrounds()
        .await
        .expect("fallback succeeds");

    assert_eq!(backgrounds.len(), 12);
    assert!(backgrounds.iter().any(|b| b.key == "acolyte"));
}

#[tokio::test]
async fn background_list_merges_api_and_builtins_without_duplicates() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("backgrounds"),
        r#"{"count": 1, "results": [
            {"index": "acolyte", "name": "Acolyte", "url": "/api/backgrounds/acolyte"}
        ]}"#,
    );

    let backgrounds = client(&transport)
        .list_backgrounds()
        .await
        .expect("merge succeeds");

    assert_eq!(backgrounds.len(), 12, "acolyte must not be duplicated");
    assert_eq!(backgrounds[0].key, "acolyte", "API results come first");
}

#[tokio::test]
async fn get_background_falls_back_to_builtin_data() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_status(url("backgrounds/criminal"), 404);

    let criminal = client(&transport)
        .get_background("criminal")
        .await
        .expect("builtin background");

    assert_eq!(criminal.name, "Criminal");
    assert_eq!(criminal.skill_proficiencies.len(), 2);
}

#[tokio::test]
async fn unknown_background_is_not_found() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_status(url("backgrounds/astronaut"), 404);

    let err = client(&transport)
        .get_background("astronaut")
        .await
        .expect_err("no such background");
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}

// ============================================================================
// Small entities
// ============================================================================

#[tokio::test]
async fn skills_and_proficiencies_map_their_kinds() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond_json(
        url("skills/athletics"),
        r#"{
            "index": "athletics",
            "name": "Athletics",
            "desc": ["Your Strength (Athletics) check covers climbing, jumping, and swimming."],
            "ability_score": {"index": "str", "name": "STR", "url": "/api/ability-scores/str"},
            "url": "/api/skills/athletics"
        }"#,
    );
    transport.respond_json(
        url("proficiencies/light-armor"),
        r#"{
            "index": "light-armor",
            "name": "Light Armor",
            "type": "ARMOR",
            "reference": {"index": "light-armor", "name": "Light Armor", "url": "/api/equipment-categories/light-armor"}
        }"#,
    );

    let api = client(&transport);

    let athletics = api.get_skill("athletics").await.expect("skill decodes");
    assert_eq!(athletics.kind, "skills");
    assert_eq!(athletics.ability_score.expect("ability").key, "str");

    let light_armor = api
        .get_proficiency("light-armor")
        .await
        .expect("proficiency decodes");
    assert_eq!(
        light_armor.kind,
        dnd5e_api::entities::ProficiencyKind::Armor
    );
    assert_eq!(light_armor.reference.expect("reference").key, "light-armor");
}
