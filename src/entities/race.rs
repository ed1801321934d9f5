use serde::{Deserialize, Serialize};

use super::{Choice, ReferenceItem};

/// A playable race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub key: String,
    pub name: String,
    pub speed: u32,
    pub size: String,
    pub size_description: String,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub languages: Vec<ReferenceItem>,
    pub traits: Vec<ReferenceItem>,
    pub subraces: Vec<ReferenceItem>,
    pub starting_proficiencies: Vec<ReferenceItem>,
    pub starting_proficiency_options: Option<Choice>,
    pub language_options: Option<Choice>,
}

/// A fixed bonus to one ability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonus {
    pub ability_score: ReferenceItem,
    pub bonus: i32,
}
