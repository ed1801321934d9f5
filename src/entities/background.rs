use serde::{Deserialize, Serialize};

use super::{Choice, ReferenceItem, StartingEquipment};

/// A character background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub key: String,
    pub name: String,
    pub skill_proficiencies: Vec<ReferenceItem>,
    pub language_options: Option<Choice>,
    pub starting_equipment: Vec<StartingEquipment>,
    pub starting_equipment_options: Vec<Choice>,
    pub feature: Option<BackgroundFeature>,
    pub personality_traits: Option<Choice>,
    pub ideals: Option<Choice>,
    pub bonds: Option<Choice>,
    pub flaws: Option<Choice>,
}

/// The narrative feature a background grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFeature {
    pub name: String,
    pub description: String,
}
