use serde::{Deserialize, Serialize};

use super::{Choice, ReferenceItem};

/// A class feature gained at some level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub key: String,
    pub name: String,
    pub level: u32,
    pub class: Option<ReferenceItem>,
    /// Sub-feature selection carried by features like Fighting Style.
    pub subfeature_options: Option<Choice>,
}
