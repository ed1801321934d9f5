//! Build-time choice trees.
//!
//! The upstream API encodes "pick N of these" decisions (starting
//! equipment, skill proficiencies, languages) as a recursively nested,
//! dynamically tagged tree. This module is the typed model of that tree:
//! closed sum types, decoded once at the wire layer and never inspected
//! through string tags again. The `resolve` module turns partially
//! specified trees into fully enumerated ones.

use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// A decision point requiring selection of `choose` alternatives from an
/// option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// How many alternatives must be picked.
    pub choose: u32,
    /// Semantic tag such as `"equipment"` or `"proficiencies"`. Opaque to
    /// this crate apart from the resolver's equipment short-circuit.
    pub choice_type: String,
    /// Upstream presentation string, e.g.
    /// `"(a) a light crossbow and 20 bolts or (b) any simple weapon"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the alternatives come from. `None` mirrors upstream payloads
    /// that omit the `from` block entirely.
    pub from: Option<OptionSource>,
}

impl Choice {
    /// True when no equipment-category placeholder remains anywhere in
    /// this choice or its descendants.
    pub fn is_fully_resolved(&self) -> bool {
        match &self.from {
            None => true,
            Some(OptionSource::Category(_)) => false,
            Some(OptionSource::Options(list)) => {
                list.options.iter().all(ChoiceOption::is_fully_resolved)
            }
        }
    }
}

/// Where a choice's alternatives come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    /// The alternatives are fully enumerated.
    Options(OptionList),
    /// Placeholder naming an equipment category that must be expanded by
    /// the resolver. The reference has been observed missing in malformed
    /// upstream data; resolution leaves such a choice untouched.
    Category(Option<ReferenceItem>),
}

impl OptionSource {
    /// The enumerated options, if this source has been materialized.
    pub fn as_options(&self) -> Option<&OptionList> {
        match self {
            OptionSource::Options(list) => Some(list),
            OptionSource::Category(_) => None,
        }
    }
}

/// An ordered sequence of options. Order carries no selection semantics
/// but is preserved for display fidelity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OptionList {
    pub options: Vec<ChoiceOption>,
}

impl OptionList {
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }
}

/// One selectable alternative within a choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceOption {
    /// A single item, implicit quantity 1.
    Reference(ReferenceItem),
    /// A single item with an explicit quantity.
    CountedReference { count: u32, reference: ReferenceItem },
    /// A bundle taken together as one alternative. Order reflects the
    /// upstream presentation, e.g. "(a) a weapon and (b) ammunition".
    Multiple(Vec<ChoiceOption>),
    /// A sub-choice presented as one alternative among others.
    Nested(Box<Choice>),
}

impl ChoiceOption {
    /// True when no category placeholder remains below this option.
    pub fn is_fully_resolved(&self) -> bool {
        match self {
            ChoiceOption::Reference(_) | ChoiceOption::CountedReference { .. } => true,
            ChoiceOption::Multiple(items) => items.iter().all(ChoiceOption::is_fully_resolved),
            ChoiceOption::Nested(inner) => inner.is_fully_resolved(),
        }
    }
}
