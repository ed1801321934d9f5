//! Wire decoding for choice trees.
//!
//! Choices arrive as recursively nested objects tagged by two string
//! discriminators: `option_set_type` on the source and `option_type` on
//! each option. Dispatch happens here, once, into the closed sum types of
//! `entities::choice`. Unrecognized discriminators degrade to an absent
//! node instead of failing the surrounding tree; upstream adds option
//! kinds faster than clients ship.

use serde::Deserialize;

use super::ApiReference;
use crate::entities::{Choice, ChoiceOption, OptionList, OptionSource};

const OPTION_SET_ARRAY: &str = "options_array";
const OPTION_SET_CATEGORY: &str = "equipment_category";

const OPTION_REFERENCE: &str = "reference";
const OPTION_COUNTED_REFERENCE: &str = "counted_reference";
const OPTION_MULTIPLE: &str = "multiple";
const OPTION_CHOICE: &str = "choice";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiChoice {
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub choose: u32,
    #[serde(default, rename = "type")]
    pub choice_type: String,
    #[serde(default)]
    pub from: Option<ApiOptionSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiOptionSet {
    #[serde(default)]
    pub option_set_type: String,
    #[serde(default)]
    pub equipment_category: Option<ApiReference>,
    #[serde(default)]
    pub options: Vec<ApiOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiOption {
    #[serde(default)]
    pub option_type: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub of: Option<ApiReference>,
    #[serde(default)]
    pub item: Option<ApiReference>,
    #[serde(default)]
    pub items: Vec<ApiOption>,
    #[serde(default)]
    pub choice: Option<Box<ApiChoice>>,
}

impl ApiChoice {
    pub fn into_choice(self) -> Choice {
        Choice {
            choose: self.choose,
            choice_type: self.choice_type,
            description: self.desc,
            from: self.from.and_then(ApiOptionSet::into_source),
        }
    }
}

impl ApiOptionSet {
    fn into_source(self) -> Option<OptionSource> {
        match self.option_set_type.as_str() {
            OPTION_SET_ARRAY => {
                let options = self
                    .options
                    .into_iter()
                    .filter_map(ApiOption::into_option)
                    .collect();
                Some(OptionSource::Options(OptionList::new(options)))
            }
            OPTION_SET_CATEGORY => Some(OptionSource::Category(
                self.equipment_category.map(ApiReference::into_item),
            )),
            other => {
                tracing::warn!(discriminator = other, "unrecognized option set kind");
                None
            }
        }
    }
}

impl ApiOption {
    /// Decode one option; `None` for discriminators this crate does not
    /// know, or for known discriminators missing their payload.
    fn into_option(self) -> Option<ChoiceOption> {
        match self.option_type.as_str() {
            OPTION_REFERENCE => self
                .item
                .map(|item| ChoiceOption::Reference(item.into_item())),
            OPTION_COUNTED_REFERENCE => self.of.map(|of| ChoiceOption::CountedReference {
                count: self.count.max(1),
                reference: of.into_item(),
            }),
            OPTION_MULTIPLE => Some(ChoiceOption::Multiple(
                self.items
                    .into_iter()
                    .filter_map(ApiOption::into_option)
                    .collect(),
            )),
            OPTION_CHOICE => self
                .choice
                .map(|choice| ChoiceOption::Nested(Box::new(choice.into_choice()))),
            other => {
                tracing::warn!(discriminator = other, "unrecognized option kind");
                None
            }
        }
    }
}

/// Decode an optional wire choice; absent stays absent.
pub(crate) fn choice_from_wire(raw: Option<ApiChoice>) -> Option<Choice> {
    raw.map(ApiChoice::into_choice)
}

/// Decode a list of wire choices, preserving order.
pub(crate) fn choices_from_wire(raw: Vec<ApiChoice>) -> Vec<Choice> {
    raw.into_iter().map(ApiChoice::into_choice).collect()
}
