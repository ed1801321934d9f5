//! Choice resolution.
//!
//! Starting-equipment choices arrive from the upstream API with two kinds
//! of sources: fully enumerated option arrays, and equipment-category
//! placeholders ("any simple weapon") that only name a category. The
//! resolver walks a choice tree depth-first and replaces every placeholder
//! with the category's member list, fetched through a [`CategoryLookup`]
//! capability, so consumers only ever see explicit option lists.
//!
//! Resolution is functional: the input tree is consumed and a new tree is
//! returned, so a failed pass cannot leave a half-rewritten tree behind.
//! Category results are memoized for the lifetime of one `Resolver` value;
//! a tree with five "simple-weapons" placeholders costs one lookup.

use std::collections::HashMap;

use async_recursion::async_recursion;
use async_trait::async_trait;

use crate::entities::{Choice, ChoiceOption, OptionList, OptionSource, ReferenceItem};
use crate::error::Error;

/// Maximum choice nesting accepted before resolution fails. Observed data
/// nests two or three levels; the guard exists because the tree is
/// upstream-controlled input.
pub const MAX_CHOICE_DEPTH: usize = 32;

/// The only choice type whose sources carry category placeholders.
const EQUIPMENT_CHOICE_TYPE: &str = "equipment";

/// Capability to enumerate the members of an equipment category.
///
/// Implemented by [`Dnd5eClient`](crate::Dnd5eClient) against the live
/// API; tests substitute an in-memory table. Items must come back in a
/// stable order — the resolver preserves it as presentation order.
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn list_items_in_category(&self, key: &str) -> Result<Vec<ReferenceItem>, Error>;
}

/// A single resolution pass over one or more choice trees.
///
/// Create one per batch of choices that should share category lookups;
/// drop it when done. The memo lives as long as the resolver, so separate
/// passes do not share fetches.
pub struct Resolver<'a, L: CategoryLookup + ?Sized> {
    lookup: &'a L,
    fetched: HashMap<String, Vec<ReferenceItem>>,
}

impl<'a, L: CategoryLookup + ?Sized> Resolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            fetched: HashMap::new(),
        }
    }

    /// Resolve one choice. Absent input stays absent; this is not an
    /// error, many entities simply have no options to offer.
    pub async fn resolve_choice(&mut self, choice: Option<Choice>) -> Result<Option<Choice>, Error> {
        match choice {
            None => Ok(None),
            Some(choice) => self.resolve(choice, 0).await.map(Some),
        }
    }

    /// Resolve a list of choices element-wise, left to right. Any lookup
    /// failure aborts the whole list; no partially resolved output.
    pub async fn resolve_choices(&mut self, choices: Vec<Choice>) -> Result<Vec<Choice>, Error> {
        let mut out = Vec::with_capacity(choices.len());
        for choice in choices {
            out.push(self.resolve(choice, 0).await?);
        }
        Ok(out)
    }

    #[async_recursion]
    async fn resolve(&mut self, mut choice: Choice, depth: usize) -> Result<Choice, Error> {
        if depth > MAX_CHOICE_DEPTH {
            return Err(Error::ChoiceDepthExceeded {
                limit: MAX_CHOICE_DEPTH,
            });
        }

        // Placeholders only occur inside equipment choices; every other
        // choice type passes through verbatim.
        if choice.choice_type != EQUIPMENT_CHOICE_TYPE {
            return Ok(choice);
        }

        choice.from = match choice.from {
            None => None,
            Some(OptionSource::Options(list)) => {
                let mut options = Vec::with_capacity(list.options.len());
                for option in list.options {
                    options.push(self.resolve_option(option, depth).await?);
                }
                Some(OptionSource::Options(OptionList::new(options)))
            }
            // Placeholder without a category reference: malformed upstream
            // data, deliberately passed through untouched.
            Some(OptionSource::Category(None)) => Some(OptionSource::Category(None)),
            Some(OptionSource::Category(Some(category))) => {
                let options = self
                    .category_items(&category.key)
                    .await?
                    .into_iter()
                    .map(ChoiceOption::Reference)
                    .collect();
                // Retagged as explicit so a second pass is a no-op.
                Some(OptionSource::Options(OptionList::new(options)))
            }
        };

        Ok(choice)
    }

    #[async_recursion]
    async fn resolve_option(
        &mut self,
        option: ChoiceOption,
        depth: usize,
    ) -> Result<ChoiceOption, Error> {
        match option {
            ChoiceOption::Nested(inner) => Ok(ChoiceOption::Nested(Box::new(
                self.resolve(*inner, depth + 1).await?,
            ))),
            // "multiple" wraps bundle members, not a sub-choice: recurse
            // only into members that are themselves nested choices.
            ChoiceOption::Multiple(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(match item {
                        ChoiceOption::Nested(inner) => ChoiceOption::Nested(Box::new(
                            self.resolve(*inner, depth + 1).await?,
                        )),
                        other => other,
                    });
                }
                Ok(ChoiceOption::Multiple(out))
            }
            other => Ok(other),
        }
    }

    async fn category_items(&mut self, key: &str) -> Result<Vec<ReferenceItem>, Error> {
        if let Some(items) = self.fetched.get(key) {
            return Ok(items.clone());
        }

        tracing::debug!(category = key, "expanding equipment category");
        let items = self.lookup.list_items_in_category(key).await?;
        self.fetched.insert(key.to_string(), items.clone());
        Ok(items)
    }
}
