//! Identifier translation.
//!
//! Every identifier coming from outside (a raw string value or a `State`
//! taken from somewhere else) goes through [`Translator::translate`] before
//! it is compared or used as a graph key.

use super::state::{State, StateCatalog};
use std::collections::HashMap;
use thiserror::Error;

/// An identifier did not match any state in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Value '{identifier}' doesn't match any state")]
pub struct UnknownState {
    pub identifier: String,
}

/// Anything that can name a state: a canonical `State` or its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    State(&'a State),
    Value(&'a str),
}

impl Identifier<'_> {
    fn describe(&self) -> String {
        match self {
            Self::State(state) => format!("{}({})", state.name(), state.value()),
            Self::Value(value) => (*value).to_string(),
        }
    }
}

impl<'a> From<&'a State> for Identifier<'a> {
    fn from(state: &'a State) -> Self {
        Self::State(state)
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(value: &'a str) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(value: &'a String) -> Self {
        Self::Value(value.as_str())
    }
}

/// Resolves identifiers against a fixed catalog.
///
/// Matching is exact and case-sensitive on the state value. A `State`
/// passed in directly must be a member of the catalog.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateCatalog, Translator};
///
/// let catalog = StateCatalog::from_pairs([("OPEN", "open"), ("CLOSED", "closed")]);
/// let translator = Translator::new(&catalog);
///
/// assert_eq!(translator.translate("open").unwrap(), State::new("OPEN", "open"));
/// assert!(translator.translate("Open").is_err());
/// assert!(translator.translate(&State::new("OPEN", "other")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    by_value: HashMap<String, State>,
}

impl Translator {
    /// Build the lookup table. When values repeat, the first state wins;
    /// catalogs with repeated values never make it past validation.
    pub fn new(catalog: &StateCatalog) -> Self {
        let mut by_value = HashMap::with_capacity(catalog.len());
        for state in catalog {
            by_value
                .entry(state.value().to_string())
                .or_insert_with(|| state.clone());
        }
        Self { by_value }
    }

    pub fn translate<'a, I>(&self, identifier: I) -> Result<State, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let identifier = identifier.into();
        let found = match identifier {
            Identifier::State(state) => self
                .by_value
                .get(state.value())
                .filter(|known| *known == state),
            Identifier::Value(value) => self.by_value.get(value),
        };

        found.cloned().ok_or_else(|| UnknownState {
            identifier: identifier.describe(),
        })
    }
}
