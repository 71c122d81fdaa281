//! State catalog: the closed enumeration a machine can occupy.
//!
//! A [`State`] pairs a symbolic name with a string value. The value is what
//! generated method names are derived from (`is_<value>`, `set_<value>`,
//! `can_be_<value>`) and what raw identifiers are matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One canonical member of a state catalog.
///
/// States are plain values: two states are equal when both their name and
/// their value are equal.
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
///
/// let draft = State::new("DRAFT", "draft");
/// assert_eq!(draft.name(), "DRAFT");
/// assert_eq!(draft.value(), "draft");
/// assert_eq!(draft.to_string(), "draft");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    name: String,
    value: String,
}

impl State {
    /// Create a state from its symbolic name and string value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Symbolic name, e.g. `DRAFT`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// String value, e.g. `draft`.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Ordered, closed list of states declared for one machine type.
///
/// The catalog itself does not validate anything; emptiness, empty values
/// and duplicates are rejected when a machine type is built from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCatalog {
    states: Vec<State>,
}

impl StateCatalog {
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// Build a catalog from `(name, value)` pairs.
    ///
    /// ```rust
    /// use statecraft::core::StateCatalog;
    ///
    /// let catalog = StateCatalog::from_pairs([("OPEN", "open"), ("CLOSED", "closed")]);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            states: pairs
                .into_iter()
                .map(|(name, value)| State::new(name, value))
                .collect(),
        }
    }

    pub fn push(&mut self, state: State) {
        self.states.push(state);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// Find a state by its symbolic name.
    pub fn by_name(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == name)
    }
}

impl<'a> IntoIterator for &'a StateCatalog {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl FromIterator<State> for StateCatalog {
    fn from_iter<T: IntoIterator<Item = State>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
