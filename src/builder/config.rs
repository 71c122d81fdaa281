//! Definition-time configuration surface.
//!
//! A [`MachineConfig`] is plain data: raw string identifiers that have not
//! been checked against the catalog yet. It can be written literally,
//! assembled with [`MachineBuilder`](super::MachineBuilder), or parsed from
//! JSON.

use crate::builder::error::BuildError;
use crate::core::StateCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw machine configuration.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "states": [
///         {"name": "PENDING", "value": "pending"},
///         {"name": "ACTIVE", "value": "active"}
///     ],
///     "initial_state": "pending",
///     "named_transitions": [
///         {"method": "approve", "target": "active", "from": "pending"}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(config.states.len(), 2);
/// assert_eq!(config.named_transitions[0].method, "approve");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    pub states: StateCatalog,

    #[serde(default)]
    pub initial_state: Option<String>,

    /// Source value to target values.
    #[serde(default)]
    pub transitions: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub named_transitions: Vec<NamedTransition>,

    #[serde(default)]
    pub named_checkers: Vec<NamedChecker>,

    /// Explicit completeness; `None` applies the default policy.
    #[serde(default)]
    pub complete: Option<bool>,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether any transition constraint was supplied.
    ///
    /// An empty transition map counts as "not supplied". Named checkers
    /// are not constraints.
    pub fn has_transition_constraints(&self) -> bool {
        !self.transitions.is_empty() || !self.named_transitions.is_empty()
    }
}

/// A caller-named method that moves the machine to `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedTransition {
    pub method: String,
    pub target: String,
    /// Allowed source states; `None` means every state.
    ///
    /// In JSON an omitted `from` means every state, while an explicit
    /// `null` means no state at all (same as `[]`).
    #[serde(
        default,
        deserialize_with = "explicit_from",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<FromStates>,
}

/// Only called when `from` is present, so `null` maps to an empty list.
fn explicit_from<'de, D>(deserializer: D) -> Result<Option<FromStates>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let from = Option::<FromStates>::deserialize(deserializer)?;
    Ok(Some(from.unwrap_or(FromStates::Many(Vec::new()))))
}

impl NamedTransition {
    /// A transition allowed from every state.
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            from: None,
        }
    }

    /// Restrict the transition to the given source states.
    pub fn from(mut self, from: impl Into<FromStates>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// Source restriction of a named transition: one value or a list.
///
/// An empty list is accepted and leaves the transition with no legal
/// source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FromStates {
    One(String),
    Many(Vec<String>),
}

impl FromStates {
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::One(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FromStates {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for FromStates {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for FromStates {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for FromStates {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FromStates {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// A caller-named predicate equivalent to `is_<state>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedChecker {
    pub method: String,
    pub state: String,
}

impl NamedChecker {
    pub fn new(method: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            state: state.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = MachineConfig::from_json(
            r#"{"states": [{"name": "ON", "value": "on"}], "initial_state": "on"}"#,
        )
        .unwrap();

        assert!(config.transitions.is_empty());
        assert!(config.named_transitions.is_empty());
        assert!(config.named_checkers.is_empty());
        assert_eq!(config.complete, None);
        assert!(!config.has_transition_constraints());
    }

    #[test]
    fn from_states_accepts_single_value_or_list() {
        let one: NamedTransition =
            serde_json::from_str(r#"{"method": "go", "target": "b", "from": "a"}"#).unwrap();
        let many: NamedTransition =
            serde_json::from_str(r#"{"method": "go", "target": "b", "from": ["a", "c"]}"#)
                .unwrap();
        let all: NamedTransition =
            serde_json::from_str(r#"{"method": "go", "target": "b"}"#).unwrap();

        assert_eq!(one.from.unwrap().values(), vec!["a"]);
        assert_eq!(many.from.unwrap().values(), vec!["a", "c"]);
        assert!(all.from.is_none());
    }

    #[test]
    fn null_from_means_no_source_state() {
        let named: NamedTransition =
            serde_json::from_str(r#"{"method": "go", "target": "b", "from": null}"#).unwrap();

        assert_eq!(named.from, Some(FromStates::Many(vec![])));
        assert!(named.from.unwrap().values().is_empty());
    }

    #[test]
    fn unrestricted_transition_omits_from_in_json() {
        let json = serde_json::to_string(&NamedTransition::new("go", "b")).unwrap();
        assert_eq!(json, r#"{"method":"go","target":"b"}"#);

        let back: NamedTransition = serde_json::from_str(&json).unwrap();
        assert!(back.from.is_none());
    }

    #[test]
    fn states_are_mandatory_in_json() {
        let result = MachineConfig::from_json(r#"{"initial_state": "on"}"#);
        assert!(matches!(result, Err(BuildError::Config(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = MachineConfig::from_json(
            r#"{"states": [], "initial_state": "on", "transitons": {}}"#,
        );
        assert!(matches!(result, Err(BuildError::Config(_))));
    }

    #[test]
    fn empty_transition_map_is_not_a_constraint() {
        let mut config = MachineConfig::default();
        config.named_checkers.push(NamedChecker::new("is_live", "on"));
        assert!(!config.has_transition_constraints());

        config.transitions.insert("on".into(), vec![]);
        assert!(config.has_transition_constraints());
    }

    #[test]
    fn config_survives_json() {
        let mut config = MachineConfig::default();
        config.initial_state = Some("on".into());
        config
            .named_transitions
            .push(NamedTransition::new("shutdown", "off").from(["on"]));

        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }
}
