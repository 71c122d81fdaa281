//! Generated method table.
//!
//! Instead of attaching methods to a type at runtime, every machine type
//! carries a table from method name to [`Behavior`]. The instance
//! dispatcher consults it by name.

use crate::builder::error::BuildError;
use crate::core::State;
use std::collections::{BTreeMap, BTreeSet};

pub const ACTUAL_STATE: &str = "actual_state";
pub const AS_ENUM: &str = "as_enum";
pub const FORCE_SET: &str = "force_set";
pub const IS: &str = "is_";
pub const CAN_BE: &str = "can_be_";
pub const SET: &str = "set_";

/// Name of the generated predicate for a state value.
pub fn is_method(value: &str) -> String {
    format!("{IS}{value}")
}

/// Name of the generated setter for a state value.
pub fn set_method(value: &str) -> String {
    format!("{SET}{value}")
}

/// Name of the generated transition check for a state value.
pub fn can_be_method(value: &str) -> String {
    format!("{CAN_BE}{value}")
}

/// What a generated or named method does when invoked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// `actual_state()`
    ActualState,
    /// `as_enum()`, alias of `actual_state()`
    AsEnum,
    /// `force_set(value)`
    ForceSet,
    /// `is_(value)`
    Is,
    /// `can_be_(value)`
    CanBe,
    /// `set_(value)`
    Set,
    /// `is_<value>()`
    IsState(State),
    /// `can_be_<value>()`
    CanBeState(State),
    /// `set_<value>()`
    SetState(State),
    /// Caller-named predicate, same as `is_<value>()`.
    NamedChecker(State),
    /// Caller-named transition, legal only from `sources`.
    NamedTransition {
        target: State,
        sources: BTreeSet<State>,
    },
}

impl Behavior {
    /// Whether the method takes a state identifier argument.
    pub fn takes_argument(&self) -> bool {
        matches!(self, Self::ForceSet | Self::Is | Self::CanBe | Self::Set)
    }
}

/// Method name to behavior, unique by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodTable {
    methods: BTreeMap<String, Behavior>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method, failing if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, behavior: Behavior) -> Result<(), BuildError> {
        let name = name.into();
        if self.methods.contains_key(&name) {
            return Err(BuildError::NameCollision { name });
        }
        self.methods.insert(name, behavior);
        Ok(())
    }

    /// Register the three per-state methods.
    pub fn insert_state(&mut self, state: &State) -> Result<(), BuildError> {
        self.insert(is_method(state.value()), Behavior::IsState(state.clone()))?;
        self.insert(set_method(state.value()), Behavior::SetState(state.clone()))?;
        self.insert(
            can_be_method(state.value()),
            Behavior::CanBeState(state.clone()),
        )
    }

    /// Register the methods every machine has regardless of its states.
    pub fn insert_fixed(&mut self) -> Result<(), BuildError> {
        self.insert(ACTUAL_STATE, Behavior::ActualState)?;
        self.insert(AS_ENUM, Behavior::AsEnum)?;
        self.insert(FORCE_SET, Behavior::ForceSet)?;
        self.insert(IS, Behavior::Is)?;
        self.insert(CAN_BE, Behavior::CanBe)?;
        self.insert(SET, Behavior::Set)
    }

    pub fn get(&self, name: &str) -> Option<&Behavior> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Method names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_methods_use_value() {
        let mut table = MethodTable::new();
        table.insert_state(&State::new("DRAFT", "draft")).unwrap();

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["can_be_draft", "is_draft", "set_draft"]);
    }

    #[test]
    fn duplicate_name_is_a_collision() {
        let mut table = MethodTable::new();
        table.insert("approve", Behavior::ActualState).unwrap();

        let err = table.insert("approve", Behavior::AsEnum).unwrap_err();
        assert!(matches!(err, BuildError::NameCollision { name } if name == "approve"));
        assert_eq!(table.get("approve"), Some(&Behavior::ActualState));
    }

    #[test]
    fn fixed_methods_are_registered() {
        let mut table = MethodTable::new();
        table.insert_fixed().unwrap();

        assert_eq!(table.len(), 6);
        for name in [ACTUAL_STATE, AS_ENUM, FORCE_SET, IS, CAN_BE, SET] {
            assert!(table.contains(name), "missing {name}");
        }
    }

    #[test]
    fn only_generic_methods_take_arguments() {
        let state = State::new("A", "a");
        assert!(Behavior::Set.takes_argument());
        assert!(Behavior::ForceSet.takes_argument());
        assert!(!Behavior::SetState(state.clone()).takes_argument());
        assert!(!Behavior::NamedChecker(state).takes_argument());
        assert!(!Behavior::ActualState.takes_argument());
    }

    #[test]
    fn empty_value_collides_with_generic_method() {
        let mut table = MethodTable::new();
        table.insert_fixed().unwrap();

        let err = table.insert_state(&State::new("BLANK", "")).unwrap_err();
        assert!(matches!(err, BuildError::NameCollision { name } if name == "is_"));
    }
}
