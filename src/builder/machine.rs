//! Builder for constructing machine types.

use crate::builder::config::{FromStates, MachineConfig, NamedChecker, NamedTransition};
use crate::builder::error::BuildError;
use crate::core::{State, StateCatalog};
use crate::machine::MachineType;

/// Builder for constructing machine types with a fluent API.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::MachineBuilder;
///
/// let orders = MachineBuilder::new()
///     .state("PENDING", "pending")
///     .state("ACTIVE", "active")
///     .state("CLOSED", "closed")
///     .initial("pending")
///     .transition("active", ["closed"])
///     .named_transition_from("approve", "active", "pending")
///     .build()
///     .unwrap();
///
/// let mut order = orders.instantiate();
/// assert!(!order.can_be("closed").unwrap());
/// order.call("approve").unwrap();
/// assert!(order.is("active").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    config: MachineConfig,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self { config }
    }

    /// Declare one state.
    pub fn state(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.states.push(State::new(name, value));
        self
    }

    /// Replace the whole catalog.
    pub fn states(mut self, catalog: StateCatalog) -> Self {
        self.config.states = catalog;
        self
    }

    /// Set the initial state value (required).
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.config.initial_state = Some(value.into());
        self
    }

    /// Allow `from` to move to each of `targets`.
    ///
    /// Repeated calls for the same source accumulate targets.
    pub fn transition<I, T>(mut self, from: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config
            .transitions
            .entry(from.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
        self
    }

    /// Add a named transition allowed from every state.
    pub fn named_transition(mut self, method: impl Into<String>, target: impl Into<String>) -> Self {
        self.config
            .named_transitions
            .push(NamedTransition::new(method, target));
        self
    }

    /// Add a named transition allowed only from the given states.
    pub fn named_transition_from(
        mut self,
        method: impl Into<String>,
        target: impl Into<String>,
        from: impl Into<FromStates>,
    ) -> Self {
        self.config
            .named_transitions
            .push(NamedTransition::new(method, target).from(from));
        self
    }

    /// Add a named predicate for one state.
    pub fn named_checker(mut self, method: impl Into<String>, state: impl Into<String>) -> Self {
        self.config
            .named_checkers
            .push(NamedChecker::new(method, state));
        self
    }

    /// Override the default completeness policy.
    pub fn complete(mut self, complete: bool) -> Self {
        self.config.complete = Some(complete);
        self
    }

    /// Configuration assembled so far.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Validate and build the machine type.
    pub fn build(self) -> Result<MachineType, BuildError> {
        MachineType::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> MachineBuilder {
        MachineBuilder::new()
            .state("PENDING", "pending")
            .state("ACTIVE", "active")
            .state("CLOSED", "closed")
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = builder().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().initial("pending").build();
        assert!(matches!(result, Err(BuildError::InvalidCatalog { .. })));
    }

    #[test]
    fn transitions_accumulate_per_source() {
        let builder = builder()
            .transition("pending", ["active"])
            .transition("pending", vec!["closed".to_string()]);

        assert_eq!(
            builder.config().transitions["pending"],
            vec!["active".to_string(), "closed".to_string()]
        );
    }

    #[test]
    fn fluent_api_builds_machine_type() {
        let machine_type = builder()
            .initial("pending")
            .named_checker("is_open", "active")
            .named_transition("close", "closed")
            .complete(true)
            .build()
            .unwrap();

        assert_eq!(machine_type.initial_state().value(), "pending");
        assert!(machine_type.is_complete());
        assert!(machine_type.behavior("is_open").is_some());
    }

    #[test]
    fn builder_from_config_round_trips() {
        let config = builder().initial("active").config().clone();
        let machine_type = MachineBuilder::from_config(config).build().unwrap();
        assert_eq!(machine_type.initial_state().value(), "active");
    }
}
