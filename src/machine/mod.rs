//! Machine types and their instances.
//!
//! A [`MachineType`] wraps a validated definition behind an `Arc`; it is
//! cheap to clone and safe to share across threads. Each call to
//! [`MachineType::instantiate`] produces an independent [`Machine`] that
//! owns its current state.

mod dispatch;
mod error;
mod instance;

pub use dispatch::Outcome;
pub use error::TransitionError;
pub use instance::Machine;

use crate::builder::{validate, Behavior, BuildError, MachineConfig, MachineDefinition};
use crate::core::{Identifier, State, StateCatalog, TransitionGraph, UnknownState};
use std::sync::Arc;

/// A validated machine type, shared by all of its instances.
#[derive(Clone, Debug)]
pub struct MachineType {
    definition: Arc<MachineDefinition>,
}

impl MachineType {
    /// Validate `config` and wrap the resulting definition.
    pub fn from_config(config: &MachineConfig) -> Result<Self, BuildError> {
        let definition = validate(config)?;
        Ok(Self {
            definition: Arc::new(definition),
        })
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Self::from_config(&MachineConfig::from_json(json)?)
    }

    /// New instance in the configured initial state.
    pub fn instantiate(&self) -> Machine {
        Machine::new(
            Arc::clone(&self.definition),
            self.definition.initial_state().clone(),
        )
    }

    /// New instance starting in another catalog state.
    pub fn instantiate_in<'a, I>(&self, identifier: I) -> Result<Machine, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let state = self.definition.translator().translate(identifier)?;
        Ok(Machine::new(Arc::clone(&self.definition), state))
    }

    pub fn definition(&self) -> &MachineDefinition {
        &self.definition
    }

    pub fn states(&self) -> &StateCatalog {
        self.definition.catalog()
    }

    pub fn initial_state(&self) -> &State {
        self.definition.initial_state()
    }

    pub fn transitions(&self) -> &TransitionGraph {
        self.definition.graph()
    }

    pub fn is_complete(&self) -> bool {
        self.definition.is_complete()
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.definition.methods().names()
    }

    pub fn behavior(&self, method: &str) -> Option<&Behavior> {
        self.definition.methods().get(method)
    }

    /// States `set` may move to from `from`, in catalog order.
    pub fn allowed_targets<'a, I>(&self, from: I) -> Result<Vec<&State>, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let from = self.definition.translator().translate(from)?;
        Ok(self
            .states()
            .iter()
            .filter(|to| self.definition.allows(&from, to))
            .collect())
    }
}
