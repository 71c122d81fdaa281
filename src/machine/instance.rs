//! Machine instance: the current state plus the typed operations on it.

use crate::builder::MachineDefinition;
use crate::core::{Identifier, State, StateHistory, StateTransition, UnknownState};
use crate::machine::error::TransitionError;
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;

/// One machine instance.
///
/// Holds the current state and a history of applied transitions. The
/// definition is shared with every other instance of the same machine type
/// and is never mutated.
#[derive(Clone, Debug)]
pub struct Machine {
    definition: Arc<MachineDefinition>,
    origin: State,
    current: State,
    history: StateHistory,
}

impl Machine {
    pub(crate) fn new(definition: Arc<MachineDefinition>, initial: State) -> Self {
        Self {
            definition,
            origin: initial.clone(),
            current: initial,
            history: StateHistory::new(),
        }
    }

    /// Current canonical state.
    pub fn actual_state(&self) -> &State {
        &self.current
    }

    /// Alias of [`actual_state`](Self::actual_state).
    pub fn as_enum(&self) -> &State {
        &self.current
    }

    /// Whether the machine is currently in the given state.
    ///
    /// Unknown identifiers are an error, not `false`.
    pub fn is<'a, I>(&self, identifier: I) -> Result<bool, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let state = self.translate(identifier)?;
        Ok(self.current == state)
    }

    /// Whether `set` to the given state would succeed from here.
    pub fn can_be<'a, I>(&self, identifier: I) -> Result<bool, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let target = self.translate(identifier)?;
        Ok(self.definition.allows(&self.current, &target))
    }

    /// Move to the given state if the transition is legal.
    ///
    /// On failure the machine stays where it was.
    pub fn set<'a, I>(&mut self, identifier: I) -> Result<(), TransitionError>
    where
        I: Into<Identifier<'a>>,
    {
        let target = self.translate(identifier)?;
        self.set_state(target)
    }

    /// Move to the given state unconditionally.
    ///
    /// Only identifier translation can fail; the transition graph is not
    /// consulted.
    pub fn force_set<'a, I>(&mut self, identifier: I) -> Result<(), UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        let target = self.translate(identifier)?;
        self.apply(target, true);
        Ok(())
    }

    /// History of transitions applied to this instance.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// States visited so far, starting with the state the instance was
    /// created in.
    pub fn path(&self) -> Vec<&State> {
        if self.history.is_empty() {
            vec![&self.origin]
        } else {
            self.history.get_path()
        }
    }

    /// Targets reachable from the current state through `set`.
    pub fn available_transitions(&self) -> Vec<&State> {
        self.definition
            .catalog()
            .iter()
            .filter(|target| self.definition.allows(&self.current, target))
            .collect()
    }

    pub fn definition(&self) -> &MachineDefinition {
        &self.definition
    }

    pub(crate) fn shared_definition(&self) -> Arc<MachineDefinition> {
        Arc::clone(&self.definition)
    }

    pub(crate) fn set_state(&mut self, target: State) -> Result<(), TransitionError> {
        if !self.definition.allows(&self.current, &target) {
            return Err(self.rejected(&target));
        }
        self.apply(target, false);
        Ok(())
    }

    /// Named transitions are legal only from their configured sources,
    /// whatever the completeness flag says.
    pub(crate) fn fire(
        &mut self,
        target: &State,
        sources: &BTreeSet<State>,
    ) -> Result<(), TransitionError> {
        if !sources.contains(&self.current) {
            return Err(self.rejected(target));
        }
        self.apply(target.clone(), false);
        Ok(())
    }

    fn translate<'a, I>(&self, identifier: I) -> Result<State, UnknownState>
    where
        I: Into<Identifier<'a>>,
    {
        self.definition.translator().translate(identifier)
    }

    fn rejected(&self, target: &State) -> TransitionError {
        TransitionError::InvalidTransition {
            from: self.current.value().to_string(),
            to: target.value().to_string(),
        }
    }

    fn apply(&mut self, target: State, forced: bool) {
        tracing::debug!(from = %self.current, to = %target, forced, "State changed");
        let transition = StateTransition {
            from: self.current.clone(),
            to: target.clone(),
            timestamp: Utc::now(),
            forced,
        };
        self.history.push(transition);
        self.current = target;
    }
}
