//! Name-based dispatch over the generated method table.

use crate::builder::Behavior;
use crate::core::State;
use crate::machine::error::TransitionError;
use crate::machine::instance::Machine;

/// Value returned by a dispatched method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `actual_state` / `as_enum`
    State(State),
    /// Predicates (`is_*`, `can_be_*`, named checkers)
    Bool(bool),
    /// Setters and named transitions
    Done,
}

impl Outcome {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_state(&self) -> Option<&State> {
        match self {
            Self::State(state) => Some(state),
            _ => None,
        }
    }
}

impl Machine {
    /// Invoke a generated or named method by name.
    ///
    /// `argument` is the state value for the generic methods (`is_`,
    /// `can_be_`, `set_`, `force_set`) and must be `None` for everything
    /// else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statecraft::builder::MachineBuilder;
    /// use statecraft::machine::Outcome;
    ///
    /// let switches = MachineBuilder::new()
    ///     .state("ON", "on")
    ///     .state("OFF", "off")
    ///     .initial("off")
    ///     .named_checker("is_lit", "on")
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut switch = switches.instantiate();
    /// assert_eq!(switch.invoke("set_", Some("on")).unwrap(), Outcome::Done);
    /// assert_eq!(switch.call("is_lit").unwrap(), Outcome::Bool(true));
    /// ```
    pub fn invoke(
        &mut self,
        method: &str,
        argument: Option<&str>,
    ) -> Result<Outcome, TransitionError> {
        let definition = self.shared_definition();
        let behavior = definition
            .methods()
            .get(method)
            .ok_or_else(|| TransitionError::UnknownMethod {
                name: method.to_string(),
            })?;

        if !behavior.takes_argument() && argument.is_some() {
            return Err(TransitionError::UnexpectedArgument {
                method: method.to_string(),
            });
        }
        let required = || {
            argument.ok_or_else(|| TransitionError::MissingArgument {
                method: method.to_string(),
            })
        };

        match behavior {
            Behavior::ActualState | Behavior::AsEnum => {
                Ok(Outcome::State(self.actual_state().clone()))
            }
            Behavior::Is => Ok(Outcome::Bool(self.is(required()?)?)),
            Behavior::CanBe => Ok(Outcome::Bool(self.can_be(required()?)?)),
            Behavior::Set => {
                self.set(required()?)?;
                Ok(Outcome::Done)
            }
            Behavior::ForceSet => {
                self.force_set(required()?)?;
                Ok(Outcome::Done)
            }
            Behavior::IsState(state) | Behavior::NamedChecker(state) => {
                Ok(Outcome::Bool(self.actual_state() == state))
            }
            Behavior::CanBeState(state) => Ok(Outcome::Bool(
                definition.allows(self.actual_state(), state),
            )),
            Behavior::SetState(state) => {
                self.set_state(state.clone())?;
                Ok(Outcome::Done)
            }
            Behavior::NamedTransition { target, sources } => {
                self.fire(target, sources)?;
                Ok(Outcome::Done)
            }
        }
    }

    /// Invoke a method that takes no argument.
    pub fn call(&mut self, method: &str) -> Result<Outcome, TransitionError> {
        self.invoke(method, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::machine::MachineType;

    fn tasks() -> MachineType {
        MachineBuilder::new()
            .state("PENDING", "pending")
            .state("ACTIVE", "active")
            .state("CLOSED", "closed")
            .initial("pending")
            .transition("pending", ["closed"])
            .transition("active", ["closed"])
            .named_transition_from("approve", "active", "pending")
            .named_checker("is_open", "active")
            .build()
            .unwrap()
    }

    #[test]
    fn actual_state_and_alias_return_current() {
        let mut task = tasks().instantiate();
        let expected = State::new("PENDING", "pending");

        assert_eq!(task.call("actual_state").unwrap().as_state(), Some(&expected));
        assert_eq!(task.call("as_enum").unwrap(), Outcome::State(expected));
    }

    #[test]
    fn generated_predicates_dispatch() {
        let mut task = tasks().instantiate();

        assert_eq!(task.call("is_pending").unwrap().as_bool(), Some(true));
        assert_eq!(task.call("is_active").unwrap().as_bool(), Some(false));
        assert_eq!(task.call("can_be_closed").unwrap().as_bool(), Some(true));
        assert_eq!(task.call("can_be_active").unwrap().as_bool(), Some(true));
        assert_eq!(task.call("can_be_pending").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn generated_setter_enforces_graph() {
        let mut task = tasks().instantiate();

        task.call("set_closed").unwrap();
        assert!(task.is("closed").unwrap());

        let err = task.call("set_active").unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                from: "closed".into(),
                to: "active".into(),
            }
        );
        assert!(task.is("closed").unwrap());
    }

    #[test]
    fn generic_methods_take_argument() {
        let mut task = tasks().instantiate();

        assert_eq!(task.invoke("is_", Some("pending")).unwrap(), Outcome::Bool(true));
        assert_eq!(task.invoke("can_be_", Some("closed")).unwrap(), Outcome::Bool(true));
        assert_eq!(task.invoke("set_", Some("closed")).unwrap(), Outcome::Done);
        assert_eq!(task.invoke("force_set", Some("active")).unwrap(), Outcome::Done);
        assert!(task.is("active").unwrap());
    }

    #[test]
    fn generic_methods_propagate_unknown_state() {
        let mut task = tasks().instantiate();

        let err = task.invoke("is_", Some("archived")).unwrap_err();
        assert!(matches!(err, TransitionError::UnknownState(e) if e.identifier == "archived"));
    }

    #[test]
    fn argument_shape_is_checked() {
        let mut task = tasks().instantiate();

        assert_eq!(
            task.call("set_").unwrap_err(),
            TransitionError::MissingArgument {
                method: "set_".into()
            }
        );
        assert_eq!(
            task.invoke("is_pending", Some("pending")).unwrap_err(),
            TransitionError::UnexpectedArgument {
                method: "is_pending".into()
            }
        );
    }

    #[test]
    fn every_generic_method_requires_its_argument() {
        let mut task = tasks().instantiate();

        for method in ["is_", "can_be_", "set_", "force_set"] {
            assert_eq!(
                task.call(method).unwrap_err(),
                TransitionError::MissingArgument {
                    method: method.into()
                }
            );
        }
        assert!(task.is("pending").unwrap());
        assert!(task.history().is_empty());
    }

    #[test]
    fn unknown_method_is_reported() {
        let mut task = tasks().instantiate();

        assert_eq!(
            task.call("reject").unwrap_err(),
            TransitionError::UnknownMethod {
                name: "reject".into()
            }
        );
    }

    #[test]
    fn named_methods_dispatch() {
        let mut task = tasks().instantiate();

        assert_eq!(task.call("is_open").unwrap(), Outcome::Bool(false));
        task.call("approve").unwrap();
        assert_eq!(task.call("is_open").unwrap(), Outcome::Bool(true));

        let err = task.call("approve").unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
        assert!(task.is("active").unwrap());
    }
}
