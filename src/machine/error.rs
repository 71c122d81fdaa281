//! Runtime errors raised by machine instances.

use crate::core::UnknownState;
use thiserror::Error;

/// Errors that can occur when operating on a machine instance.
///
/// None of these leave the instance in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    UnknownState(#[from] UnknownState),

    #[error("Can't change state from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Machine has no method named '{name}'")]
    UnknownMethod { name: String },

    #[error("Method '{method}' requires a state argument")]
    MissingArgument { method: String },

    #[error("Method '{method}' takes no argument")]
    UnexpectedArgument { method: String },
}
