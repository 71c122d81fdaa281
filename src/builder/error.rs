//! Build errors for machine type construction.

use crate::core::UnknownState;
use thiserror::Error;

/// Errors that can occur when validating a machine configuration.
///
/// Any of these aborts construction; no partially built machine type is
/// ever returned.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid state catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Empty state is disallowed, yet no initial state is given")]
    MissingInitialState,

    #[error(transparent)]
    UnknownState(#[from] UnknownState),

    #[error("Name collision for method '{name}'")]
    NameCollision { name: String },

    #[error("Malformed machine configuration: {0}")]
    Config(#[from] serde_json::Error),
}
