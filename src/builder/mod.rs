//! Builder API for declaring machine types.
//!
//! A machine type is declared as data ([`MachineConfig`]), either literally,
//! from JSON, or through the fluent [`MachineBuilder`]. [`validate`] checks
//! it once and produces the shared [`MachineDefinition`].

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;
pub mod methods;
pub mod validator;

pub use config::{FromStates, MachineConfig, NamedChecker, NamedTransition};
pub use error::BuildError;
pub use machine::MachineBuilder;
pub use methods::{Behavior, MethodTable};
pub use validator::{resolve_completeness, validate, MachineDefinition};
