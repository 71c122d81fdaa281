//! Core state machine types and logic.
//!
//! This module contains the pure building blocks shared by every machine:
//! - The state catalog and its `State` values
//! - Identifier translation into canonical states
//! - The transition graph and its builder
//! - Immutable history tracking
//!
//! Nothing in here knows about configuration or generated methods.

mod graph;
mod history;
mod state;
mod translator;

pub use graph::{GraphBuilder, TransitionGraph};
pub use history::{StateHistory, StateTransition};
pub use state::{State, StateCatalog};
pub use translator::{Identifier, Translator, UnknownState};
