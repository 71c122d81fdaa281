//! Statecraft: a declarative finite state machine builder
//!
//! A machine type is declared as data: a closed catalog of states, an
//! initial state, and optionally a transition map, named transitions and
//! named checkers. The declaration is validated once; every instance then
//! tracks its own current state and enforces transition legality.
//!
//! # Core Concepts
//!
//! - **State catalog**: named states with unique string values
//! - **Translation**: raw values and canonical states resolve to one form
//! - **Completeness**: without transition constraints every move is legal
//! - **Generated methods**: `is_<value>`, `set_<value>`, `can_be_<value>`
//!   plus caller-named transitions and checkers, dispatched by name
//!
//! # Example
//!
//! ```rust
//! use statecraft::builder::MachineBuilder;
//! use statecraft::machine::TransitionError;
//!
//! let accounts = MachineBuilder::new()
//!     .state("PENDING", "pending")
//!     .state("ACTIVE", "active")
//!     .state("SUSPENDED", "suspended")
//!     .initial("pending")
//!     .transition("active", ["suspended"])
//!     .named_transition_from("approve", "active", "pending")
//!     .named_checker("is_usable", "active")
//!     .build()
//!     .unwrap();
//!
//! let mut account = accounts.instantiate();
//! assert!(matches!(
//!     account.set("suspended"),
//!     Err(TransitionError::InvalidTransition { .. })
//! ));
//!
//! account.call("approve").unwrap();
//! assert_eq!(account.call("is_usable").unwrap().as_bool(), Some(true));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, MachineConfig};
pub use self::core::{State, StateCatalog, UnknownState};
pub use machine::{Machine, MachineType, Outcome, TransitionError};
