//! State transition history tracking.
//!
//! Each machine instance keeps an ordered, in-memory record of the
//! transitions it has applied. `record` returns a new history and leaves
//! the old one untouched; machines append to their own history in place.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: State::new("PENDING", "pending"),
///     to: State::new("ACTIVE", "active"),
///     timestamp: Utc::now(),
///     forced: false,
/// };
/// assert!(!transition.forced);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: State,
    /// The state being transitioned to
    pub to: State,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Whether the transition bypassed the legality check (`force_set`)
    pub forced: bool,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{State, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let start = State::new("START", "start");
/// let middle = State::new("MIDDLE", "middle");
/// let end = State::new("END", "end");
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: start.clone(),
///         to: middle.clone(),
///         timestamp: Utc::now(),
///         forced: false,
///     })
///     .record(StateTransition {
///         from: middle.clone(),
///         to: end.clone(),
///         timestamp: Utc::now(),
///         forced: true,
///     });
///
/// assert_eq!(history.get_path(), vec![&start, &middle, &end]);
/// assert_eq!(history.forced_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&State> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of transitions applied through `force_set`.
    pub fn forced_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.forced).count()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
