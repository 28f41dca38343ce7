//! State transition history tracking.
//!
//! When enabled on a machine, every completed transition is appended here.
//! Aborted transitions, resets and forced state changes are not recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Pending",
///     to: "Passed",
///     input: "Agree",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "Passed");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, I> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The input that selected the rule
    pub input: I,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of completed transitions.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition { from: 'A', to: 'B', input: 1, timestamp: Utc::now() });
/// history.record(StateTransition { from: 'B', to: 'C', input: 1, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&'A', &'B', &'C']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, I> {
    transitions: Vec<StateTransition<S, I>>,
}

impl<S, I> Default for StateHistory<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, I> StateHistory<S, I> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S, I>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of each transition. Explicit-source transitions can make
    /// consecutive records discontinuous; the path still lists each `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S, I>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
