//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Input, State, StateConfiguration};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Configurations are accumulated first and assembled into a machine by
/// [`build`](Self::build). Configuring the same state twice merges the two,
/// rules of the later call appended after the earlier ones.
pub struct StateMachineBuilder<S, I, O> {
    name: Option<String>,
    initial: Option<S>,
    states: Vec<StateConfiguration<S, I, O>>,
    track_history: bool,
}

impl<S: State, I: Input, O: Clone> StateMachineBuilder<S, I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            initial: None,
            states: Vec::new(),
            track_history: false,
        }
    }

    /// Name the machine. Defaults to a random UUID.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the state the machine starts in.
    ///
    /// Optional when some configuration is marked initial; the marked state
    /// is then used as the starting state too.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Configure a state using a closure over a fresh configuration.
    pub fn state<F>(self, state: S, configure: F) -> Self
    where
        F: FnOnce(StateConfiguration<S, I, O>) -> StateConfiguration<S, I, O>,
    {
        self.configuration(configure(StateConfiguration::new(state)))
    }

    /// Add a prebuilt configuration.
    pub fn configuration(mut self, configuration: StateConfiguration<S, I, O>) -> Self {
        self.states.push(configuration);
        self
    }

    /// Record completed transitions in the machine's history.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Build the state machine.
    /// Returns an error if no starting state can be determined.
    pub fn build(self) -> Result<StateMachine<S, I, O>, BuildError> {
        let marked = self
            .states
            .iter()
            .rev()
            .find(|c| c.is_marked_initial())
            .map(|c| c.state().clone());
        let initial = self
            .initial
            .or(marked)
            .ok_or(BuildError::MissingInitialState)?;

        let mut machine = match self.name {
            Some(name) => StateMachine::with_name(initial, name),
            None => StateMachine::new(initial),
        };
        machine.set_track_history(self.track_history);
        for configuration in self.states {
            machine.adopt(configuration);
        }

        Ok(machine)
    }
}

impl<S: State, I: Input, O: Clone> Default for StateMachineBuilder<S, I, O> {
    fn default() -> Self {
        Self::new()
    }
}
