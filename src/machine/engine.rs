//! State machine that applies rule-driven transitions.

use crate::core::{
    HookError, HookStage, Input, State, StateConfiguration, StateHistory, StateTransition,
};
use crate::machine::error::MachineError;
use crate::machine::result::ChangeResult;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A finite state machine over states `S`, inputs `I` and outputs `O`.
///
/// The machine owns one [`StateConfiguration`] per configured state and is
/// the only mutator of the current state. It is single-threaded by contract:
/// callers sharing a machine across tasks must serialize access.
///
/// # Example
///
/// ```rust
/// use statewise::StateMachine;
///
/// let mut machine: StateMachine<char, u8, u32> = StateMachine::new('A');
/// machine
///     .configure('A', |s| s.rule_with_output(1, 'B', 1000).rule_with_output(2, 'C', 3000))
///     .configure('B', |s| s.rule(1, 'C').rule(0, 'A'));
///
/// let result = machine.change_state(&1).unwrap();
/// assert_eq!(result.output(), &1000);
/// assert_eq!(machine.current_state(), &'B');
///
/// machine.step(&0).unwrap().step(&2).unwrap();
/// assert_eq!(machine.current_state(), &'C');
/// assert!(machine.change_state(&2).is_err());
/// ```
pub struct StateMachine<S, I, O> {
    name: String,
    current: S,
    original: S,
    final_state: Option<S>,
    configurations: HashMap<S, StateConfiguration<S, I, O>>,
    order: Vec<S>,
    history: StateHistory<S, I>,
    track_history: bool,
}

impl<S: State, I: Input, O: Clone> StateMachine<S, I, O> {
    /// Create a machine whose current and original state is `initial`.
    ///
    /// The machine is named with a random UUID.
    pub fn new(initial: S) -> Self {
        Self::with_name(initial, Uuid::new_v4().to_string())
    }

    /// Create a named machine whose current and original state is `initial`.
    pub fn with_name(initial: S, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: initial.clone(),
            original: initial,
            final_state: None,
            configurations: HashMap::new(),
            order: Vec::new(),
            history: StateHistory::new(),
            track_history: false,
        }
    }

    /// Enable or disable recording of completed transitions.
    pub fn set_track_history(&mut self, enabled: bool) -> &mut Self {
        self.track_history = enabled;
        self
    }

    /// Configure `state`, creating its configuration if absent.
    ///
    /// Rules and hooks added here are appended after any already present.
    /// Initial/final markers set in the closure are applied to this machine.
    pub fn configure<F>(&mut self, state: S, configure: F) -> &mut Self
    where
        F: FnOnce(StateConfiguration<S, I, O>) -> StateConfiguration<S, I, O>,
    {
        let configuration = self
            .configurations
            .remove(&state)
            .unwrap_or_else(|| StateConfiguration::new(state));
        self.adopt(configure(configuration));
        self
    }

    /// Add a prebuilt configuration, merging it into any existing one.
    pub fn add_configuration(&mut self, configuration: StateConfiguration<S, I, O>) -> &mut Self {
        self.adopt(configuration);
        self
    }

    pub(crate) fn adopt(&mut self, mut configuration: StateConfiguration<S, I, O>) {
        let state = configuration.state().clone();
        if configuration.take_initial_mark() {
            self.original = state.clone();
        }
        if configuration.take_final_mark() {
            self.final_state = Some(state.clone());
        }

        match self.configurations.get_mut(&state) {
            Some(existing) => existing.absorb(configuration),
            None => {
                if !self.order.contains(&state) {
                    self.order.push(state.clone());
                }
                self.configurations.insert(state, configuration);
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The state `reset` returns to.
    pub fn original_state(&self) -> &S {
        &self.original
    }

    pub fn final_state(&self) -> Option<&S> {
        self.final_state.as_ref()
    }

    /// Completed transitions, empty unless history tracking is enabled.
    pub fn history(&self) -> &StateHistory<S, I> {
        &self.history
    }

    /// Force the current state. No validation, no callbacks.
    pub fn set_current_state(&mut self, state: S) -> &mut Self {
        tracing::trace!(machine = %self.name, state = ?state, "current state forced");
        self.current = state;
        self
    }

    /// Return to the original state. No callbacks fire.
    pub fn reset(&mut self) -> &mut Self {
        tracing::debug!(machine = %self.name, state = ?self.original, "machine reset");
        self.current = self.original.clone();
        self
    }

    /// Apply `input` to the current state.
    pub fn change_state(&mut self, input: &I) -> Result<ChangeResult<S, O>, MachineError<S, I>> {
        let from = self.current.clone();
        self.change_state_from(&from, input)
    }

    /// Apply `input` to `from`, which need not be the current state.
    ///
    /// On success the current state becomes the rule's destination. The
    /// destination's entry callbacks run before the source's quit callbacks.
    pub fn change_state_from(
        &mut self,
        from: &S,
        input: &I,
    ) -> Result<ChangeResult<S, O>, MachineError<S, I>> {
        let source = self
            .configurations
            .get(from)
            .ok_or_else(|| MachineError::InvalidState {
                state: from.clone(),
            })?;

        let trigger = source
            .find_trigger(input)
            .ok_or_else(|| MachineError::InvalidInput {
                state: from.clone(),
                input: input.clone(),
            })?;
        let next = trigger.next_state().clone();
        let output = trigger.output().clone();

        if source.should_abort(input, &output) {
            tracing::debug!(
                machine = %self.name,
                from = ?from,
                to = ?next,
                input = ?input,
                "transition aborted by guard"
            );
            source
                .fire_abort()
                .map_err(|e| self.hook_failed(HookStage::Abort, e))?;
            return Ok(ChangeResult::Aborted {
                from: from.clone(),
                to: next,
                output,
            });
        }

        self.current = next.clone();
        if self.track_history {
            self.history.record(StateTransition {
                from: from.clone(),
                to: next.clone(),
                input: input.clone(),
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(
            machine = %self.name,
            from = ?from,
            to = ?next,
            input = ?input,
            "state changed"
        );

        if let Some(destination) = self.configurations.get(&next) {
            destination
                .fire_entry(from, input, &output)
                .map_err(|e| self.hook_failed(HookStage::Entry, e))?;
        }
        source
            .fire_quit(&next, input, &output)
            .map_err(|e| self.hook_failed(HookStage::Quit, e))?;

        Ok(ChangeResult::Changed {
            from: from.clone(),
            to: next,
            output,
        })
    }

    /// Apply `input` to the current state and return the machine for chaining.
    ///
    /// An aborted transition is not an error; the machine simply stays put.
    pub fn step(&mut self, input: &I) -> Result<&mut Self, MachineError<S, I>> {
        self.change_state(input)?;
        Ok(self)
    }

    /// Apply `input` to `from` and return the machine for chaining.
    pub fn step_from(&mut self, from: &S, input: &I) -> Result<&mut Self, MachineError<S, I>> {
        self.change_state_from(from, input)?;
        Ok(self)
    }

    fn hook_failed(&self, stage: HookStage, error: HookError) -> MachineError<S, I> {
        tracing::warn!(
            machine = %self.name,
            state = ?self.current,
            "{} callback failed: {}",
            stage,
            error
        );
        MachineError::hook(stage, error)
    }

    pub(crate) fn configurations(&self) -> &HashMap<S, StateConfiguration<S, I, O>> {
        &self.configurations
    }

    /// Configured states in the order they were first configured.
    pub(crate) fn ordered_configurations(
        &self,
    ) -> impl Iterator<Item = &StateConfiguration<S, I, O>> + '_ {
        self.order
            .iter()
            .filter_map(|state| self.configurations.get(state))
    }
}

impl<S: fmt::Debug, I: fmt::Debug, O: fmt::Debug> fmt::Debug for StateMachine<S, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("current", &self.current)
            .field("original", &self.original)
            .field("final_state", &self.final_state)
            .field("states", &self.order)
            .finish_non_exhaustive()
    }
}
