//! Per-state rule and callback configuration.

use super::guard::AbortGuard;
use super::hook::{run_chain, AbortAction, EntryHook, HookError, QuitHook};
use super::trigger::Trigger;
use std::fmt;

/// Rules and lifecycle hooks owned by one state.
///
/// Built with a fluent API; every method consumes and returns the
/// configuration so calls chain. A configuration does not point back to its
/// machine: initial/final markers are recorded here and applied by value
/// when the machine adopts the configuration.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateConfiguration;
///
/// let pending = StateConfiguration::new("Pending")
///     .rule_with_output("Agree", "Passed", "approved")
///     .rule_with_output("Deny", "Rejected", "denied")
///     .on_quit(|to, input, _output| println!("leaving Pending for {to} on {input}"));
///
/// assert_eq!(pending.triggers().len(), 2);
/// assert_eq!(pending.find_trigger(&"Deny").unwrap().next_state(), &"Rejected");
/// ```
pub struct StateConfiguration<S, I, O> {
    state: S,
    triggers: Vec<Trigger<S, I, O>>,
    entry_hooks: Vec<EntryHook<S, I, O>>,
    quit_hooks: Vec<QuitHook<S, I, O>>,
    abort_guards: Vec<AbortGuard<I, O>>,
    abort_actions: Vec<AbortAction>,
    marked_initial: bool,
    marked_final: bool,
}

impl<S, I, O> StateConfiguration<S, I, O> {
    /// Create an empty configuration for `state`.
    pub fn new(state: S) -> Self {
        Self {
            state,
            triggers: Vec::new(),
            entry_hooks: Vec::new(),
            quit_hooks: Vec::new(),
            abort_guards: Vec::new(),
            abort_actions: Vec::new(),
            marked_initial: false,
            marked_final: false,
        }
    }

    /// The state this configuration governs.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Rules in registration order.
    pub fn triggers(&self) -> &[Trigger<S, I, O>] {
        &self.triggers
    }

    /// Add a rule whose output is `O::default()`.
    ///
    /// The destination does not need to be configured.
    pub fn rule(self, input: I, next_state: S) -> Self
    where
        O: Default,
    {
        self.rule_with_output(input, next_state, O::default())
    }

    /// Add a rule with an explicit output value.
    pub fn rule_with_output(mut self, input: I, next_state: S, output: O) -> Self {
        self.triggers.push(Trigger::new(input, next_state, output));
        self
    }

    /// Designate this state as the machine's original state, used by `reset`.
    pub fn mark_as_initial(mut self) -> Self {
        self.marked_initial = true;
        self
    }

    /// Designate this state as the machine's final state.
    pub fn mark_as_final(mut self) -> Self {
        self.marked_final = true;
        self
    }

    /// Register a callback run when the machine enters this state.
    pub fn on_entry<F>(self, hook: F) -> Self
    where
        F: Fn(&S, &I, &O) + Send + Sync + 'static,
    {
        self.try_on_entry(move |from, input, output| {
            hook(from, input, output);
            Ok(())
        })
    }

    /// Register a fallible entry callback. An error stops the remaining chain.
    pub fn try_on_entry<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &I, &O) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.entry_hooks.push(Box::new(hook));
        self
    }

    /// Register a callback run when the machine leaves this state.
    pub fn on_quit<F>(self, hook: F) -> Self
    where
        F: Fn(&S, &I, &O) + Send + Sync + 'static,
    {
        self.try_on_quit(move |to, input, output| {
            hook(to, input, output);
            Ok(())
        })
    }

    /// Register a fallible quit callback. An error stops the remaining chain.
    pub fn try_on_quit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &I, &O) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.quit_hooks.push(Box::new(hook));
        self
    }

    /// Add a guard that vetoes transitions out of this state.
    pub fn abort_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&I, &O) -> bool + Send + Sync + 'static,
    {
        self.abort_guards.push(AbortGuard::new(predicate));
        self
    }

    /// Add a prebuilt guard.
    pub fn abort_guard(mut self, guard: AbortGuard<I, O>) -> Self {
        self.abort_guards.push(guard);
        self
    }

    /// Register an action run when a guard vetoes a transition.
    pub fn on_abort<F>(self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.try_on_abort(move || {
            action();
            Ok(())
        })
    }

    /// Register a fallible abort action.
    pub fn try_on_abort<F>(mut self, action: F) -> Self
    where
        F: Fn() -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.abort_actions.push(Box::new(action));
        self
    }

    /// First rule matching `input`; later duplicates are never selected.
    pub fn find_trigger(&self, input: &I) -> Option<&Trigger<S, I, O>>
    where
        I: PartialEq,
    {
        self.triggers.iter().find(|t| t.matches(input))
    }

    /// Check if any rule leads to `state`.
    pub fn leads_to(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.triggers.iter().any(|t| t.targets(state))
    }

    /// Evaluate abort guards in order, stopping at the first veto.
    pub fn should_abort(&self, input: &I, output: &O) -> bool {
        self.abort_guards.iter().any(|g| g.check(input, output))
    }

    /// Run entry callbacks in registration order.
    pub fn fire_entry(&self, from: &S, input: &I, output: &O) -> Result<(), HookError> {
        run_chain(
            self.entry_hooks
                .iter()
                .map(|hook| move || hook(from, input, output)),
        )
    }

    /// Run quit callbacks in registration order.
    pub fn fire_quit(&self, to: &S, input: &I, output: &O) -> Result<(), HookError> {
        run_chain(
            self.quit_hooks
                .iter()
                .map(|hook| move || hook(to, input, output)),
        )
    }

    /// Run abort actions in registration order.
    pub fn fire_abort(&self) -> Result<(), HookError> {
        run_chain(self.abort_actions.iter().map(|action| move || action()))
    }

    pub(crate) fn take_initial_mark(&mut self) -> bool {
        std::mem::take(&mut self.marked_initial)
    }

    pub(crate) fn take_final_mark(&mut self) -> bool {
        std::mem::take(&mut self.marked_final)
    }

    pub(crate) fn is_marked_initial(&self) -> bool {
        self.marked_initial
    }

    /// Append another configuration's rules and hooks after this one's.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.triggers.extend(other.triggers);
        self.entry_hooks.extend(other.entry_hooks);
        self.quit_hooks.extend(other.quit_hooks);
        self.abort_guards.extend(other.abort_guards);
        self.abort_actions.extend(other.abort_actions);
    }
}

impl<S: fmt::Debug, I: fmt::Debug, O: fmt::Debug> fmt::Debug for StateConfiguration<S, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateConfiguration")
            .field("state", &self.state)
            .field("triggers", &self.triggers)
            .field("entry_hooks", &self.entry_hooks.len())
            .field("quit_hooks", &self.quit_hooks.len())
            .field("abort_guards", &self.abort_guards.len())
            .field("abort_actions", &self.abort_actions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    type Log = Arc<Mutex<Vec<String>>>;

    fn log() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn rule_uses_default_output() {
        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .rule(1, TestState::Middle);

        assert_eq!(config.triggers()[0].output(), &0);
    }

    #[test]
    fn rules_keep_insertion_order() {
        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .rule_with_output(1, TestState::Middle, 1000)
            .rule_with_output(2, TestState::End, 3000);

        let inputs: Vec<u8> = config.triggers().iter().map(|t| *t.input()).collect();
        assert_eq!(inputs, vec![1, 2]);
    }

    #[test]
    fn find_trigger_returns_first_match() {
        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .rule_with_output(1, TestState::Middle, 10)
            .rule_with_output(1, TestState::End, 20);

        let trigger = config.find_trigger(&1).unwrap();
        assert_eq!(trigger.next_state(), &TestState::Middle);
        assert_eq!(trigger.output(), &10);
        assert!(config.find_trigger(&9).is_none());
    }

    #[test]
    fn leads_to_checks_every_rule() {
        let config = StateConfiguration::<TestState, u8, ()>::new(TestState::Start)
            .rule(1, TestState::Middle)
            .rule(2, TestState::End);

        assert!(config.leads_to(&TestState::End));
        assert!(!config.leads_to(&TestState::Start));
    }

    #[test]
    fn entry_hooks_fire_in_registration_order() {
        let calls = log();
        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);

        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Middle)
            .on_entry(move |from, input, output| {
                first
                    .lock()
                    .unwrap()
                    .push(format!("first {from:?} {input} {output}"));
            })
            .on_entry(move |_, _, _| second.lock().unwrap().push("second".to_string()));

        config.fire_entry(&TestState::Start, &1, &1000).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["first Start 1 1000".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn failing_quit_hook_stops_the_chain() {
        let calls = log();
        let after = Arc::clone(&calls);

        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .try_on_quit(|_, _, _| Err("refused".into()))
            .on_quit(move |_, _, _| after.lock().unwrap().push("after".to_string()));

        let result = config.fire_quit(&TestState::Middle, &1, &0);

        assert_eq!(result.unwrap_err().to_string(), "refused");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn should_abort_short_circuits() {
        let evaluated = log();
        let second = Arc::clone(&evaluated);

        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .abort_when(|input, _| *input == 2)
            .abort_when(move |_, _| {
                second.lock().unwrap().push("second".to_string());
                false
            });

        assert!(config.should_abort(&2, &0));
        assert!(evaluated.lock().unwrap().is_empty());

        assert!(!config.should_abort(&1, &0));
        assert_eq!(evaluated.lock().unwrap().len(), 1);
    }

    #[test]
    fn abort_actions_fire_in_order() {
        let calls = log();
        let a = Arc::clone(&calls);
        let b = Arc::clone(&calls);

        let config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .on_abort(move || a.lock().unwrap().push("a".to_string()))
            .on_abort(move || b.lock().unwrap().push("b".to_string()));

        config.fire_abort().unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn markers_are_taken_once() {
        let mut config = StateConfiguration::<TestState, u8, u32>::new(TestState::Start)
            .mark_as_initial()
            .mark_as_final();

        assert!(config.is_marked_initial());
        assert!(config.take_initial_mark());
        assert!(!config.take_initial_mark());
        assert!(config.take_final_mark());
        assert!(!config.take_final_mark());
    }

    #[test]
    fn absorb_appends_after_existing_rules() {
        let mut config = StateConfiguration::<TestState, u8, ()>::new(TestState::Start)
            .rule(1, TestState::Middle);
        let more = StateConfiguration::<TestState, u8, ()>::new(TestState::Start)
            .rule(1, TestState::End)
            .rule(2, TestState::End);

        config.absorb(more);

        assert_eq!(config.triggers().len(), 3);
        assert_eq!(config.find_trigger(&1).unwrap().next_state(), &TestState::Middle);
    }
}
