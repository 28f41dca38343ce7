//! Read-only queries over a machine's configuration.

use crate::core::{Input, State, StateConfiguration};
use crate::machine::engine::StateMachine;
use crate::machine::error::MachineError;

impl<S: State, I: Input, O: Clone> StateMachine<S, I, O> {
    pub fn contains_state(&self, state: &S) -> bool {
        self.configurations().contains_key(state)
    }

    /// Configuration of `state`, or `InvalidState` if it was never configured.
    pub fn get_configuration(
        &self,
        state: &S,
    ) -> Result<&StateConfiguration<S, I, O>, MachineError<S, I>> {
        self.configurations()
            .get(state)
            .ok_or_else(|| MachineError::InvalidState {
                state: state.clone(),
            })
    }

    /// Every configured state. Callers must not rely on the order.
    pub fn all_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.ordered_configurations().map(|c| c.state())
    }

    /// Check if some rule of `from` leads to `to`.
    ///
    /// Returns `false` when either state is unconfigured.
    pub fn can_change_to(&self, from: &S, to: &S) -> bool {
        if !self.contains_state(to) {
            return false;
        }
        self.configurations()
            .get(from)
            .is_some_and(|c| c.leads_to(to))
    }

    /// [`can_change_to`](Self::can_change_to) from the current state.
    pub fn can_change_to_from_current(&self, to: &S) -> bool {
        self.can_change_to(self.current_state(), to)
    }

    /// Destinations of every rule of `state`, in rule order, duplicates kept.
    pub fn next_states(&self, state: &S) -> Result<Vec<S>, MachineError<S, I>> {
        let configuration = self.get_configuration(state)?;
        Ok(configuration
            .triggers()
            .iter()
            .map(|t| t.next_state().clone())
            .collect())
    }

    /// Configured states with at least one rule leading to `state`.
    ///
    /// One entry per source state, however many of its rules match.
    pub fn previous_states(&self, state: &S) -> Vec<S> {
        self.ordered_configurations()
            .filter(|c| c.leads_to(state))
            .map(|c| c.state().clone())
            .collect()
    }

    /// Inputs accepted by `state`, in rule order.
    pub fn valid_inputs(&self, state: &S) -> Result<Vec<I>, MachineError<S, I>> {
        let configuration = self.get_configuration(state)?;
        Ok(configuration
            .triggers()
            .iter()
            .map(|t| t.input().clone())
            .collect())
    }

    /// Check if the current state is the designated final state.
    ///
    /// Always `false` when no final state was designated.
    pub fn is_final(&self) -> bool {
        self.final_state() == Some(self.current_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
    enum Node {
        #[default]
        A,
        B,
        C,
        D,
    }

    fn machine() -> StateMachine<Node, u8, u32> {
        let mut machine = StateMachine::new(Node::A);
        machine
            .configure(Node::A, |s| {
                s.rule_with_output(1, Node::B, 1000)
                    .rule_with_output(2, Node::C, 3000)
                    .rule(3, Node::B)
            })
            .configure(Node::B, |s| s.rule(1, Node::C).rule(0, Node::A))
            .configure(Node::C, |s| s);
        machine
    }

    #[test]
    fn contains_only_configured_states() {
        let machine = machine();

        assert!(machine.contains_state(&Node::A));
        assert!(machine.contains_state(&Node::C));
        assert!(!machine.contains_state(&Node::D));
    }

    #[test]
    fn get_configuration_fails_for_unknown_state() {
        let machine = machine();

        assert_eq!(machine.get_configuration(&Node::B).unwrap().state(), &Node::B);
        assert!(matches!(
            machine.get_configuration(&Node::D),
            Err(MachineError::InvalidState { state: Node::D })
        ));
    }

    #[test]
    fn all_states_lists_each_configured_state_once() {
        let mut machine = machine();
        machine.configure(Node::A, |s| s.rule(9, Node::D));

        let states: Vec<&Node> = machine.all_states().collect();
        assert_eq!(states, vec![&Node::A, &Node::B, &Node::C]);
    }

    #[test]
    fn can_change_to_requires_a_rule_and_configured_states() {
        let machine = machine();

        assert!(machine.can_change_to(&Node::A, &Node::B));
        assert!(machine.can_change_to(&Node::B, &Node::A));
        assert!(!machine.can_change_to(&Node::C, &Node::A));
        assert!(!machine.can_change_to(&Node::D, &Node::A));
        assert!(machine.can_change_to_from_current(&Node::C));
    }

    #[test]
    fn can_change_to_unconfigured_target_is_false() {
        let mut machine = machine();
        machine.configure(Node::C, |s| s.rule(5, Node::D));

        assert!(!machine.can_change_to(&Node::C, &Node::D));
    }

    #[test]
    fn next_states_keep_rule_order_and_duplicates() {
        let machine = machine();

        assert_eq!(
            machine.next_states(&Node::A).unwrap(),
            vec![Node::B, Node::C, Node::B]
        );
        assert!(machine.next_states(&Node::C).unwrap().is_empty());
        assert!(machine.next_states(&Node::D).is_err());
    }

    #[test]
    fn previous_states_lists_each_source_once() {
        let machine = machine();

        assert_eq!(machine.previous_states(&Node::B), vec![Node::A]);
        assert_eq!(machine.previous_states(&Node::C), vec![Node::A, Node::B]);
        assert!(machine.previous_states(&Node::D).is_empty());
    }

    #[test]
    fn valid_inputs_follow_rule_order() {
        let machine = machine();

        assert_eq!(machine.valid_inputs(&Node::A).unwrap(), vec![1, 2, 3]);
        assert_eq!(machine.valid_inputs(&Node::B).unwrap(), vec![1, 0]);
        assert!(matches!(
            machine.valid_inputs(&Node::D),
            Err(MachineError::InvalidState { .. })
        ));
    }

    #[test]
    fn unset_final_state_never_matches_default_state() {
        let machine = machine();

        assert_eq!(machine.current_state(), &Node::default());
        assert!(!machine.is_final());
    }

    #[test]
    fn is_final_tracks_current_state() {
        let mut machine = machine();
        machine.configure(Node::C, |s| s.mark_as_final());

        assert!(!machine.is_final());
        machine.change_state(&2).unwrap();
        assert!(machine.is_final());
    }
}
