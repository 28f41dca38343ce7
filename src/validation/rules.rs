//! Configuration checks using Validation.

use crate::core::{Input, State, StateConfiguration};
use crate::machine::StateMachine;
use crate::validation::issues::ConfigIssue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a configuration check.
pub type ConfigValidation<S, I> = Validation<(), NonEmptyVec<ConfigIssue<S, I>>>;

impl<S: State, I: Input, O: Clone> StateMachine<S, I, O> {
    /// Check the configuration, accumulating ALL issues.
    ///
    /// Returns `Validation::Success(())` when nothing looks wrong. Running
    /// this is optional; the machine never validates rules on its own.
    pub fn validate(&self) -> ConfigValidation<S, I> {
        let mut checks = vec![check_initial(self)];

        for configuration in self.ordered_configurations() {
            checks.extend(check_rules(self, configuration));
            checks.push(check_reachable(self, configuration));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_initial<S: State, I: Input, O: Clone>(
    machine: &StateMachine<S, I, O>,
) -> ConfigValidation<S, I> {
    let state = machine.original_state();
    if machine.contains_state(state) {
        Validation::success(())
    } else {
        Validation::fail(ConfigIssue::UnconfiguredInitial {
            state: state.clone(),
        })
    }
}

fn check_rules<S: State, I: Input, O: Clone>(
    machine: &StateMachine<S, I, O>,
    configuration: &StateConfiguration<S, I, O>,
) -> Vec<ConfigValidation<S, I>> {
    let from = configuration.state();
    let triggers = configuration.triggers();

    triggers
        .iter()
        .enumerate()
        .map(|(index, trigger)| {
            let shadowed = triggers[..index]
                .iter()
                .any(|earlier| earlier.matches(trigger.input()));
            let shadow_check = if shadowed {
                Validation::fail(ConfigIssue::ShadowedRule {
                    state: from.clone(),
                    input: trigger.input().clone(),
                })
            } else {
                Validation::success(())
            };

            let target_check = if machine.contains_state(trigger.next_state()) {
                Validation::success(())
            } else {
                Validation::fail(ConfigIssue::UnconfiguredTarget {
                    from: from.clone(),
                    input: trigger.input().clone(),
                    target: trigger.next_state().clone(),
                })
            };

            Validation::all_vec(vec![shadow_check, target_check]).map(|_| ())
        })
        .collect()
}

fn check_reachable<S: State, I: Input, O: Clone>(
    machine: &StateMachine<S, I, O>,
    configuration: &StateConfiguration<S, I, O>,
) -> ConfigValidation<S, I> {
    let state = configuration.state();
    let reached_from_elsewhere = machine
        .previous_states(state)
        .iter()
        .any(|source| source != state);
    if state == machine.original_state() || reached_from_elsewhere {
        Validation::success(())
    } else {
        Validation::fail(ConfigIssue::UnreachableState {
            state: state.clone(),
        })
    }
}
