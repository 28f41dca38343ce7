//! Configuration issues reported by machine validation.

use thiserror::Error;

/// A questionable spot in a machine's configuration.
///
/// None of these stop the machine from running; they point at rules and
/// states that are likely mistakes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue<S, I> {
    #[error("rule {from:?} --{input:?}--> {target:?} leads to an unconfigured state")]
    UnconfiguredTarget { from: S, input: I, target: S },

    #[error("rule for input {input:?} on state {state:?} is shadowed by an earlier rule")]
    ShadowedRule { state: S, input: I },

    #[error("initial state {state:?} has no configuration")]
    UnconfiguredInitial { state: S },

    #[error("state {state:?} is configured but no rule leads to it")]
    UnreachableState { state: S },
}
