//! Transition rules.

use serde::{Deserialize, Serialize};

/// One transition rule owned by a source state.
///
/// A trigger maps an input symbol to a destination state and an output value.
/// Triggers are immutable once added to a configuration.
///
/// # Example
///
/// ```rust
/// use statewise::core::Trigger;
///
/// let trigger = Trigger::new("Submit", "Pending", 1000);
///
/// assert!(trigger.matches(&"Submit"));
/// assert_eq!(trigger.next_state(), &"Pending");
/// assert_eq!(trigger.output(), &1000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trigger<S, I, O> {
    input: I,
    next_state: S,
    output: O,
}

impl<S, I, O> Trigger<S, I, O> {
    pub fn new(input: I, next_state: S, output: O) -> Self {
        Self {
            input,
            next_state,
            output,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn next_state(&self) -> &S {
        &self.next_state
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Check if this trigger fires for the given input.
    pub fn matches(&self, input: &I) -> bool
    where
        I: PartialEq,
    {
        self.input == *input
    }

    /// Check if this trigger leads to the given state.
    pub fn targets(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.next_state == *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum OrderState {
        Pending,
        Passed,
    }

    #[test]
    fn matches_only_equal_input() {
        let trigger = Trigger::new("Agree", OrderState::Passed, "approved");

        assert!(trigger.matches(&"Agree"));
        assert!(!trigger.matches(&"Deny"));
    }

    #[test]
    fn targets_compares_destination() {
        let trigger = Trigger::new(1u8, OrderState::Passed, 0u32);

        assert!(trigger.targets(&OrderState::Passed));
        assert!(!trigger.targets(&OrderState::Pending));
    }

    #[test]
    fn trigger_serializes_with_its_parts() {
        let trigger = Trigger::new("Agree".to_string(), OrderState::Passed, 3000u32);

        let json = serde_json::to_string(&trigger).unwrap();
        let restored: Trigger<OrderState, String, u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(trigger, restored);
    }
}
