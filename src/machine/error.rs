//! Errors raised while driving a state machine.

use crate::core::{HookError, HookStage};
use thiserror::Error;

/// Errors that can occur during transitions and lookups.
///
/// `InvalidState` and `InvalidInput` are raised before any mutation, so the
/// current state is unchanged. `Hook` is raised by a failing callback; entry
/// and quit callbacks run after the current state has been updated.
#[derive(Debug, Error)]
pub enum MachineError<S, I> {
    #[error("state is invalid or undefined: {state:?}")]
    InvalidState { state: S },

    #[error("invalid input {input:?} for state {state:?}")]
    InvalidInput { state: S, input: I },

    #[error("{stage} callback failed: {source}")]
    Hook {
        stage: HookStage,
        #[source]
        source: HookError,
    },
}

impl<S, I> MachineError<S, I> {
    pub(crate) fn hook(stage: HookStage, source: HookError) -> Self {
        MachineError::Hook { stage, source }
    }

    /// Returns whether this error signals a configuration mistake rather
    /// than a callback failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            MachineError::InvalidState { .. } | MachineError::InvalidInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_name_the_offending_values() {
        let err: MachineError<&str, &str> = MachineError::InvalidState { state: "Ghost" };
        assert_eq!(err.to_string(), "state is invalid or undefined: \"Ghost\"");

        let err: MachineError<&str, u8> = MachineError::InvalidInput {
            state: "Finished",
            input: 7,
        };
        assert_eq!(err.to_string(), "invalid input 7 for state \"Finished\"");
    }

    #[test]
    fn hook_error_keeps_its_source() {
        let err: MachineError<u8, u8> = MachineError::hook(HookStage::Entry, "disk full".into());

        assert_eq!(err.to_string(), "entry callback failed: disk full");
        assert_eq!(err.source().unwrap().to_string(), "disk full");
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn lookup_errors_are_configuration_errors() {
        let err: MachineError<u8, u8> = MachineError::InvalidState { state: 1 };
        assert!(err.is_configuration_error());
    }
}
