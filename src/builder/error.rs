//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) or mark a state with .mark_as_initial() before .build()")]
    MissingInitialState,
}
