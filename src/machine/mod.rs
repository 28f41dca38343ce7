//! The state machine and its transition algorithm.
//!
//! # Transition order
//!
//! For a transition from `A` to `B` on input `x`:
//!
//! 1. `A` must be configured, else `InvalidState`.
//! 2. The first rule of `A` matching `x` is selected, else `InvalidInput`.
//! 3. `A`'s abort guards are evaluated; on a veto, `A`'s abort actions run
//!    and the current state is left alone.
//! 4. The current state becomes `B`.
//! 5. `B`'s entry callbacks run (if `B` is configured).
//! 6. `A`'s quit callbacks run.
//!
//! Entry into the destination always precedes quitting the source.

mod engine;
mod error;
mod query;
mod result;

pub use engine::StateMachine;
pub use error::MachineError;
pub use result::ChangeResult;
