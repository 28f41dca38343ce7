//! Building blocks of a state machine.
//!
//! This module contains the per-state data model:
//! - State and input capability traits
//! - Triggers (transition rules)
//! - Abort guards and lifecycle hooks
//! - Per-state configuration
//! - Transition history

mod configuration;
mod guard;
mod history;
mod hook;
mod state;
mod trigger;

pub use configuration::StateConfiguration;
pub use guard::AbortGuard;
pub use history::{StateHistory, StateTransition};
pub use hook::{AbortAction, EntryHook, HookError, HookStage, QuitHook};
pub use state::{Input, State};
pub use trigger::Trigger;
