//! Lifecycle callbacks attached to a state.
//!
//! Every callback is stored in fallible form. Infallible closures registered
//! through `on_entry`/`on_quit`/`on_abort` are wrapped to always succeed.

use std::fmt;

/// Error reported by a fallible callback.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Callback run when entering a state: `(from_state, input, output)`.
pub type EntryHook<S, I, O> = Box<dyn Fn(&S, &I, &O) -> Result<(), HookError> + Send + Sync>;

/// Callback run when leaving a state: `(to_state, input, output)`.
pub type QuitHook<S, I, O> = Box<dyn Fn(&S, &I, &O) -> Result<(), HookError> + Send + Sync>;

/// Callback run when a transition is vetoed by an abort guard.
pub type AbortAction = Box<dyn Fn() -> Result<(), HookError> + Send + Sync>;

/// Which callback chain a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookStage {
    Entry,
    Quit,
    Abort,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Quit => f.write_str("quit"),
            Self::Abort => f.write_str("abort"),
        }
    }
}

/// Run every hook in registration order, stopping at the first failure.
pub(crate) fn run_chain<F>(hooks: impl IntoIterator<Item = F>) -> Result<(), HookError>
where
    F: FnOnce() -> Result<(), HookError>,
{
    hooks.into_iter().try_for_each(|hook| hook())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn stage_display_is_lowercase() {
        assert_eq!(HookStage::Entry.to_string(), "entry");
        assert_eq!(HookStage::Quit.to_string(), "quit");
        assert_eq!(HookStage::Abort.to_string(), "abort");
    }

    #[test]
    fn run_chain_stops_at_first_failure() {
        let calls = RefCell::new(Vec::new());

        let result = run_chain((0..4).map(|i| {
            let calls = &calls;
            move || {
                calls.borrow_mut().push(i);
                if i == 1 {
                    Err(HookError::from("boom"))
                } else {
                    Ok(())
                }
            }
        }));

        assert_eq!(result.unwrap_err().to_string(), "boom");
        assert_eq!(*calls.borrow(), vec![0, 1]);
    }
}
