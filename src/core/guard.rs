//! Abort guards that veto matched transitions.
//!
//! Guards are pure boolean functions over the input and the output of the
//! matched rule. When any guard of the source state returns `true`, the
//! transition is abandoned before the current state changes.

use std::fmt;

/// Pure predicate that decides whether a matched transition is vetoed.
///
/// # Example
///
/// ```rust
/// use statewise::core::AbortGuard;
///
/// let too_expensive = AbortGuard::new(|_input: &&str, price: &u32| *price > 500);
///
/// assert!(too_expensive.check(&"Buy", &900));
/// assert!(!too_expensive.check(&"Buy", &100));
/// ```
pub struct AbortGuard<I, O> {
    predicate: Box<dyn Fn(&I, &O) -> bool + Send + Sync>,
}

impl<I, O> AbortGuard<I, O> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I, &O) -> bool + Send + Sync + 'static,
    {
        AbortGuard {
            predicate: Box::new(predicate),
        }
    }

    /// Returns `true` when the transition must be aborted.
    pub fn check(&self, input: &I, output: &O) -> bool {
        (self.predicate)(input, output)
    }
}

impl<I, O> fmt::Debug for AbortGuard<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbortGuard").finish_non_exhaustive()
    }
}
