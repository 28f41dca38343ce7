//! Capability traits for state and input types.
//!
//! A machine keys its configurations by state, so states must be hashable
//! and comparable. Inputs are only ever compared against rule inputs.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented automatically for every type that is `Clone + Eq + Hash + Debug`,
/// so plain enums, strings and integers work out of the box.
///
/// # Example
///
/// ```rust
/// use statewise::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&TaskState::Pending);
/// assert_state(&"Pending");
/// assert_state(&42u32);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for transition input symbols.
///
/// Implemented automatically for every type that is `Clone + PartialEq + Debug`.
pub trait Input: Clone + PartialEq + Debug {}

impl<T> Input for T where T: Clone + PartialEq + Debug {}
