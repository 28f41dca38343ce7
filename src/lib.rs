//! Statewise: an embeddable rule-driven finite state machine
//!
//! A machine tracks a current state and applies transition rules keyed by
//! input symbol. Each rule yields an output value, and states can attach
//! entry/quit callbacks and abort guards that veto transitions. The engine
//! owns no I/O and is driven from a single thread of control.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug` value
//! - **Trigger**: one rule, `input -> (next state, output)`
//! - **StateConfiguration**: the rules and hooks owned by one state
//! - **StateMachine**: the mapping from states to configurations, plus the
//!   transition algorithm and queries
//!
//! # Example
//!
//! ```rust
//! use statewise::{MachineError, StateMachineBuilder};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Order {
//!     Initial,
//!     Pending,
//!     Passed,
//!     Rejected,
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .name("orders")
//!     .state(Order::Initial, |s| {
//!         s.mark_as_initial()
//!             .rule_with_output("Submit", Order::Pending, 1)
//!     })
//!     .state(Order::Pending, |s| {
//!         s.rule_with_output("Agree", Order::Passed, 2)
//!             .rule_with_output("Deny", Order::Rejected, 3)
//!     })
//!     .state(Order::Passed, |s| s.mark_as_final())
//!     .build()
//!     .unwrap();
//!
//! let result = machine.change_state(&"Submit").unwrap();
//! assert_eq!(result.output(), &1);
//! assert_eq!(machine.valid_inputs(&Order::Pending).unwrap(), vec!["Agree", "Deny"]);
//!
//! machine.step(&"Agree").unwrap();
//! assert!(machine.is_final());
//!
//! let err = machine.change_state(&"Agree").unwrap_err();
//! assert!(matches!(err, MachineError::InvalidInput { state: Order::Passed, .. }));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{AbortGuard, HookError, HookStage, State, StateConfiguration, Trigger};
pub use machine::{ChangeResult, MachineError, StateMachine};
pub use validation::ConfigIssue;
