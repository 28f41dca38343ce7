//! Builder API for assembling state machines in two phases.
//!
//! Per-state configurations are accumulated first, then `build()` assembles
//! them into a machine and applies initial/final markers by value.
//!
//! # Example
//!
//! ```
//! use statewise::builder::StateMachineBuilder;
//!
//! let mut machine = StateMachineBuilder::new()
//!     .name("orders")
//!     .state("Initial", |s| {
//!         s.mark_as_initial()
//!             .rule_with_output("Submit", "Pending", "submitted")
//!     })
//!     .state("Pending", |s| s.rule_with_output("Agree", "Passed", "approved"))
//!     .state("Passed", |s| s.mark_as_final())
//!     .build()
//!     .unwrap();
//!
//! machine.step(&"Submit").unwrap().step(&"Agree").unwrap();
//! assert!(machine.is_final());
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
