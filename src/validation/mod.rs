//! Configuration diagnostics for state machines.
//!
//! Rule targets are never checked while a machine is being configured, so a
//! rule may point at a state configured later or never. `validate()` is an
//! opt-in review of the whole configuration that uses stillwater's
//! `Validation` to report every issue in one pass instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use statewise::StateMachine;
//! use statewise::validation::ConfigIssue;
//! use stillwater::validation::Validation;
//!
//! let mut machine: StateMachine<&str, &str, ()> = StateMachine::new("Open");
//! machine.configure("Open", |s| s.rule("Close", "Closed").rule("Close", "Open"));
//!
//! match machine.validate() {
//!     Validation::Failure(issues) => {
//!         assert_eq!(issues.len(), 2);
//!         assert!(issues.iter().any(|i| matches!(i, ConfigIssue::ShadowedRule { .. })));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod issues;
pub mod rules;

pub use issues::ConfigIssue;
pub use rules::ConfigValidation;
