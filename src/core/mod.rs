//! Core functionality for running project checks
//!
//! Contains step planning, the individual steps (dependency install, lint,
//! type check, tests) and the dispatcher that runs them in order.

pub mod checks;
pub mod deps;
pub mod dispatcher;
pub mod step;
pub mod suite;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{Dispatcher, RunReport, StepReport};
pub use step::{Outcome, Step, plan};
pub use suite::{TestSuite, TestTarget};
