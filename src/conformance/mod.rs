//! Conformance suite over the writer's informational flags

pub mod checks;
pub mod command;
pub mod report;

pub use checks::run_checks;
pub use command::execute_check;
pub use report::{CheckOutcome, ConformanceChecks, ConformanceReport, Finding};
