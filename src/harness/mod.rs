//! Launching the program under test and checking what it prints.

pub mod context;
pub mod invocation;
pub mod process;
pub mod steps;

pub use context::ScenarioContext;
pub use invocation::{Capture, Invocation, StreamPolicy};
pub use process::{Launcher, ProcessLauncher, SpawnedProcess, Terminator};
pub use steps::{
    process_output, verify_authors_output, verify_exit_code, verify_help_output, verify_line,
    verify_version_output, Harness,
};
