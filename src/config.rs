//! Harness configuration

use crate::expected;

/// Exit code accepted alongside 0 by the generic flag step.
///
/// Go's `flag` package exits with 2 on usage errors.
pub const DEFAULT_ALTERNATE_EXIT_CODE: i32 = 2;

/// Environment variable overriding the program under test.
pub const PROGRAM_ENV: &str = "CCX_NOTIFICATION_WRITER";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CCX_CONFORMANCE_LOG";

/// Settings shared by every harness operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Program name or path of the binary under test.
    pub program: String,
    /// Non-zero exit code treated as acceptable by launch-with-flag.
    pub alternate_exit_code: i32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            program: expected::PROGRAM.to_string(),
            alternate_exit_code: DEFAULT_ALTERNATE_EXIT_CODE,
        }
    }
}

impl HarnessConfig {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }
}
