//! Refusal codes for harness operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Why the harness could not produce a verdict at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusalCode {
    /// The program under test could not be spawned
    #[serde(rename = "E_LAUNCH")]
    Launch,

    /// Output of a spawned process could not be read
    #[serde(rename = "E_IO")]
    Io,

    /// The database could not be preconditioned
    #[serde(rename = "E_SETUP")]
    Setup,
}

impl RefusalCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefusalCode::Launch => "E_LAUNCH",
            RefusalCode::Io => "E_IO",
            RefusalCode::Setup => "E_SETUP",
        }
    }

    /// Get human-readable message for the refusal code
    pub fn default_message(&self) -> &'static str {
        match self {
            RefusalCode::Launch => "Cannot start the program under test",
            RefusalCode::Io => "Cannot read output of the program under test",
            RefusalCode::Setup => "Database preconditioning failed",
        }
    }

    /// Get suggested next command or action
    pub fn next_command(&self) -> Option<String> {
        match self {
            RefusalCode::Launch => {
                Some("Put ccx-notification-writer on PATH or pass --program".to_string())
            }
            RefusalCode::Io => None,
            RefusalCode::Setup => Some("Check database connection settings".to_string()),
        }
    }

    /// Map a harness failure onto the refusal it causes.
    pub fn for_error(error: &HarnessError) -> Self {
        match error {
            HarnessError::Launch { .. } => RefusalCode::Launch,
            HarnessError::Io { .. } => RefusalCode::Io,
            _ => RefusalCode::Setup,
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
