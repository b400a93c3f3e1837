//! Harness error type

/// Failures raised by harness operations.
///
/// Every variant carries the observed value so the message alone explains
/// what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The program could not be spawned.
    #[error("failed to start `{program}`: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    /// stderr was captured separately although it should have been merged.
    #[error("error during check: stderr was captured separately ({len} bytes)")]
    StderrNotMerged { len: usize },

    /// The process produced no output at all.
    #[error("no output from application")]
    EmptyOutput,

    /// Exit code is neither 0 nor the accepted alternate.
    #[error("return code is {actual}")]
    UnexpectedExitCode { actual: i32, accepted: i32 },

    /// Captured output is not valid UTF-8.
    #[error("output is not valid UTF-8: {source}")]
    Decode { source: std::str::Utf8Error },

    /// A verification ran before any process output was captured.
    #[error("nothing captured yet; start the program first")]
    NothingCaptured,

    /// Help text differs from the expected block.
    #[error("{actual} != {expected}\n{diff}")]
    HelpMismatch {
        actual: String,
        expected: String,
        diff: String,
    },

    /// An expected whole line is absent from the output.
    #[error("line {line:?} not found; caught output: {output:?}")]
    MissingLine { line: String, output: Vec<String> },

    /// Recorded exit code differs from the expected one.
    #[error("return code is {actual}, but {expected} is expected")]
    ExitCodeMismatch { actual: i32, expected: i32 },

    /// I/O failure while talking to an already spawned process.
    #[error("i/o error while running `{program}`: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

impl HarnessError {
    /// Stable finding code used in conformance reports.
    pub fn code(&self) -> &'static str {
        match self {
            HarnessError::Launch { .. } => "LAUNCH_FAILED",
            HarnessError::StderrNotMerged { .. } => "STDERR_NOT_MERGED",
            HarnessError::EmptyOutput => "EMPTY_OUTPUT",
            HarnessError::UnexpectedExitCode { .. } => "UNEXPECTED_EXIT_CODE",
            HarnessError::Decode { .. } => "UNDECODABLE_OUTPUT",
            HarnessError::NothingCaptured => "NOTHING_CAPTURED",
            HarnessError::HelpMismatch { .. } => "HELP_MISMATCH",
            HarnessError::MissingLine { .. } => "LINE_MISSING",
            HarnessError::ExitCodeMismatch { .. } => "EXIT_CODE_MISMATCH",
            HarnessError::Io { .. } => "IO_FAILED",
        }
    }

    /// True when the harness could not run the program at all.
    pub fn is_refusal(&self) -> bool {
        matches!(self, HarnessError::Launch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_messages_embed_values() {
        let err = HarnessError::UnexpectedExitCode {
            actual: 7,
            accepted: 2,
        };
        assert_eq!(err.to_string(), "return code is 7");

        let err = HarnessError::ExitCodeMismatch {
            actual: 2,
            expected: 0,
        };
        assert_eq!(err.to_string(), "return code is 2, but 0 is expected");
    }

    #[test]
    fn only_launch_failures_are_refusals() {
        let launch = HarnessError::Launch {
            program: "nope".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(launch.is_refusal());
        assert_eq!(launch.code(), "LAUNCH_FAILED");
        assert!(!HarnessError::EmptyOutput.is_refusal());
    }

    #[test]
    fn missing_line_lists_caught_output() {
        let err = HarnessError::MissingLine {
            line: "x".to_string(),
            output: vec!["a".to_string(), String::new()],
        };
        assert_eq!(
            err.to_string(),
            "line \"x\" not found; caught output: [\"a\", \"\"]"
        );
    }
}
