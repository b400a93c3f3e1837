/// What happens to the child's stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPolicy {
    /// stderr is redirected into stdout at spawn time.
    Merged,
    /// stderr is captured on its own.
    Separate,
}

/// One subprocess launch: program, arguments and stream policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub streams: StreamPolicy,
}

impl Invocation {
    /// Launch `program` with exactly one flag, streams merged.
    pub fn with_flag(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![flag.into()],
            streams: StreamPolicy::Merged,
        }
    }

    /// Space-joined command line, for logs and reports.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Raw result of one spawn-wait-capture cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub stdout: Vec<u8>,
    pub stderr: Option<Vec<u8>>,
    pub returncode: i32,
}
