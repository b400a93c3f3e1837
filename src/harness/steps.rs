//! Harness operations bound to scenario steps.

use similar::TextDiff;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::expected;

use super::context::ScenarioContext;
use super::invocation::{Capture, Invocation};
use super::process::{Launcher, ProcessLauncher};

/// Launches the program under test and records what it printed.
#[derive(Debug, Clone)]
pub struct Harness<L = ProcessLauncher> {
    config: HarnessConfig,
    launcher: L,
}

impl Harness<ProcessLauncher> {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_launcher(config, ProcessLauncher)
    }
}

impl<L: Launcher> Harness<L> {
    pub fn with_launcher(config: HarnessConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Start the program with one flag, accepting exit code 0 or the
    /// configured alternate.
    pub fn launch_with_flag(
        &self,
        ctx: &mut ScenarioContext,
        flag: &str,
    ) -> Result<(), HarnessError> {
        self.launch_with_flag_accepting(ctx, flag, self.config.alternate_exit_code)
    }

    /// Start the program with one flag, accepting exit code 0 or `accepted`.
    pub fn launch_with_flag_accepting(
        &self,
        ctx: &mut ScenarioContext,
        flag: &str,
        accepted: i32,
    ) -> Result<(), HarnessError> {
        let capture = self.run_to_exit(ctx, flag)?;
        process_output(ctx, capture, accepted)
    }

    /// Start the program with one flag and wait for it to exit.
    ///
    /// Nothing is validated and the context's output fields stay untouched.
    pub fn run_to_exit(
        &self,
        ctx: &mut ScenarioContext,
        flag: &str,
    ) -> Result<Capture, HarnessError> {
        let invocation = Invocation::with_flag(self.config.program.as_str(), flag);
        self.launcher.run(&invocation, ctx)
    }
}

/// Validate a capture and store it on the context.
pub fn process_output(
    ctx: &mut ScenarioContext,
    capture: Capture,
    accepted: i32,
) -> Result<(), HarnessError> {
    if let Some(stderr) = &capture.stderr {
        return Err(HarnessError::StderrNotMerged { len: stderr.len() });
    }
    if capture.stdout.is_empty() {
        return Err(HarnessError::EmptyOutput);
    }
    if capture.returncode != 0 && capture.returncode != accepted {
        return Err(HarnessError::UnexpectedExitCode {
            actual: capture.returncode,
            accepted,
        });
    }

    let output = std::str::from_utf8(&capture.stdout)
        .map_err(|source| HarnessError::Decode { source })?
        .split('\n')
        .map(str::to_string)
        .collect();

    ctx.record(capture.stdout, output, capture.returncode);
    Ok(())
}

/// Compare the whole stdout with the fixed help block.
pub fn verify_help_output(ctx: &ScenarioContext) -> Result<(), HarnessError> {
    let stdout = ctx.stdout.as_deref().ok_or(HarnessError::NothingCaptured)?;
    let text = std::str::from_utf8(stdout).map_err(|source| HarnessError::Decode { source })?;

    let normalized = expected::normalize_help(text);
    let wanted = expected::HELP_TEXT.trim();
    if normalized == wanted {
        return Ok(());
    }

    let diff = TextDiff::from_lines(wanted, normalized.as_str())
        .unified_diff()
        .header("expected", "actual")
        .to_string();
    Err(HarnessError::HelpMismatch {
        actual: text.replace('\t', "    "),
        expected: expected::HELP_TEXT.to_string(),
        diff,
    })
}

/// The version line must appear as a whole line of output.
pub fn verify_version_output(ctx: &ScenarioContext) -> Result<(), HarnessError> {
    verify_line(ctx, expected::VERSION_LINE)
}

/// The author credit must appear as a whole line of output.
pub fn verify_authors_output(ctx: &ScenarioContext) -> Result<(), HarnessError> {
    verify_line(ctx, expected::AUTHORS_LINE)
}

/// Succeed if any captured line equals `line` exactly.
pub fn verify_line(ctx: &ScenarioContext, line: &str) -> Result<(), HarnessError> {
    let output = ctx.output.as_ref().ok_or(HarnessError::NothingCaptured)?;
    if output.iter().any(|l| l == line) {
        debug!(line, "found expected line");
        return Ok(());
    }
    Err(HarnessError::MissingLine {
        line: line.to_string(),
        output: output.clone(),
    })
}

/// The last recorded exit code must equal `expected`.
pub fn verify_exit_code(ctx: &ScenarioContext, expected: i32) -> Result<(), HarnessError> {
    let actual = ctx.returncode.ok_or(HarnessError::NothingCaptured)?;
    if actual != expected {
        return Err(HarnessError::ExitCodeMismatch { actual, expected });
    }
    Ok(())
}
