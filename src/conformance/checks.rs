use crate::digest::hash_bytes;
use crate::error::HarnessError;
use crate::expected::normalize_help;
use crate::harness::{
    verify_authors_output, verify_help_output, verify_version_output, Harness, Launcher,
    ScenarioContext,
};

use super::report::{ConformanceChecks, Finding};

const HELP_FLAG: &str = "--help";
const VERSION_FLAG: &str = "--version";
const AUTHORS_FLAG: &str = "--authors";

/// Run the non-destructive checks against the configured program.
///
/// Every check gets its own scenario context. Returns (checks, findings);
/// an `Err` means the program could not be run at all.
pub fn run_checks<L: Launcher>(
    harness: &Harness<L>,
) -> Result<(ConformanceChecks, Vec<Finding>), HarnessError> {
    let mut checks = ConformanceChecks::default();
    let mut findings = Vec::new();

    // Check 1: help block, verbatim
    let first_digest = match help_run(harness) {
        Ok((digest, verdict)) => {
            match verdict {
                Ok(()) => checks.help = true,
                Err(e) => findings.push(Finding::from_error(HELP_FLAG, &e)),
            }
            Some(digest)
        }
        Err(e) if e.is_refusal() => return Err(e),
        Err(e) => {
            findings.push(Finding::from_error(HELP_FLAG, &e));
            None
        }
    };

    // Check 2: a second help run prints the same text, conforming or not
    match help_run(harness) {
        Ok((second, _)) => match first_digest {
            Some(first) if first == second => checks.help_idempotent = true,
            Some(first) => findings.push(Finding {
                expected: Some(first),
                actual: Some(second),
                ..Finding::new("HELP_NOT_IDEMPOTENT", HELP_FLAG)
            }),
            // first run already reported
            None => {}
        },
        Err(e) if e.is_refusal() => return Err(e),
        Err(e) => {
            if first_digest.is_some() {
                findings.push(Finding::from_error(HELP_FLAG, &e));
            }
        }
    }

    // Check 3: version line
    match line_check(harness, VERSION_FLAG, verify_version_output) {
        Ok(()) => checks.version = true,
        Err(e) if e.is_refusal() => return Err(e),
        Err(e) => findings.push(line_finding(VERSION_FLAG, "VERSION_MISSING", &e)),
    }

    // Check 4: authors line
    match line_check(harness, AUTHORS_FLAG, verify_authors_output) {
        Ok(()) => checks.authors = true,
        Err(e) if e.is_refusal() => return Err(e),
        Err(e) => findings.push(line_finding(AUTHORS_FLAG, "AUTHORS_MISSING", &e)),
    }

    Ok((checks, findings))
}

/// Launch with `--help` and return the digest of the normalized text
/// together with the verdict of the literal comparison.
fn help_run<L: Launcher>(
    harness: &Harness<L>,
) -> Result<(String, Result<(), HarnessError>), HarnessError> {
    let mut ctx = ScenarioContext::new();
    harness.launch_with_flag(&mut ctx, HELP_FLAG)?;

    // launch_with_flag already rejected undecodable output
    let stdout = ctx.stdout.as_deref().unwrap_or_default();
    let digest = hash_bytes(normalize_help(&String::from_utf8_lossy(stdout)).as_bytes());
    Ok((digest, verify_help_output(&ctx)))
}

fn line_check<L: Launcher>(
    harness: &Harness<L>,
    flag: &str,
    verify: fn(&ScenarioContext) -> Result<(), HarnessError>,
) -> Result<(), HarnessError> {
    let mut ctx = ScenarioContext::new();
    harness.launch_with_flag(&mut ctx, flag)?;
    verify(&ctx)
}

fn line_finding(flag: &str, missing_code: &str, error: &HarnessError) -> Finding {
    let mut finding = Finding::from_error(flag, error);
    if matches!(error, HarnessError::MissingLine { .. }) {
        finding.code = missing_code.to_string();
    }
    finding
}
