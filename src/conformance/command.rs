use chrono::Utc;
use serde_json::json;

use crate::harness::{Harness, Launcher};
use crate::refusal::RefusalCode;

use super::checks::run_checks;
use super::report::ConformanceReport;

/// Execute `ccx-conformance check` against the configured program.
///
/// Returns (report, exit_code).
pub fn execute_check<L: Launcher>(harness: &Harness<L>, json_output: bool) -> (String, u8) {
    let program = harness.config().program.as_str();
    let started_at = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let report = match run_checks(harness) {
        Ok((checks, findings)) if findings.is_empty() => {
            ConformanceReport::ok(program, started_at, checks)
        }
        Ok((checks, findings)) => {
            ConformanceReport::invalid(program, started_at, checks, findings)
        }
        Err(e) => ConformanceReport::refusal(
            program,
            started_at,
            json!({
                "code": RefusalCode::for_error(&e).as_str(),
                "message": e.to_string(),
            }),
        ),
    };

    let output = if json_output {
        report.to_json()
    } else {
        report.to_human()
    };
    (output, report.exit_code())
}
