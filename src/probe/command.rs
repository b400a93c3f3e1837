use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use serde_json::json;

use crate::cli::ExitCode;
use crate::digest::hash_bytes;
use crate::harness::{Harness, Launcher, ScenarioContext};
use crate::refusal::RefusalEnvelope;

/// JSON record of one probed invocation.
#[derive(Debug, Serialize)]
pub struct ProbeRecord<'a> {
    pub flag: &'a str,
    pub returncode: i32,
    pub output: &'a [String],
    pub stdout_base64: String,
    pub stdout_sha256: String,
}

/// Execute `ccx-conformance probe <FLAG>`.
///
/// Launches the program with `flag`, accepting exit code 0 or `accepted`.
/// Returns (output, exit_code).
pub fn execute_probe<L: Launcher>(
    harness: &Harness<L>,
    flag: &str,
    accepted: i32,
    json_output: bool,
) -> (String, u8) {
    let mut ctx = ScenarioContext::new();

    if let Err(e) = harness.launch_with_flag_accepting(&mut ctx, flag, accepted) {
        if e.is_refusal() {
            let envelope = RefusalEnvelope::from_harness_error(
                &harness.config().program,
                &e,
                Some(json!({ "flag": flag })),
            );
            return (envelope.to_json(), ExitCode::Refusal.into());
        }
        let output = if json_output {
            json!({
                "flag": flag,
                "outcome": "INVALID",
                "code": e.code(),
                "message": e.to_string(),
            })
            .to_string()
        } else {
            format!("ccx-conformance probe {flag}: INVALID\n  {e}")
        };
        return (output, ExitCode::Invalid.into());
    }

    let stdout = ctx.stdout.as_deref().unwrap_or_default();
    let lines = ctx.output.as_deref().unwrap_or_default();
    let returncode = ctx.returncode.unwrap_or_default();

    let output = if json_output {
        let record = ProbeRecord {
            flag,
            returncode,
            output: lines,
            stdout_base64: BASE64.encode(stdout),
            stdout_sha256: hash_bytes(stdout),
        };
        serde_json::to_string_pretty(&record).expect("probe record serialization cannot fail")
    } else {
        format!(
            "{}\n(exit code {returncode})",
            String::from_utf8_lossy(stdout).trim_end()
        )
    };
    (output, ExitCode::Success.into())
}
