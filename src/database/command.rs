use serde_json::json;

use crate::cli::ExitCode;
use crate::harness::{Harness, Launcher, ScenarioContext};
use crate::refusal::RefusalEnvelope;

use super::{ensure_database_preconditioned, DropTablesCleaner};

/// Execute `ccx-conformance prepare-db`.
///
/// Each round runs in its own scenario context, so processes left behind by
/// one round are terminated before the next starts. Returns (output, exit_code).
pub fn execute_prepare_db<L: Launcher>(harness: &Harness<L>, rounds: u32) -> (String, u8) {
    let cleaner = DropTablesCleaner::new(harness);

    for round in 1..=rounds {
        let mut ctx = ScenarioContext::new();
        if let Err(e) = ensure_database_preconditioned(harness, &cleaner, &mut ctx) {
            let envelope = RefusalEnvelope::from_harness_error(
                &harness.config().program,
                &e,
                Some(json!({ "round": round })),
            );
            return (envelope.to_json(), ExitCode::Refusal.into());
        }
        tracing::info!(round, "database preconditioned");
    }

    (
        format!("DATABASE_PREPARED rounds={rounds}"),
        ExitCode::Success.into(),
    )
}
