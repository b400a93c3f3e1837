//! Database preconditioning through the writer binary

pub mod cleaner;
pub mod command;

pub use cleaner::{DatabaseCleaner, DropTablesCleaner, DROP_TABLES_FLAG};

use tracing::debug;

use crate::error::HarnessError;
use crate::harness::{Harness, Launcher, ScenarioContext};

/// Flag that creates the migration bookkeeping table.
pub const INIT_MIGRATION_FLAG: &str = "--db-init-migration";

/// Flag that creates tables and indexes and fills the table of keys.
pub const INIT_FLAG: &str = "--db-init";

/// Leave the database empty but with every table present.
///
/// Runs, strictly one after another: the emptiness collaborator, the
/// program with `--db-init-migration`, the program with `--db-init`. Each
/// process has exited before the next one starts. Exit codes are not
/// checked and the context's output fields are not touched.
pub fn ensure_database_preconditioned<L, C>(
    harness: &Harness<L>,
    cleaner: &C,
    ctx: &mut ScenarioContext,
) -> Result<(), HarnessError>
where
    L: Launcher,
    C: DatabaseCleaner + ?Sized,
{
    cleaner.ensure_empty(ctx)?;

    for flag in [INIT_MIGRATION_FLAG, INIT_FLAG] {
        let capture = harness.run_to_exit(ctx, flag)?;
        debug!(flag, returncode = capture.returncode, "database step finished");
    }
    Ok(())
}
