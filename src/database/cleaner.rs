use tracing::debug;

use crate::error::HarnessError;
use crate::harness::{Harness, Launcher, ScenarioContext};

/// Flag that makes the writer drop all of its tables.
pub const DROP_TABLES_FLAG: &str = "--db-drop-tables";

/// Clears persisted state before a scenario initializes the database.
pub trait DatabaseCleaner {
    fn ensure_empty(&self, ctx: &mut ScenarioContext) -> Result<(), HarnessError>;
}

/// Clears the database through the writer's own `--db-drop-tables`.
///
/// Only liveness is checked: the process must start and exit.
///
/// The flag leaves behind the tables created by migrations, so the database
/// is not guaranteed to be empty afterwards. Scenarios that need a truly
/// empty database should plug in their own [`DatabaseCleaner`], for example
/// one that connects to the database directly.
pub struct DropTablesCleaner<'a, L> {
    harness: &'a Harness<L>,
}

impl<'a, L: Launcher> DropTablesCleaner<'a, L> {
    pub fn new(harness: &'a Harness<L>) -> Self {
        Self { harness }
    }
}

impl<L: Launcher> DatabaseCleaner for DropTablesCleaner<'_, L> {
    fn ensure_empty(&self, ctx: &mut ScenarioContext) -> Result<(), HarnessError> {
        let capture = self.harness.run_to_exit(ctx, DROP_TABLES_FLAG)?;
        debug!(returncode = capture.returncode, "tables dropped");
        Ok(())
    }
}

impl<F> DatabaseCleaner for F
where
    F: Fn(&mut ScenarioContext) -> Result<(), HarnessError>,
{
    fn ensure_empty(&self, ctx: &mut ScenarioContext) -> Result<(), HarnessError> {
        self(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use crate::harness::steps::tests::{capture, ScriptedLauncher};

    #[test]
    fn drop_tables_cleaner_only_checks_liveness() {
        let h = Harness::with_launcher(
            HarnessConfig::default(),
            ScriptedLauncher::replaying(vec![capture("relation does not exist\n", 1)]),
        );
        let mut ctx = ScenarioContext::new();

        DropTablesCleaner::new(&h).ensure_empty(&mut ctx).unwrap();
        let seen = h.launcher().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].args, vec![DROP_TABLES_FLAG]);
        assert!(ctx.output.is_none());
        assert!(ctx.returncode.is_none());
    }
}
