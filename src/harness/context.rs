use std::fmt;

type Cleanup = Box<dyn FnOnce() + Send + Sync>;

/// Mutable state shared by the steps of one scenario.
///
/// Cleanups registered with [`ScenarioContext::add_cleanup`] run in reverse
/// registration order when the context is dropped, whether the scenario
/// passed or failed.
#[derive(Default)]
pub struct ScenarioContext {
    /// Decoded stdout split on `\n`.
    pub output: Option<Vec<String>>,
    /// Raw captured stdout (stderr merged in).
    pub stdout: Option<Vec<u8>>,
    /// Separately captured stderr; `None` when streams were merged.
    pub stderr: Option<Vec<u8>>,
    /// Exit status of the last captured process.
    pub returncode: Option<i32>,
    cleanups: Vec<Cleanup>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action to run when the scenario ends.
    pub fn add_cleanup<F>(&mut self, cleanup: F)
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Number of cleanups still pending.
    pub fn pending_cleanups(&self) -> usize {
        self.cleanups.len()
    }

    /// Run all pending cleanups now, newest first.
    pub fn run_cleanups(&mut self) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup();
        }
    }

    /// Store a validated capture. All fields change together.
    pub(crate) fn record(&mut self, stdout: Vec<u8>, output: Vec<String>, returncode: i32) {
        self.output = Some(output);
        self.stdout = Some(stdout);
        self.stderr = None;
        self.returncode = Some(returncode);
    }
}

impl fmt::Debug for ScenarioContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioContext")
            .field("output", &self.output)
            .field("stdout_len", &self.stdout.as_ref().map(Vec::len))
            .field("stderr", &self.stderr)
            .field("returncode", &self.returncode)
            .field("pending_cleanups", &self.cleanups.len())
            .finish()
    }
}

impl Drop for ScenarioContext {
    fn drop(&mut self) {
        self.run_cleanups();
    }
}
