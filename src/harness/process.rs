use std::io::Read;
use std::process::{Child, ChildStderr, ChildStdout, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::error::HarnessError;

use super::context::ScenarioContext;
use super::invocation::{Capture, Invocation, StreamPolicy};

/// Runs one invocation to completion.
///
/// Implementations spawn the program, register its termination as a
/// scenario cleanup, drain its output until the streams close and wait for
/// it to exit. Literal checks only ever see the returned [`Capture`].
pub trait Launcher {
    fn run(&self, invocation: &Invocation, ctx: &mut ScenarioContext)
        -> Result<Capture, HarnessError>;
}

/// Launcher backed by real OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn run(
        &self,
        invocation: &Invocation,
        ctx: &mut ScenarioContext,
    ) -> Result<Capture, HarnessError> {
        let process = SpawnedProcess::spawn(invocation)?;
        let terminator = process.terminator();
        ctx.add_cleanup(move || {
            terminator.terminate();
        });
        process.communicate()
    }
}

enum Streams {
    Merged(std::io::PipeReader),
    Separate(Option<ChildStdout>, Option<ChildStderr>),
}

/// A running child whose output has not been drained yet.
pub struct SpawnedProcess {
    program: String,
    child: Arc<Mutex<Child>>,
    streams: Streams,
}

impl SpawnedProcess {
    pub fn spawn(invocation: &Invocation) -> Result<Self, HarnessError> {
        let launch_err = |source: std::io::Error| HarnessError::Launch {
            program: invocation.program.clone(),
            source,
        };

        debug!(command = %invocation.display(), "spawning");

        let (child, streams) = {
            let mut cmd = Command::new(&invocation.program);
            cmd.args(&invocation.args);

            match invocation.streams {
                StreamPolicy::Merged => {
                    let (reader, writer) = std::io::pipe().map_err(launch_err)?;
                    let writer_for_stderr = writer.try_clone().map_err(launch_err)?;
                    cmd.stdout(writer).stderr(writer_for_stderr);
                    let child = cmd.spawn().map_err(launch_err)?;
                    (child, Streams::Merged(reader))
                }
                StreamPolicy::Separate => {
                    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
                    let mut child = cmd.spawn().map_err(launch_err)?;
                    let streams = Streams::Separate(child.stdout.take(), child.stderr.take());
                    (child, streams)
                }
            }
            // `cmd` drops here, closing our copies of the pipe's write end.
        };

        Ok(Self {
            program: invocation.program.clone(),
            child: Arc::new(Mutex::new(child)),
            streams,
        })
    }

    pub fn id(&self) -> u32 {
        lock(&self.child).id()
    }

    /// Handle that can kill the process later.
    pub fn terminator(&self) -> Terminator {
        Terminator {
            program: self.program.clone(),
            child: Arc::clone(&self.child),
        }
    }

    /// Read all output until EOF, then wait for the process to exit.
    pub fn communicate(self) -> Result<Capture, HarnessError> {
        let io_err = |source: std::io::Error| HarnessError::Io {
            program: self.program.clone(),
            source,
        };

        let (stdout, stderr) = match self.streams {
            Streams::Merged(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).map_err(io_err)?;
                (buf, None)
            }
            Streams::Separate(out, err) => read_separately(out, err).map_err(io_err)?,
        };

        let status = lock(&self.child).wait().map_err(io_err)?;
        let returncode = returncode(status);
        debug!(program = %self.program, returncode, bytes = stdout.len(), "process exited");

        Ok(Capture {
            stdout,
            stderr,
            returncode,
        })
    }
}

fn read_separately(
    out: Option<ChildStdout>,
    err: Option<ChildStderr>,
) -> std::io::Result<(Vec<u8>, Option<Vec<u8>>)> {
    std::thread::scope(|s| {
        let stderr_reader = s.spawn(move || -> std::io::Result<Vec<u8>> {
            let mut buf = Vec::new();
            if let Some(mut err) = err {
                err.read_to_end(&mut buf)?;
            }
            Ok(buf)
        });

        let mut stdout = Vec::new();
        if let Some(mut out) = out {
            out.read_to_end(&mut stdout)?;
        }

        let stderr = stderr_reader
            .join()
            .map_err(|_| std::io::Error::other("stderr reader panicked"))??;
        Ok((stdout, Some(stderr)))
    })
}

/// Kills a spawned process if it is still running.
#[derive(Clone)]
pub struct Terminator {
    program: String,
    child: Arc<Mutex<Child>>,
}

impl Terminator {
    /// Returns true if the process was still alive and got killed.
    pub fn terminate(&self) -> bool {
        let mut child = lock(&self.child);
        if let Ok(Some(_)) = child.try_wait() {
            return false;
        }
        warn!(program = %self.program, pid = child.id(), "terminating process left running");
        if let Err(e) = child.kill() {
            warn!(program = %self.program, error = %e, "kill failed");
            return false;
        }
        let _ = child.wait();
        true
    }
}

fn lock(child: &Mutex<Child>) -> MutexGuard<'_, Child> {
    child.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Exit code, or the negated signal number for signal deaths, else -1.
fn returncode(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
