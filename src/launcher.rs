//! Spawning external commands and reaping them.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// How a child process terminated.
///
/// Signal termination is its own case; callers decide how to surface it
/// rather than having it silently folded into an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The child exited normally with this code (0–255).
    Exited(i32),
    /// The child was terminated by this signal.
    Signaled(i32),
}

impl ExitOutcome {
    /// The shell-visible status for this outcome.
    ///
    /// Normal exits carry their own code; signal deaths map to
    /// `128 + signal`, the convention interactive shells use.
    pub fn status(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled(signal) => 128 + signal,
        }
    }
}

/// Why a child could not be started.
///
/// Exec failure never re-enters shell logic: `Command::spawn` confines it
/// to an error in the parent, which this enum classifies so the caller can
/// map it onto the conventional 127/126 statuses.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable path does not exist (→ status 127).
    #[error("not found")]
    NotFound,
    /// The path exists but cannot be executed, for lack of permission or a
    /// bad image format (→ status 126).
    #[error("permission denied")]
    NotExecutable,
    /// Process creation itself failed, e.g. resource exhaustion.
    #[error("cannot spawn: {0}")]
    Spawn(io::Error),
}

#[cfg(unix)]
const ENOEXEC: i32 = 8;

fn classify(err: io::Error) -> LaunchError {
    match err.kind() {
        io::ErrorKind::NotFound => LaunchError::NotFound,
        io::ErrorKind::PermissionDenied => LaunchError::NotExecutable,
        #[cfg(unix)]
        _ if err.raw_os_error() == Some(ENOEXEC) => LaunchError::NotExecutable,
        _ => LaunchError::Spawn(err),
    }
}

/// Run `path` with `args` as a child process and wait for it to terminate.
///
/// The child inherits the parent's environment and standard streams. The
/// wait only completes on actual termination; job-control stops are not
/// reported by [`std::process::Child::wait`], so a stopped child keeps the
/// shell blocked until it exits or dies.
pub fn run(path: &Path, args: &[String]) -> Result<ExitOutcome, LaunchError> {
    let mut child = Command::new(path).args(args).spawn().map_err(classify)?;
    let status = child.wait().map_err(LaunchError::Spawn)?;
    Ok(translate(status))
}

#[cfg(unix)]
fn translate(status: ExitStatus) -> ExitOutcome {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => ExitOutcome::Exited(code),
        None => ExitOutcome::Signaled(status.signal().unwrap_or(0)),
    }
}

#[cfg(not(unix))]
fn translate(status: ExitStatus) -> ExitOutcome {
    ExitOutcome::Exited(status.code().unwrap_or(1))
}
