//! Outcome types for a single child-process execution.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Why a child process could not be launched.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The argument vector was empty; there is no program to run.
    #[error("empty argument vector")]
    EmptyArgv,

    /// The spawn call itself failed, e.g. the program is missing or not
    /// executable.
    #[error("failed to spawn {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stdout redirect target could not be opened for writing.
    #[error("failed to open redirect target {path}: {source}")]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a single child-process execution.
///
/// The boolean API collapses this via [`ExecutionResult::success`]; the
/// variants are kept so tests and diagnostics can tell a launch failure
/// apart from a program that ran and then failed.
#[derive(Debug)]
pub enum ExecutionResult {
    /// The child exited normally with status code 0.
    Success,
    /// The child exited normally with a nonzero status code.
    NonZeroExit(i32),
    /// The child was terminated by the given signal.
    Signaled(i32),
    /// No child ran: spawning or redirect setup failed.
    LaunchFailure(LaunchError),
    /// A child was spawned but its exit status could not be retrieved.
    WaitFailure(io::Error),
}

impl ExecutionResult {
    /// The collapse applied at the public boundary: only a normal exit with
    /// status code 0 counts as success.
    pub fn success(&self) -> bool {
        matches!(self, ExecutionResult::Success)
    }

    /// Decode a reaped child's [`ExitStatus`].
    pub(crate) fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => ExecutionResult::Success,
            Some(code) => ExecutionResult::NonZeroExit(code),
            None => ExecutionResult::Signaled(termination_signal(status)),
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    ExitStatusExt::signal(&status).unwrap_or(-1)
}

#[cfg(not(unix))]
fn termination_signal(_status: ExitStatus) -> i32 {
    -1
}
