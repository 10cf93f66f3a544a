//! Thin wrappers over child-process execution.
//!
//! This crate provides a minimal set of building blocks for launching child
//! processes: run a full command line through the system shell, or spawn a
//! program directly from an argument vector, optionally with its standard
//! output redirected to a file. It is intentionally small and easy to read,
//! suitable for coursework and experiments with process management.
//!
//! The public surface is three boolean-returning functions: [`run_shell`],
//! [`run_exec`] and [`run_exec_redirect`]. Each call spawns exactly one
//! child, blocks until it has been reaped, and collapses the outcome to
//! "did it exit normally with status code 0". Callers that need to know
//! *why* a run failed can use [`exec_status`] and [`shell_status`], which
//! return the full [`ExecutionResult`] instead of a boolean.
//!
//! Example
//! ```
//! use exec_commands::{run_exec, run_shell};
//! assert!(run_shell("true"));
//! assert!(run_exec(&["/bin/sh", "-c", "exit 0"]));
//! ```

mod shell;
mod spawn;
pub mod status;

pub use shell::{run_shell, shell_status};
pub use spawn::{exec_status, run_exec, run_exec_redirect};
pub use status::{ExecutionResult, LaunchError};
