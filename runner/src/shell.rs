use crate::spawn::exec_status;
use crate::status::ExecutionResult;
use tracing::debug;

/// Path of the command interpreter used by [`run_shell`].
const SHELL: &str = "/bin/sh";

/// Run a full command line through the system shell.
///
/// The string is handed to `/bin/sh -c` exactly as a user would type it,
/// so shell metacharacters, pipes and expansions are honored. Returns true
/// only if the interpreter could be invoked and the command line exited
/// normally with status code 0; interpreter failures (including syntax
/// errors) and nonzero exits all collapse to false.
pub fn run_shell(command: &str) -> bool {
    shell_status(command).success()
}

/// Richer-taxonomy counterpart of [`run_shell`].
pub fn shell_status(command: &str) -> ExecutionResult {
    debug!("delegating to {}: {}", SHELL, command);
    exec_status(&[SHELL, "-c", command], None)
}
