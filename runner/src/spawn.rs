use crate::status::{ExecutionResult, LaunchError};
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Run a program directly from an argument vector, without a shell.
///
/// `argv[0]` is the program path and the remaining elements are its
/// arguments, handed over verbatim: no globbing, variable expansion or
/// quoting rules apply. The path is used as given, with no PATH search, so
/// it should be absolute or otherwise resolvable from the current
/// directory. Returns true only if the program could be launched and
/// exited normally with status code 0.
pub fn run_exec<S: AsRef<OsStr>>(argv: &[S]) -> bool {
    exec_status(argv, None).success()
}

/// Like [`run_exec`], but the child's standard output is redirected to
/// `output`, which is created (truncated if it already exists) with mode
/// 0644. On failure to open the target no child is spawned.
pub fn run_exec_redirect<P, S>(output: P, argv: &[S]) -> bool
where
    P: AsRef<Path>,
    S: AsRef<OsStr>,
{
    exec_status(argv, Some(output.as_ref())).success()
}

/// Spawn `argv`, optionally redirecting the child's stdout to `redirect`,
/// block until the child has been reaped, and decode its exit status.
///
/// This is the richer-taxonomy counterpart of [`run_exec`] and
/// [`run_exec_redirect`]; see [`ExecutionResult`] for the possible
/// outcomes.
pub fn exec_status<S: AsRef<OsStr>>(argv: &[S], redirect: Option<&Path>) -> ExecutionResult {
    let Some((program, args)) = argv.split_first() else {
        warn!("refusing to spawn an empty argument vector");
        return ExecutionResult::LaunchFailure(LaunchError::EmptyArgv);
    };
    let program = exec_path(Path::new(program.as_ref()));

    let mut cmd = Command::new(&program);
    cmd.args(args.iter().map(|a| a.as_ref()));

    if let Some(path) = redirect {
        match open_redirect(path) {
            Ok(file) => {
                cmd.stdout(Stdio::from(file));
            }
            Err(err) => {
                warn!("cannot open redirect target {}: {}", path.display(), err);
                return ExecutionResult::LaunchFailure(LaunchError::Redirect {
                    path: path.to_owned(),
                    source: err,
                });
            }
        }
    }

    // Unflushed parent output would otherwise be inherited by the child
    // and emitted a second time.
    let _ = io::stdout().flush();

    debug!("spawning {}", program.display());
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!("failed to spawn {}: {}", program.display(), err);
            return ExecutionResult::LaunchFailure(LaunchError::Spawn {
                path: program,
                source: err,
            });
        }
    };

    // Blocking here reaps the child, so a completed call can never leave
    // a zombie behind.
    match child.wait() {
        Ok(status) => ExecutionResult::from_status(status),
        Err(err) => {
            warn!("failed to wait for {}: {}", program.display(), err);
            ExecutionResult::WaitFailure(err)
        }
    }
}

/// Resolve `argv[0]` the way an execv-style primitive would: the path is
/// used as given and PATH is never consulted. A bare single-component name
/// therefore refers to a file in the current directory.
fn exec_path(program: &Path) -> PathBuf {
    let mut components = program.components();
    match (components.next(), components.next()) {
        // Pin a bare name to the current directory so the spawn primitive
        // does not fall back to a PATH lookup.
        (Some(_), None) if !program.is_absolute() => Path::new(".").join(program),
        _ => program.to_owned(),
    }
}

fn open_redirect(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    opts.open(path)
}
