//! Write a string to a file, logging what was done.
//!
//! A minimal companion CLI to the `exec_commands` crate: it creates (or
//! truncates) a file and writes its text argument to it verbatim, with no
//! trailing newline. Parent directories are not created; pointing at a
//! missing directory is an error. Log output goes to stderr and is
//! filtered through `RUST_LOG`.

use anyhow::{Context, Result};
use argh::FromArgs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Write a string to a file.
#[derive(FromArgs)]
struct Args {
    /// path of the file to write; its parent directory must already exist
    #[argh(positional)]
    file: PathBuf,

    /// text written to the file verbatim
    #[argh(positional)]
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    if let Err(err) = write_file(&args.file, &args.text) {
        error!("{:#}", err);
        return Err(err);
    }
    Ok(())
}

fn write_file(file: &Path, text: &str) -> Result<()> {
    debug!("writing {:?} to {}", text, file.display());
    fs::write(file, text).with_context(|| format!("failed to write {}", file.display()))
}
