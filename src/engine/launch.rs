//! Starting the real ffmpeg and forwarding its exit code.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

/// Exit code used when the proxy itself cannot start ffmpeg
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("ffmpeg not found at \"{}\"", .0.display())]
    NotFound(PathBuf),

    #[error("failed to launch \"{}\": {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        LAUNCH_FAILURE_EXIT_CODE
    }
}

/// Fail early if `program` is not an existing file
pub fn ensure_executable(program: &Path) -> Result<(), LaunchError> {
    if program.is_file() {
        Ok(())
    } else {
        Err(LaunchError::NotFound(program.to_path_buf()))
    }
}

/// Exit code to forward for a finished child.
/// A child killed without a code (e.g. by a signal) reports the launch failure code.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE)
}

/// Run `program` with `args`, sharing our stdio, and wait for it
pub fn run(program: &Path, args: &[String]) -> Result<i32, LaunchError> {
    ensure_executable(program)?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!(program = %program.display(), argc = args.len(), "launching ffmpeg");

    let status = cmd.status().map_err(|source| LaunchError::Spawn {
        path: program.to_path_buf(),
        source,
    })?;

    let code = exit_code_of(&status);
    info!(code, "ffmpeg exited");
    Ok(code)
}
