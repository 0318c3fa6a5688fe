//! Blocking external command execution shared by the adapters.

use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::domain::AppError;

/// Run a command to completion, capturing stdout and stderr.
///
/// Fails when the program cannot be spawned or exits unsuccessfully.
pub(crate) fn run_capture<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
) -> Result<String, AppError> {
    let output = output(program, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Like [`run_capture`], but an unsuccessful exit yields `None`.
///
/// Only a failure to spawn the program is an error.
pub(crate) fn run_capture_optional<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
) -> Result<Option<String>, AppError> {
    let label = describe(program.as_ref(), args);
    debug!(command = %label, "reading");

    let output =
        Command::new(program.as_ref()).args(args).output().map_err(|err| AppError::external(&label, err))?;

    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
}

/// Run a command with inherited stdio so the operator sees its progress.
pub(crate) fn run_inherit<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    envs: &[(&str, &str)],
) -> Result<(), AppError> {
    let label = describe(program.as_ref(), args);
    debug!(command = %label, "running");

    let status = Command::new(program.as_ref())
        .args(args)
        .envs(envs.iter().copied())
        .stdin(Stdio::inherit())
        .status()
        .map_err(|err| AppError::external(&label, err))?;

    if !status.success() {
        return Err(AppError::external(&label, status));
    }
    Ok(())
}

/// Whether a command exits successfully. Spawn failures count as failure.
pub(crate) fn succeeds<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> bool {
    let label = describe(program.as_ref(), args);
    debug!(command = %label, "probing");

    Command::new(program.as_ref())
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn output<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> Result<Output, AppError> {
    let label = describe(program.as_ref(), args);
    debug!(command = %label, "running");

    let output =
        Command::new(program.as_ref()).args(args).output().map_err(|err| AppError::external(&label, err))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::external(
            &label,
            if stderr.is_empty() { output.status.to_string() } else { stderr },
        ));
    }

    Ok(output)
}

fn describe<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> String {
    let mut label = program.to_string_lossy().into_owned();
    for arg in args {
        label.push(' ');
        label.push_str(&arg.as_ref().to_string_lossy());
    }
    label
}
