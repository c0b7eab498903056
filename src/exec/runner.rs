// src/exec/runner.rs

//! Run a single external command to completion.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{DockjobError, Result};
use crate::exec::command::{CommandOutput, CommandSpec, OutputMode};

/// Spawn `spec`, wait for it (bounded by `timeout` when set), and map any
/// failure onto `DockjobError`.
///
/// - spawn errors (binary missing, permission denied) and nonzero exits both
///   become `CommandFailed`, carrying stderr or the OS error text verbatim.
/// - an expired timeout becomes `CommandTimedOut`; the child is killed
///   because the wait future owns it and `kill_on_drop` is set.
/// - stdin is always closed: the adapter's own stdin carries the protocol.
pub async fn run_command(spec: &CommandSpec, timeout: Option<Duration>) -> Result<CommandOutput> {
    let command_line = spec.to_string();
    debug!(command = %command_line, output = ?spec.output, "running command");

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    match spec.output {
        OutputMode::Capture => {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        }
        OutputMode::Inherit => {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }
    }

    let child = cmd.spawn().map_err(|e| DockjobError::CommandFailed {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let wait = child.wait_with_output();
    let waited = match timeout {
        Some(limit) => match tokio::time::timeout(limit, wait).await {
            Ok(res) => res,
            Err(_) => {
                warn!(command = %command_line, secs = limit.as_secs(), "command timed out; killing it");
                return Err(DockjobError::CommandTimedOut {
                    command: command_line,
                    secs: limit.as_secs(),
                });
            }
        },
        None => wait.await,
    };

    let output = waited.map_err(|e| DockjobError::CommandFailed {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let code = output.status.code().unwrap_or(-1);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("exit status {code}"),
            text => text.to_string(),
        };
        info!(command = %command_line, exit_code = code, "command failed");
        return Err(DockjobError::CommandFailed {
            command: command_line,
            message,
        });
    }

    debug!(command = %command_line, exit_code = code, "command finished");
    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}
