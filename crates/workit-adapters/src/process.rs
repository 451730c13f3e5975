//! Child-process helpers shared by the tool adapters.
//!
//! All tool output is inherited so the operator sees it live; only the exit
//! status is inspected.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, trace, warn};
use workit_core::application::ports::CommandFailure;

/// How often a deadline-bounded child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Why a child process did not succeed.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start: {0}")]
    Spawn(#[source] io::Error),

    #[error("failed to wait for exit: {0}")]
    Wait(#[source] io::Error),

    #[error("{0}")]
    Status(ExitStatus),
}

/// How a deadline-bounded child ended.
#[derive(Debug)]
pub enum BoundedExit {
    Success,
    DeadlineExceeded,
    Failed(ProcessError),
}

/// Render a command the way an operator would type it.
pub fn render_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run to completion with inherited stdio.
pub fn run_streamed(cmd: &mut Command) -> Result<(), CommandFailure> {
    let rendered = render_command(cmd);
    debug!(command = %rendered, "Running command");

    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| CommandFailure::new(&rendered, ProcessError::Spawn(e).to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandFailure::new(
            rendered,
            ProcessError::Status(status).to_string(),
        ))
    }
}

/// Run with inherited stdio, killing the child once `deadline` passes.
pub fn run_until(cmd: &mut Command, deadline: Instant) -> BoundedExit {
    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn();

    match child {
        Ok(child) => wait_until(child, deadline),
        Err(e) => BoundedExit::Failed(ProcessError::Spawn(e)),
    }
}

fn wait_until(mut child: Child, deadline: Instant) -> BoundedExit {
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return BoundedExit::Success,
            Ok(Some(status)) => return BoundedExit::Failed(ProcessError::Status(status)),
            Ok(None) => {}
            Err(e) => return BoundedExit::Failed(ProcessError::Wait(e)),
        }

        let now = Instant::now();
        if now >= deadline {
            warn!(pid = child.id(), "Deadline passed, killing child process");
            if let Err(e) = child.kill() {
                // Already exited between the poll and the kill.
                trace!(error = %e, "Kill failed");
            }
            let _ = child.wait();
            return BoundedExit::DeadlineExceeded;
        }

        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}
