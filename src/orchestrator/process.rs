//! Synchronous process execution
//!
//! The child inherits stdin/stdout/stderr and the call blocks until it exits.
//! A non-zero exit is reported in the [`ProcessOutcome`], never as an error;
//! only a failure to launch the program is an error.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::{AnnotoolError, Result};

use super::invocation::Invocation;

/// How the launched process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code reported by the process, `None` when killed by a signal
    pub code: Option<i32>,

    /// Terminating signal (unix only)
    pub signal: Option<i32>,
}

impl ProcessOutcome {
    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to pass through, following the shell convention `128 + signal`
    pub fn exit_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => 128 + signal,
            (None, None) => 1,
        }
    }
}

/// Launch `invocation` and wait for it to finish
#[tracing::instrument(skip_all, fields(program = %invocation.program))]
pub fn execute(invocation: &Invocation) -> Result<ProcessOutcome> {
    tracing::debug!(command = %invocation.command_line(), "launching");

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.working_dir)
        .envs(&invocation.env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| AnnotoolError::ProcessLaunchFailed {
            program: invocation.program.clone(),
            reason: e.to_string(),
        })?;

    let outcome = ProcessOutcome::from_status(status);
    if !outcome.success() {
        tracing::warn!(exit_code = outcome.exit_code(), "process exited unsuccessfully");
    }
    Ok(outcome)
}
