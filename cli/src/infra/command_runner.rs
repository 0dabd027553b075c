//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. It waits for the
//! child with inherited stdio and kills it if the user presses Ctrl-C, so the
//! caller's cleanup runs before the process exits.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::InstallError;

/// Production `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| InstallError::InstallerUnavailable {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(program, ?args, pid = child.id(), "spawned installer");

        // A failed Ctrl-C registration disables that branch instead of
        // killing the child.
        tokio::select! {
            status = child.wait() => {
                let status = status.with_context(|| format!("waiting for {program}"))?;
                tracing::debug!(program, %status, "installer exited");
                Ok(status)
            }
            Ok(()) = tokio::signal::ctrl_c() => {
                tracing::warn!(program, "interrupted, killing installer");
                let _ = child.kill().await;
                Err(InstallError::Interrupted.into())
            }
        }
    }
}
