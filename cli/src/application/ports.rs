//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::RawCredentials;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::InstallerUnavailable` if the program cannot be
    /// spawned, and `InstallError::Interrupted` if the user interrupts the
    /// wait. The child must not outlive an interrupted call.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an informational line.
    fn info(&self, message: &str);
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts where credentials come from (process environment, `.env`).
pub trait CredentialSource {
    /// Load credentials without validating them.
    fn load(&self) -> Result<RawCredentials>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations the install use-case needs.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `content` to `path` readable by the current user only.
    fn write_private(&self, path: &Path, content: &str) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;
}
