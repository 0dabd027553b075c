//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Install errors ────────────────────────────────────────────────────────────

/// Errors that abort an install run.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{var} is not set in your .env file!\nPlease add it to your .env file:\n  {var}={hint}")]
    MissingCredential {
        var: &'static str,
        hint: &'static str,
    },

    #[error("{} not found!", .0.display())]
    ManifestNotFound(PathBuf),

    #[error(
        "cannot run '{program}': {reason}\nInstall Python with pip, or point --python / REQINSTALL_PYTHON at an interpreter."
    )]
    InstallerUnavailable { program: String, reason: String },

    #[error("Failed to install requirements: command '{command}' {outcome}")]
    InstallerFailed { command: String, outcome: String },

    #[error("Interrupted while installing requirements.")]
    Interrupted,
}
