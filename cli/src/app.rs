//! Application context — unified state passed to the command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::infra::command_runner::TokioCommandRunner;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Project directory; the current directory when `None`.
    pub project_dir: Option<PathBuf>,
    /// Interpreter used to run pip.
    pub python: String,
}

/// Unified application context.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to the
/// command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Absolute directory holding `requirements.txt`.
    pub project_dir: PathBuf,
    /// Interpreter used to run pip.
    pub python: String,
    /// Process runner for the installer.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let project_dir = match flags.project_dir {
            Some(dir) => std::path::absolute(&dir)
                .with_context(|| format!("cannot resolve {}", dir.display()))?,
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        tracing::debug!(project_dir = %project_dir.display(), python = %flags.python, "context ready");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            project_dir,
            python: flags.python,
            runner: TokioCommandRunner::new(),
        })
    }
}
