//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Install requirements.txt with GitHub credentials substituted from the
/// environment or a .env file
#[derive(Parser)]
#[command(name = "reqinstall", version)]
pub struct Cli {
    /// Directory containing requirements.txt [default: current directory]
    #[arg(long, env = "REQINSTALL_PROJECT_DIR", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Python interpreter used to run pip
    #[arg(
        long,
        env = "REQINSTALL_PYTHON",
        default_value = "python3",
        value_name = "PROGRAM"
    )]
    pub python: String,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the install.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory cannot be resolved or the
    /// install fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            project_dir,
            python,
            quiet,
            no_color,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags { no_color, quiet },
            project_dir,
            python,
        })?;
        commands::install::run(&app).await
    }
}
