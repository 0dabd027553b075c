//! `reqinstall` — substitute credentials into requirements.txt and run pip.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::install::{InstallRequest, install};
use crate::infra::config::EnvCredentialSource;
use crate::infra::fs::LocalFs;
use crate::output::TerminalReporter;

/// Run the install against the production filesystem, environment and runner.
///
/// # Errors
///
/// Returns an error if any install step fails. The transient manifest has
/// already been removed when this returns.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = TerminalReporter::new(&app.output);
    let source = EnvCredentialSource::from_process(&app.project_dir);
    let request = InstallRequest {
        project_dir: &app.project_dir,
        python: &app.python,
    };
    install(&source, &LocalFs, &app.runner, &reporter, &request).await
}
