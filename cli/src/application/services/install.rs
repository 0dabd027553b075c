//! Application service — install requirements with substituted credentials.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, CredentialSource, LocalFs, ProgressReporter};
use crate::domain::manifest::{MANIFEST_FILE, TRANSIENT_FILE};
use crate::domain::{InstallError, substitute};

/// Inputs for a single install run.
pub struct InstallRequest<'a> {
    /// Directory holding `requirements.txt`; the transient file is written here too.
    pub project_dir: &'a Path,
    /// Interpreter used to run `-m pip`.
    pub python: &'a str,
}

/// The substituted manifest on disk. Removed when dropped.
///
/// Holds a credential in clear text, so every exit path out of [`install`]
/// drops it, including `?` returns and installer failures.
pub struct TransientManifest<'a, F: LocalFs> {
    fs: &'a F,
    path: PathBuf,
}

impl<'a, F: LocalFs> TransientManifest<'a, F> {
    /// Write `content` to `path` and take ownership of the file's lifetime.
    ///
    /// The guard exists before the write, so a partially written file is
    /// removed as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn create(fs: &'a F, path: PathBuf, content: &str) -> Result<Self> {
        let guard = Self { fs, path };
        guard.fs.write_private(&guard.path, content)?;
        tracing::debug!(path = %guard.path.display(), "transient manifest written");
        Ok(guard)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: LocalFs> Drop for TransientManifest<'_, F> {
    fn drop(&mut self) {
        if !self.fs.exists(&self.path) {
            return;
        }
        match self.fs.remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "transient manifest removed"),
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove transient manifest"
            ),
        }
    }
}

/// Run the install use-case.
///
/// Loads and validates credentials, substitutes them into the manifest,
/// writes the transient manifest, runs `<python> -m pip install -r <file>`
/// and removes the transient manifest whatever the outcome.
///
/// # Errors
///
/// Returns an error if a credential is missing, the manifest does not exist
/// or cannot be read, the transient file cannot be written, or the installer
/// cannot be run or exits unsuccessfully.
pub async fn install(
    source: &impl CredentialSource,
    fs: &impl LocalFs,
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    request: &InstallRequest<'_>,
) -> Result<()> {
    let creds = source.load()?.validate()?;

    let manifest = request.project_dir.join(MANIFEST_FILE);
    if !fs.exists(&manifest) {
        return Err(InstallError::ManifestNotFound(manifest).into());
    }
    let content = fs.read_to_string(&manifest)?;
    tracing::debug!(path = %manifest.display(), bytes = content.len(), "manifest loaded");

    let processed = substitute(&content, &creds);

    reporter.info(&format!("Using GitHub username: {}", creds.username()));
    reporter.info(&format!("Using GitHub PAT: {}", creds.masked_token()));

    let transient =
        TransientManifest::create(fs, request.project_dir.join(TRANSIENT_FILE), &processed)?;
    let transient_path = transient.path().to_string_lossy().into_owned();
    let args = ["-m", "pip", "install", "-r", transient_path.as_str()];

    reporter.step("Installing requirements...");
    let status = runner.run_status(request.python, &args).await?;
    if !status.success() {
        return Err(InstallError::InstallerFailed {
            command: format!("{} {}", request.python, args.join(" ")),
            outcome: describe_status(status),
        }
        .into());
    }

    reporter.success("Requirements installed successfully!");
    Ok(())
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("returned non-zero exit status {code}."),
        None => "was terminated by a signal.".to_string(),
    }
}
