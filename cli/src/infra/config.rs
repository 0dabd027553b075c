//! Infrastructure implementation of the `CredentialSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::CredentialSource;
use crate::domain::RawCredentials;
use crate::domain::credentials::{TOKEN_VAR, USERNAME_VAR};
use crate::domain::dotenv::{self, DOTENV_FILE};

/// Reads credentials from the process environment, falling back to the
/// nearest `.env` file at or above `search_from`.
pub struct EnvCredentialSource {
    search_from: PathBuf,
    vars: Vec<(String, String)>,
}

impl EnvCredentialSource {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process(search_from: &Path) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::with_vars(search_from, vars)
    }

    /// Use an explicit set of variables in place of the process environment.
    #[must_use]
    pub fn with_vars(search_from: &Path, vars: Vec<(String, String)>) -> Self {
        Self {
            search_from: search_from.to_path_buf(),
            vars,
        }
    }

    /// The `.env` file that would be read, if any.
    #[must_use]
    pub fn dotenv_path(&self) -> Option<PathBuf> {
        self.search_from
            .ancestors()
            .map(|dir| dir.join(DOTENV_FILE))
            .find(|path| path.is_file())
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> Result<RawCredentials> {
        let file_vars = match self.dotenv_path() {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                tracing::debug!(path = %path.display(), "using .env file");
                dotenv::parse(&content)
            }
            None => {
                tracing::debug!(search_from = %self.search_from.display(), "no .env file found");
                Vec::new()
            }
        };

        // envy folds key case, so anything but the exact names must not reach it.
        let merged = dotenv::layer(file_vars, self.vars.iter().cloned())
            .into_iter()
            .filter(|(key, _)| key == USERNAME_VAR || key == TOKEN_VAR);
        envy::from_iter::<_, RawCredentials>(merged)
            .context("cannot parse credential configuration")
    }
}
