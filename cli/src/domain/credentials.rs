//! GitHub credentials: validation and display masking.
//!
//! Pure functions only — no I/O, no async, no environment access.

use std::fmt;

use serde::Deserialize;

use crate::domain::error::InstallError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
pub const TOKEN_VAR: &str = "GITHUB_PAT";

const USERNAME_HINT: &str = "your_github_username_here";
const TOKEN_HINT: &str = "your_github_personal_access_token_here";

/// Shown in place of tokens too short to reveal any part of.
pub const SHORT_TOKEN_MASK: &str = "****";

/// Tokens up to this many characters are fully masked.
const MASK_THRESHOLD: usize = 8;
const MASK_KEEP: usize = 4;

// ── Types ────────────────────────────────────────────────────────────────────

/// Credentials as read from the configuration source, before validation.
///
/// Field names follow `envy`'s lowercase mapping of `GITHUB_USERNAME` and
/// `GITHUB_PAT`.
#[derive(Debug, Default, Deserialize)]
pub struct RawCredentials {
    pub github_username: Option<String>,
    pub github_pat: Option<String>,
}

/// Validated, non-empty credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token in its display-safe form. See [`mask_token`].
    #[must_use]
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &self.masked_token())
            .finish()
    }
}

impl RawCredentials {
    /// Require both values to be present and non-empty.
    ///
    /// The username is checked first, so when both are missing the error
    /// names `GITHUB_USERNAME`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::MissingCredential`] naming the first missing value.
    pub fn validate(self) -> Result<Credentials, InstallError> {
        let username = non_empty(self.github_username).ok_or(InstallError::MissingCredential {
            var: USERNAME_VAR,
            hint: USERNAME_HINT,
        })?;
        let token = non_empty(self.github_pat).ok_or(InstallError::MissingCredential {
            var: TOKEN_VAR,
            hint: TOKEN_HINT,
        })?;
        Ok(Credentials { username, token })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ── Masking ──────────────────────────────────────────────────────────────────

/// Mask an access token for display.
///
/// Tokens longer than 8 characters keep their first and last 4 characters
/// joined by `...`; shorter tokens collapse to [`SHORT_TOKEN_MASK`].
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= MASK_THRESHOLD {
        return SHORT_TOKEN_MASK.to_string();
    }
    let head: String = chars[..MASK_KEEP].iter().collect();
    let tail: String = chars[chars.len() - MASK_KEEP..].iter().collect();
    format!("{head}...{tail}")
}

// ── Unit tests ───────────────────────────────────────────────────────────────
