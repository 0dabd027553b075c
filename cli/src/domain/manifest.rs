//! Requirements manifest: file names and placeholder substitution.

use crate::domain::credentials::Credentials;

pub const MANIFEST_FILE: &str = "requirements.txt";
pub const TRANSIENT_FILE: &str = "requirements_temp.txt";

pub const USERNAME_PLACEHOLDER: &str = "${GITHUB_USERNAME}";
pub const TOKEN_PLACEHOLDER: &str = "${GITHUB_PAT}";

/// Replace every `${GITHUB_USERNAME}` and `${GITHUB_PAT}` in `content`.
///
/// Single left-to-right pass: substituted values are never rescanned, so a
/// username that happens to contain `${GITHUB_PAT}` stays literal. All other
/// bytes are copied unchanged.
#[must_use]
pub fn substitute(content: &str, creds: &Credentials) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(idx) = rest.find("${") {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if let Some(after) = tail.strip_prefix(USERNAME_PLACEHOLDER) {
            out.push_str(creds.username());
            rest = after;
        } else if let Some(after) = tail.strip_prefix(TOKEN_PLACEHOLDER) {
            out.push_str(creds.token());
            rest = after;
        } else {
            out.push_str("${");
            rest = &tail[2..];
        }
    }
    out.push_str(rest);
    out
}
