//! `.env` file parsing and layering with the process environment.
//!
//! Pure functions only. Locating and reading the file is done in
//! `crate::infra::config`.

use std::collections::HashMap;

pub const DOTENV_FILE: &str = ".env";

/// Parse `.env` content into key/value pairs, in file order.
///
/// One `KEY=VALUE` per line. Blank lines, `#` comments and lines without `=`
/// are skipped. Key and value are trimmed; a value wrapped in matching single
/// or double quotes is unwrapped.
#[must_use]
pub fn parse(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Merge `.env` entries under the process environment.
///
/// Process variables win, even when empty. Later `.env` lines win over
/// earlier ones.
#[must_use]
pub fn layer<I>(dotenv: Vec<(String, String)>, process: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut merged: HashMap<String, String> = dotenv.into_iter().collect();
    merged.extend(process);
    merged
}
