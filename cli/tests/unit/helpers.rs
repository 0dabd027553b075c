//! Shared test helpers: in-memory port implementations and status constructors.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use reqinstall_cli::application::ports::{
    CommandRunner, CredentialSource, LocalFs, ProgressReporter,
};
use reqinstall_cli::domain::{InstallError, RawCredentials};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Credentials ──────────────────────────────────────────────────────────────

/// Fixed credentials, as if already merged from env and `.env`.
pub struct StaticCredentials {
    pub username: Option<&'static str>,
    pub token: Option<&'static str>,
}

impl StaticCredentials {
    pub fn alice() -> Self {
        Self {
            username: Some("alice"),
            token: Some("abcdefgh1234"),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn load(&self) -> Result<RawCredentials> {
        Ok(RawCredentials {
            github_username: self.username.map(str::to_string),
            github_pat: self.token.map(str::to_string),
        })
    }
}

/// A configuration source that cannot be read at all.
pub struct BrokenCredentials;

impl CredentialSource for BrokenCredentials {
    fn load(&self) -> Result<RawCredentials> {
        anyhow::bail!("cannot read /project/.env: permission denied")
    }
}

// ── Filesystem ───────────────────────────────────────────────────────────────

/// In-memory filesystem recording every write and removal.
#[derive(Default)]
pub struct MemFs {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub writes: RefCell<Vec<PathBuf>>,
    pub removed: RefCell<Vec<PathBuf>>,
    /// When set, `write_private` stores a truncated file and then fails.
    pub fail_write: bool,
}

impl MemFs {
    pub fn with_file(path: impl Into<PathBuf>, content: &str) -> Self {
        let fs = Self::default();
        fs.files.borrow_mut().insert(path.into(), content.to_string());
        fs
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl LocalFs for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.content(path)
            .ok_or_else(|| anyhow::anyhow!("reading file {}: not found", path.display()))
    }

    fn write_private(&self, path: &Path, content: &str) -> Result<()> {
        self.writes.borrow_mut().push(path.to_path_buf());
        if self.fail_write {
            let half = &content[..content.len() / 2];
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), half.to_string());
            anyhow::bail!("writing file {}: disk full", path.display());
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.removed.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("removing file {}: not found", path.display()))
    }
}

// ── Command runner ───────────────────────────────────────────────────────────

/// What the fake installer does when invoked.
#[derive(Clone, Copy)]
pub enum Outcome {
    Exit(i32),
    Unavailable,
    Interrupted,
}

/// One recorded installer invocation.
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    /// Content of the `-r` file at the moment the installer ran.
    pub manifest_seen: Option<String>,
}

/// Runner that records calls and peeks at the `-r` file through `fs`.
pub struct RecordingRunner<'a> {
    pub fs: &'a MemFs,
    pub outcome: Outcome,
    pub calls: RefCell<Vec<Call>>,
}

impl<'a> RecordingRunner<'a> {
    pub fn new(fs: &'a MemFs, outcome: Outcome) -> Self {
        Self {
            fs,
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner<'_> {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let manifest_seen = args
            .iter()
            .position(|a| *a == "-r")
            .and_then(|i| args.get(i + 1))
            .and_then(|p| self.fs.content(Path::new(p)));
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            manifest_seen,
        });
        match self.outcome {
            Outcome::Exit(code) => Ok(exit_status(code)),
            Outcome::Unavailable => Err(InstallError::InstallerUnavailable {
                program: program.to_string(),
                reason: "No such file or directory (os error 2)".to_string(),
            }
            .into()),
            Outcome::Interrupted => Err(InstallError::Interrupted.into()),
        }
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Reporter that keeps every line, tagged with its level.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn joined(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl ProgressReporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(format!("info: {message}"));
    }

    fn step(&self, message: &str) {
        self.lines.borrow_mut().push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.lines.borrow_mut().push(format!("success: {message}"));
    }
}
