//! Logging init: one fmt subscriber, writing to the per-user log file or to
//! stderr.
//!
//! The filter comes from `PAGELINKS_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`]. Discarded link candidates are logged at `trace`, so
//! `PAGELINKS_LOG=pagelinks=trace` shows why a link is missing from the output.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when neither env variable holds a valid directive.
pub const DEFAULT_FILTER: &str = "info,pagelinks=debug";

/// Env variable checked before `RUST_LOG`.
pub const FILTER_ENV: &str = "PAGELINKS_LOG";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to this file, creating parent dirs.
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `~/.local/state/pagelinks/pagelinks.log`
    pub fn user_log_file() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("pagelinks")?;
        Ok(Self::File(
            xdg_dirs
                .get_state_home()
                .join("pagelinks")
                .join("pagelinks.log"),
        ))
    }
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `path` for appending, creating missing parent dirs.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Installs the global subscriber for `target`. Fails if the file can't be
/// opened or a subscriber is already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);
    match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("install log subscriber: {e}"))?;
            tracing::debug!("logging to {}", path.display());
        }
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow!("install log subscriber: {e}"))?,
    }
    Ok(())
}

/// File logging under the XDG state dir.
pub fn init_logging() -> Result<()> {
    init(&LogTarget::user_log_file()?)
}

/// Stderr logging, used when [`init_logging`] fails. Never panics.
pub fn init_logging_stderr() {
    let _ = init(&LogTarget::Stderr);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_filter_is_valid() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn open_log_file_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("pagelinks").join("pagelinks.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let err = open_log_file(&blocker.join("pagelinks.log")).unwrap_err();
        assert!(format!("{err:#}").contains("not-a-dir"));
    }
}
