//! Log setup for the CLI: an append-only file under the XDG state dir, with
//! stderr as the fallback sink.
//!
//! Prompts show up here at debug level, after redaction.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,rrn_core=debug";

const LOG_FILE_NAME: &str = "rrn.log";

/// `$XDG_STATE_HOME/rrn/rrn.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("rrn")?;
    Ok(dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to [`default_log_path`] and returns
/// that path. Errors when the file cannot be opened or a subscriber is already
/// installed; the CLI then calls [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = default_log_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "rrn logging initialized");
    Ok(path)
}

/// Stderr-only logging. A no-op if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
