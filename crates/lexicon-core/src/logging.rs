//! Tracing setup for the `lexicon` binary.
//!
//! Events go to an append-only log file under the XDG state dir. Front ends
//! call [`init_logging_stderr`] when that file cannot be opened.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: store internals at debug, the rest at info.
pub const DEFAULT_FILTER: &str = "info,lexicon=debug,lexicon_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/lexicon/lexicon.log` (the directory is created if needed).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lexicon")?;
    xdg_dirs
        .place_state_file("lexicon.log")
        .context("create log dir")
}

/// Log to the default file. Returns the path in use.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    init_logging_at(&path)?;
    Ok(path)
}

/// Install the global subscriber, appending plain-text events to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init_logging_at(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir: {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("lexicon logging initialized at {}", path.display());
    Ok(())
}

/// Log to stderr only. A no-op if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
