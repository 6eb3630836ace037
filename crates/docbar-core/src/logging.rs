//! Logging init: append to a file in the XDG state dir, or stderr as fallback.
//!
//! Stdout carries the rendered fragment, so log output never goes there.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const APP_PREFIX: &str = "docbar";
const LOG_FILE: &str = "docbar.log";
const DEFAULT_FILTER: &str = "info,docbar=debug,docbar_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/docbar/docbar.log`, creating `$XDG_STATE_HOME/docbar` if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    xdg_dirs
        .place_state_file(LOG_FILE)
        .context("create docbar state directory")
}

/// Send tracing output to the state-dir log file.
/// Returns Err (e.g. state dir unwritable) so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    // One shared handle; each event locks it for the duration of the write.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("docbar logging to {}", path.display());
    Ok(())
}

/// Send tracing output to stderr. Used when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only test in this crate's unit binary that reads XDG_STATE_HOME.
    #[test]
    fn log_file_sits_directly_under_prefixed_state_dir() {
        let state = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_STATE_HOME", state.path());

        let path = log_file_path().unwrap();
        assert_eq!(path, state.path().join("docbar").join("docbar.log"));
        assert!(state.path().join("docbar").is_dir());
        assert!(!state.path().join("docbar").join("docbar").exists());
    }
}
