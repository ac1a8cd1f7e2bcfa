//! Logging init: file under the XDG state dir, or stderr as a fallback.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,biodl=debug"))
}

/// Initialize structured logging to `~/.local/state/biodl/biodl.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("biodl")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("biodl.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("biodl logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). Use when [`init_logging`]
/// fails so the CLI still gets diagnostics.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
