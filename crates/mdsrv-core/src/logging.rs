//! Tracing setup for the client and the CLI.
//!
//! Events go to `$XDG_STATE_HOME/mdsrv/mdsrv.log` when that file can be
//! opened, otherwise to stderr. `MDSRV_LOG`, then `RUST_LOG`, replaces the
//! default filter.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, e.g. `mdsrv_core=trace`.
pub const LOG_ENV: &str = "MDSRV_LOG";

const DEFAULT_FILTER: &str = "info,mdsrv_core=debug,mdsrv=debug";

/// Location of the log file: `$XDG_STATE_HOME/mdsrv/mdsrv.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("mdsrv")?;
    Ok(dirs.get_state_home().join("mdsrv.log"))
}

/// Filter from user directives. Blank or unparsable input gives the default.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn env_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

/// Opens `path` for appending, creating its directory first.
fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber writing to [`log_file_path`].
///
/// Errors leave no subscriber installed, so the caller can still use
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_from(env_directives().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "mdsrv logging to file");
    Ok(())
}

/// Installs a stderr subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(env_directives().as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
