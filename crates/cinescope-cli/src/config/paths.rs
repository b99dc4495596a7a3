//! Config directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Log file written while the landing page owns the terminal.
const LOG_FILE_NAME: &str = "cinescope.log";

/// Resolves the config directory.
///
/// - If `dir` is `Some`, returns it unchanged.
/// - Otherwise returns `~/.config/cinescope`.
fn resolve_config_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home).join(".config").join("cinescope"))
}

/// Resolves the config file path (`{dir}/config.toml`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_config_dir(dir)?.join("config.toml"))
}

/// Resolves the log file path used by `browse` (`{dir}/cinescope.log`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_log_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_config_dir(dir)?.join(LOG_FILE_NAME))
}
