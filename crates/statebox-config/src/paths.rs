//! Where statebox looks for its config file and writes its logs
//!
//! `.statebox.toml` is looked up in the current directory first, then in the
//! home directory. Logs go to the per-user cache directory via `dirs`:
//! - Linux: `~/.cache/statebox/logs/`
//! - macOS: `~/Library/Caches/statebox/logs/`
//! - Windows: `%LOCALAPPDATA%\statebox\logs\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "statebox";

/// Name of the store config file inside each search directory
pub const CONFIG_FILE_NAME: &str = ".statebox.toml";

/// Directories searched for [`CONFIG_FILE_NAME`], highest priority first
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut search = Vec::with_capacity(2);
    match std::env::current_dir() {
        Ok(cwd) => search.push(cwd),
        Err(e) => log::debug!("No current directory to search for config: {}", e),
    }
    if let Some(home) = dirs::home_dir() {
        if !search.contains(&home) {
            search.push(home);
        }
    }
    search
}

/// Log directory under the user cache directory, created if needed
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME).join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}
