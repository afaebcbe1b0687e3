//! XDG Base Directory support for edgegroups.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "edgegroups";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    base.map(|p| p.join(APP_NAME))
        .with_context(|| format!("Failed to determine {} directory", kind))
}

/// Configuration directory: `$XDG_CONFIG_HOME/edgegroups` or `~/.config/edgegroups`.
pub fn get_config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Data directory, home of the default log file.
pub fn get_data_dir() -> Result<PathBuf> {
    app_dir(dirs::data_dir(), "data")
}
