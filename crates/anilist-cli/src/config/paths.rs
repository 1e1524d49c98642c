//! Config file location.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the user config base.
const APP_DIR: &str = "anilist";

/// Resolves the config file path.
///
/// - `{dir}/config.toml` when `dir` is given.
/// - `$XDG_CONFIG_HOME/anilist/config.toml` when that variable is set and non-empty.
/// - `~/.config/anilist/config.toml` otherwise.
///
/// # Errors
///
/// Returns an error if neither `dir` nor `XDG_CONFIG_HOME` is set and `HOME` is missing.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    let home = std::env::var("HOME").ok();
    default_config_path(xdg.as_deref(), home.as_deref())
}

/// Picks the default config path from the XDG base and home directories.
fn default_config_path(xdg_config_home: Option<&str>, home: Option<&str>) -> Result<PathBuf> {
    let base = match xdg_config_home.filter(|x| !x.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(home.context("HOME environment variable is not set")?).join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}
