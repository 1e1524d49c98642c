//! Application configuration module.
//!
//! Manages the TOML config file holding the AniList endpoint, client
//! pacing, and pagination settings.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AniListConfig, AppConfig};
pub use paths::resolve_config_path;
