//! `AppConfig` struct and TOML read/write.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use anilist_api::graphql::ANILIST_ENDPOINT;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// AniList client settings.
    #[serde(default)]
    pub anilist: AniListConfig,
    /// Pagination settings.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// AniList client configuration. Unset fields fall back to client defaults.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AniListConfig {
    /// GraphQL endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// `User-Agent` header value.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Minimum interval between requests, in milliseconds.
    #[serde(default)]
    pub min_interval_ms: Option<u64>,
    /// Request timeout, in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Pagination configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Maximum pages fetched by accumulating commands. Unbounded if unset.
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl AniListConfig {
    /// Parsed endpoint, or the public AniList endpoint when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint is not a valid URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = self.endpoint.as_deref().unwrap_or(ANILIST_ENDPOINT);
        Url::parse(raw).with_context(|| format!("invalid anilist.endpoint: {raw}"))
    }

    /// Configured minimum request interval.
    #[must_use]
    pub fn min_interval(&self) -> Option<Duration> {
        self.min_interval_ms.map(Duration::from_millis)
    }

    /// Configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.anilist.endpoint, None);
        assert_eq!(config.pagination.max_pages, None);
        assert_eq!(
            config.anilist.endpoint_url().unwrap().as_str(),
            "https://graphql.anilist.co/"
        );
    }

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let content = r#"
[anilist]
endpoint = "http://127.0.0.1:8080/graphql"
user_agent = "my-tool/1.0"
min_interval_ms = 0
timeout_secs = 5

[pagination]
max_pages = 4
"#;

        // Act
        let config: AppConfig = toml::from_str(content).unwrap();

        // Assert
        assert_eq!(
            config.anilist.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:8080/graphql"
        );
        assert_eq!(config.anilist.user_agent.as_deref(), Some("my-tool/1.0"));
        assert_eq!(config.anilist.min_interval(), Some(Duration::ZERO));
        assert_eq!(config.anilist.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.pagination.max_pages, Some(4));
    }

    #[test]
    fn test_invalid_endpoint_is_error() {
        // Arrange
        let config = AniListConfig {
            endpoint: Some(String::from("not a url")),
            ..AniListConfig::default()
        };

        // Act
        let result = config.endpoint_url();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid anilist.endpoint")
        );
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            anilist: AniListConfig {
                endpoint: Some(String::from("http://localhost:9000/")),
                user_agent: None,
                min_interval_ms: Some(100),
                timeout_secs: None,
            },
            pagination: PaginationConfig {
                max_pages: Some(10),
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pagination]\nmax_pages = 2\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.anilist, AniListConfig::default());
        assert_eq!(config.pagination.max_pages, Some(2));
    }

    #[test]
    fn test_load_malformed_is_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pagination\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }
}
