//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use cinescope_api::feed::DEFAULT_ENDPOINT;

/// Default bind address of `cinescope serve`.
const DEFAULT_BIND: &str = "127.0.0.1:8787";
/// Default TMDB response language.
const DEFAULT_LANGUAGE: &str = "en-US";
/// Default search debounce in milliseconds.
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Landing page settings.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Feed endpoint server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Landing page configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed endpoint URL.
    pub endpoint: String,
    /// Quiet period before a search runs.
    pub search_debounce_ms: u64,
    /// Probe artwork URLs and show the fallback for broken ones.
    pub probe_artwork: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            probe_artwork: true,
        }
    }
}

impl FeedConfig {
    /// Returns the search debounce interval.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Feed endpoint server configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: String,
    /// TMDB response language.
    pub language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: String::from(DEFAULT_BIND),
            language: String::from(DEFAULT_LANGUAGE),
        }
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
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
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
        assert_eq!(config.feed.endpoint, "http://127.0.0.1:8787/");
        assert_eq!(config.feed.search_debounce(), Duration::from_millis(500));
        assert!(config.feed.probe_artwork);
        assert_eq!(config.server.bind, "127.0.0.1:8787");
        assert_eq!(config.server.language, "en-US");
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
    fn test_load_full_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[feed]
endpoint = "https://feed.example.com/api"
search_debounce_ms = 250
probe_artwork = false

[server]
bind = "0.0.0.0:9000"
language = "de-DE"
"#,
        )
        .unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.feed.endpoint, "https://feed.example.com/api");
        assert_eq!(config.feed.search_debounce(), Duration::from_millis(250));
        assert!(!config.feed.probe_artwork);
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.language, "de-DE");
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nlanguage = \"ja-JP\"\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.feed, FeedConfig::default());
        assert_eq!(config.server.bind, "127.0.0.1:8787");
        assert_eq!(config.server.language, "ja-JP");
    }

    #[test]
    fn test_load_invalid_toml() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[feed\nendpoint = 1").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }
}
