//! Configuration management for EMS Lite
//!
//! This module handles loading, parsing, and validation of configuration files.
//! The backend base URL is resolved once here and handed to the API client;
//! nothing else reads the environment.

use crate::constants::{API_URL_ENV, BANNER_MAX_SECS, BANNER_MIN_SECS, DEFAULT_API_URL, ERROR_BANNER_SECS, SUCCESS_BANNER_SECS};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub banners: BannerConfig,
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the EMS backend, e.g. "http://localhost:8000"
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page shown on startup
    /// Options: "dashboard", "employees", "attendance"
    pub default_page: String,
    /// Display format for attendance dates
    pub date_format: String,
}

/// Transient banner durations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub success_seconds: u64,
    pub error_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write log records to a file in the local data directory
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page: "dashboard".to_string(),
            date_format: datetime::API_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            success_seconds: SUCCESS_BANNER_SECS,
            error_seconds: ERROR_BANNER_SECS,
        }
    }
}

impl BannerConfig {
    pub fn success_duration(&self) -> Duration {
        Duration::from_secs(self.success_seconds)
    }

    pub fn error_duration(&self) -> Duration {
        Duration::from_secs(self.error_seconds)
    }
}

impl Config {
    /// Load configuration from file (or defaults) and apply environment overrides
    pub fn load() -> Result<Self> {
        Self::load_with(Self::find_config_file().as_deref(), |key| std::env::var(key).ok())
    }

    /// Read `path` (or defaults), apply overrides from `lookup`, then validate the result
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a specific file; values are checked by [`Config::validate`]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Apply environment overrides using the given lookup
    ///
    /// `EMS_API_URL` replaces the configured base URL when set and non-empty.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("ems-lite.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::get_default_config_path().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }
        if url.cannot_be_a_base() {
            anyhow::bail!("api.base_url '{}' cannot be used as a base URL", self.api.base_url);
        }

        let valid_pages = ["dashboard", "employees", "attendance"];
        if !valid_pages.contains(&self.ui.default_page.as_str()) {
            anyhow::bail!(
                "default_page must be one of {}, got '{}'",
                valid_pages.join(", "),
                self.ui.default_page
            );
        }

        if !datetime::is_valid_display_format(&self.ui.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.ui.date_format);
        }

        for (name, secs) in [
            ("success_seconds", self.banners.success_seconds),
            ("error_seconds", self.banners.error_seconds),
        ] {
            if !(BANNER_MIN_SECS..=BANNER_MAX_SECS).contains(&secs) {
                anyhow::bail!(
                    "banners.{} must be between {} and {} seconds, got {}",
                    name,
                    BANNER_MIN_SECS,
                    BANNER_MAX_SECS,
                    secs
                );
            }
        }

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ems-lite"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Option<PathBuf> {
        Self::get_xdg_config_dir().map(|dir| dir.join("config.toml"))
    }
}
