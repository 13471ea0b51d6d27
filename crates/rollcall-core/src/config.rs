//! Configuration management for rollcall.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/rollcall/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collector loop settings
    pub collector: CollectorConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Card selector strings (site-specific markup contract)
    pub selectors: SelectorConfig,
    /// CSV export settings
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `ROLLCALL_HEADLESS`: Override browser headless mode (true/false)
    /// - `ROLLCALL_POLL_INTERVAL_MS`: Override the load-more poll interval
    /// - `ROLLCALL_MAX_LOAD_MORE_ATTEMPTS`: Override the load-more attempt cap
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("ROLLCALL_HEADLESS") {
            if let Ok(headless) = val.parse() {
                config.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Ok(val) = std::env::var("ROLLCALL_POLL_INTERVAL_MS") {
            if let Ok(interval) = val.parse() {
                config.collector.poll_interval_ms = interval;
                tracing::debug!("Override poll_interval_ms from env: {}", interval);
            }
        }

        if let Ok(val) = std::env::var("ROLLCALL_MAX_LOAD_MORE_ATTEMPTS") {
            if let Ok(attempts) = val.parse() {
                config.collector.max_load_more_attempts = attempts;
                tracing::debug!("Override max_load_more_attempts from env: {}", attempts);
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/rollcall/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("io", "rollcall", "rollcall").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Collector loop settings.
///
/// These are the bounded constants of the scroll-and-scrape loop, exposed
/// as configuration rather than hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Consecutive zero-yield extraction passes before the source is
    /// assumed exhausted
    pub stagnation_threshold: u32,
    /// Hard cap on load-more (scroll) attempts per run
    pub max_load_more_attempts: u32,
    /// Wait between triggering load-more and re-measuring the content
    /// extent, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            stagnation_threshold: 3,
            max_load_more_attempts: 500,
            poll_interval_ms: 1500,
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
        }
    }
}

/// CSS selectors locating user cards within the page.
///
/// These are coupled to the target site's markup and expected to break
/// whenever the site changes; they are configuration, not logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// One rendered user card
    pub card: String,
    /// Link to the user's profile within a card
    pub profile_link: String,
    /// Display name text within a card
    pub display_name: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: r#"div[data-testid="cellInnerDiv"]"#.to_string(),
            profile_link: r#"a[role="link"][href^="/"]"#.to_string(),
            display_name: r#"div[dir="ltr"] span span"#.to_string(),
        }
    }
}

/// CSV export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Fixed, descriptive output filename
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "followed_users.csv".to_string(),
        }
    }
}
