// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Auto-advance interval and wrap-around
//! - `[content]` - Content store project, dataset and API version
//! - `[media]` - Directory that local image references resolve against
//! - `[telemetry]` - Whether interaction events are recorded to the log
//!
//! # Examples
//!
//! ```no_run
//! use adventures::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.carousel.interval_ms = Some(6000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Home screen carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances.
    #[serde(default = "default_interval_ms", skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Wrap from the last slide to the first (and back).
    #[serde(default = "default_loop_enabled", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            loop_enabled: default_loop_enabled(),
        }
    }
}

impl CarouselConfig {
    /// Auto-advance interval, clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let millis = self
            .interval_ms
            .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS)
            .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS);
        Duration::from_millis(millis)
    }
}

/// Headless content store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Project identifier. Without it the portfolio shows sample photos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default = "default_dataset")]
    pub dataset: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
        }
    }
}

/// Local media settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaConfig {
    /// Root directory for `/images/...` references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,
}

/// Interaction telemetry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_INTERVAL_MS)
}

fn default_loop_enabled() -> Option<bool> {
    Some(DEFAULT_CAROUSEL_LOOP)
}

fn default_dataset() -> String {
    DEFAULT_CONTENT_DATASET.to_string()
}

fn default_api_version() -> String {
    DEFAULT_CONTENT_API_VERSION.to_string()
}

fn default_use_cdn() -> bool {
    DEFAULT_CONTENT_USE_CDN
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
