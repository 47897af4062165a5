//! Configuration file support for mapnote.
//!
//! This module provides serialization and deserialization of application
//! settings: the initial map view, available basemaps, the marker icon and
//! user preferences. Annotations themselves are never written to disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASEMAP, DEFAULT_BASEMAP_URL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to the log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Initial camera position
    #[serde(default)]
    pub map: MapView,

    /// Basemap styles selectable by name
    #[serde(default = "default_basemaps")]
    pub basemaps: Vec<Basemap>,

    /// Name of the basemap shown at startup
    #[serde(default = "default_basemap_name")]
    pub active_basemap: String,

    /// Custom marker icon for point layers. The renderer's default marker is
    /// used when unset.
    #[serde(default)]
    pub marker_icon: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Camera position the map opens at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// A named basemap style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basemap {
    pub name: String,
    pub style_url: String,
}

impl Basemap {
    pub fn new(name: &str, style_url: &str) -> Self {
        Self {
            name: name.to_string(),
            style_url: style_url.to_string(),
        }
    }
}

fn default_basemaps() -> Vec<Basemap> {
    vec![Basemap::new(DEFAULT_BASEMAP, DEFAULT_BASEMAP_URL)]
}

fn default_basemap_name() -> String {
    DEFAULT_BASEMAP.to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Start import drafts with live preview enabled
    #[serde(default)]
    pub live_preview: bool,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            map: MapView::default(),
            basemaps: default_basemaps(),
            active_basemap: default_basemap_name(),
            marker_icon: None,
            preferences: UserPreferences::default(),
        }
    }

    /// Style URL of the active basemap, falling back to the first one.
    pub fn active_basemap_url(&self) -> Option<&str> {
        self.basemaps
            .iter()
            .find(|b| b.name == self.active_basemap)
            .or_else(|| self.basemaps.first())
            .map(|b| b.style_url.as_str())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "mapnote-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("mapnote").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home| {
                home.join(".config")
                    .join("mapnote")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = AppConfig::new();
        let json = config.to_json().expect("serializable");
        let parsed = AppConfig::from_json(&json).expect("parsable");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{"version": 1}"#).expect("minimal config");
        assert_eq!(config.map, MapView::default());
        assert_eq!(config.active_basemap_url(), Some(DEFAULT_BASEMAP_URL));
        assert!(config.marker_icon.is_none());
        assert_eq!(config.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_rejects_newer_version() {
        let result = AppConfig::from_json(r#"{"version": 99}"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_basemap_falls_back_to_first() {
        let mut config = AppConfig::new();
        config.basemaps.push(Basemap::new("satellite", "https://example.test/sat.json"));
        config.active_basemap = "satellite".to_string();
        assert_eq!(config.active_basemap_url(), Some("https://example.test/sat.json"));

        config.active_basemap = "missing".to_string();
        assert_eq!(config.active_basemap_url(), Some(DEFAULT_BASEMAP_URL));
    }

    #[test]
    fn test_log_level_parsing() {
        let config: AppConfig = AppConfig::from_json(
            r#"{"version": 1, "preferences": {"log_level": "debug", "live_preview": true}}"#,
        )
        .expect("valid");
        assert_eq!(
            config.preferences.log_level.to_level_filter(),
            log::LevelFilter::Debug
        );
        assert!(config.preferences.live_preview);
    }
}
