//! Viewer configuration file support.
//!
//! This module provides utilities for reading viewer configuration from
//! TOML configuration files (`viewer.toml`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::{AnalysisMode, AnalysisParams, SizeBounds};

/// Viewer configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub selection: SelectionSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Selection size and zoom limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSettings {
    #[serde(default = "default_min_side_km")]
    pub min_side_km: f64,
    #[serde(default = "default_max_side_km")]
    pub max_side_km: f64,
    #[serde(default = "default_min_area_km2")]
    pub min_area_km2: f64,
    #[serde(default = "default_max_area_km2")]
    pub max_area_km2: f64,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: u8,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
}

/// Default analysis request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default = "default_true")]
    pub apply_smoothing: bool,
    #[serde(default)]
    pub apply_interpolation: bool,
    #[serde(default)]
    pub use_simplified_classes: bool,
    #[serde(default = "default_true")]
    pub fix_sealake: bool,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_min_side_km() -> f64 {
    0.5
}

fn default_max_side_km() -> f64 {
    50.0
}

fn default_min_area_km2() -> f64 {
    0.25
}

fn default_max_area_km2() -> f64 {
    500.0
}

fn default_min_zoom() -> u8 {
    6
}

fn default_max_zoom() -> u8 {
    13
}

fn default_model_path() -> String {
    "models/eurosat_rgb.pt".to_string()
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> u8 {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for SelectionSettings {
    fn default() -> Self {
        SelectionSettings {
            min_side_km: default_min_side_km(),
            max_side_km: default_max_side_km(),
            min_area_km2: default_min_area_km2(),
            max_area_km2: default_max_area_km2(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            model_path: default_model_path(),
            mode: AnalysisMode::default(),
            apply_smoothing: default_true(),
            apply_interpolation: false,
            use_simplified_classes: false,
            fix_sealake: default_true(),
            zoom: default_zoom(),
        }
    }
}

/// Configuration load or parse failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ViewerConfig {
    /// Load viewer configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load viewer configuration from the default location.
    ///
    /// Searches for `viewer.toml` in the current directory, then the parent
    /// directory. Falls back to built-in defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("viewer.toml"),
            PathBuf::from("../viewer.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(ViewerConfig::default())
    }

    /// Request timeout for the HTTP client.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Selection limits as the validator consumes them.
    pub fn size_bounds(&self) -> SizeBounds {
        SizeBounds {
            min_side_km: self.selection.min_side_km,
            max_side_km: self.selection.max_side_km,
            min_area_km2: self.selection.min_area_km2,
            max_area_km2: self.selection.max_area_km2,
            min_zoom: self.selection.min_zoom,
            max_zoom: self.selection.max_zoom,
        }
    }

    /// Analysis toggles as the request body carries them.
    pub fn analysis_params(&self) -> AnalysisParams {
        AnalysisParams {
            mode: self.analysis.mode,
            apply_smoothing: self.analysis.apply_smoothing,
            apply_interpolation: self.analysis.apply_interpolation,
            use_simplified_classes: self.analysis.use_simplified_classes,
            fix_sealake: self.analysis.fix_sealake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = ViewerConfig::default();
        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Duration::from_secs(300));
        assert_eq!(config.size_bounds(), SizeBounds::default());
        assert_eq!(config.analysis_params(), AnalysisParams::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
base_url = "https://classifier.example.org"
request_timeout_secs = 120

[selection]
min_side_km = 1.0
max_side_km = 25.0
min_area_km2 = 1.0
max_area_km2 = 200.0
min_zoom = 8
max_zoom = 12

[analysis]
model_path = "models/eurosat_ms.pt"
mode = "full"
apply_smoothing = false
zoom = 11
"#;

        let config: ViewerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.base_url, "https://classifier.example.org");
        assert_eq!(config.request_timeout(), Duration::from_secs(120));

        let bounds = config.size_bounds();
        assert_eq!(bounds.min_side_km, 1.0);
        assert_eq!(bounds.max_zoom, 12);

        let params = config.analysis_params();
        assert_eq!(params.mode, AnalysisMode::Full);
        assert!(!params.apply_smoothing);
        // Omitted toggles keep their defaults.
        assert!(params.fix_sealake);
        assert_eq!(config.analysis.zoom, 11);
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let toml = r#"
[server]
base_url = "http://127.0.0.1:9000"
"#;

        let config: ViewerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.server.request_timeout_secs, 300);
        assert_eq!(config.selection.max_side_km, 50.0);
        assert_eq!(config.analysis.model_path, "models/eurosat_rgb.pt");
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://localhost:7000\"\n").unwrap();
        let config = ViewerConfig::from_file(&path).unwrap();
        assert_eq!(config.server.base_url, "http://localhost:7000");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.toml");
        std::fs::write(&path, "[server\nbase_url").unwrap();
        assert!(matches!(
            ViewerConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
