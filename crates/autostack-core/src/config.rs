//! Canvas configuration loaded from a JSON file.

use crate::camera::{MAX_ZOOM, MIN_ZOOM};
use crate::snap::GRID_SIZE;
use crate::store::CanvasSettings;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Initial canvas settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub zoom: f64,
    pub pan: Vec2,
    pub grid_enabled: bool,
    pub grid_size: f64,
    pub snap_to_grid: bool,
    pub background_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            grid_enabled: true,
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            background_color: "#f5f5f5".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        log::info!("Loaded canvas config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gridSize must be positive, got {}",
                self.grid_size
            )));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom must be between {} and {}, got {}",
                MIN_ZOOM, MAX_ZOOM, self.zoom
            )));
        }
        if !self.pan.x.is_finite() || !self.pan.y.is_finite() {
            return Err(ConfigError::Invalid("pan must be finite".to_string()));
        }
        Ok(())
    }

    pub fn into_settings(self) -> CanvasSettings {
        CanvasSettings {
            zoom: self.zoom,
            pan: self.pan,
            grid_enabled: self.grid_enabled,
            grid_size: self.grid_size,
            snap_to_grid: self.snap_to_grid,
            background_color: self.background_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_settings() {
        assert_eq!(CanvasConfig::default().into_settings(), CanvasSettings::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json(r#"{"gridSize": 25, "snapToGrid": false}"#).unwrap();
        assert!((config.grid_size - 25.0).abs() < f64::EPSILON);
        assert!(!config.snap_to_grid);
        assert!(config.grid_enabled);
        assert_eq!(config.background_color, "#f5f5f5");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            CanvasConfig::from_json(r#"{"gridSize": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CanvasConfig::from_json(r#"{"zoom": 3.5}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CanvasConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("canvas.json");
        fs::write(&path, r#"{"zoom": 1.5, "pan": {"x": 10.0, "y": -5.0}}"#).unwrap();

        let settings = CanvasConfig::load(&path).unwrap().into_settings();
        assert!((settings.zoom - 1.5).abs() < f64::EPSILON);
        assert_eq!(settings.pan, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = CanvasConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
