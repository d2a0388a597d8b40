//! Configuration file handling for MapRuler
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into two sections:
//! - Calibration (derived meters-per-pixel, its base map scale, in-use flag)
//! - Grid (size and top-left position of the calibration grid)
//!
//! Every field may be missing from the file; missing fields take their
//! defaults. Zero is the "not calibrated" sentinel for the calibration values.

use mapruler_core::constants::{DEFAULT_GRID_POSITION, DEFAULT_GRID_SIZE};
use mapruler_core::{Point, SavedState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Directory (under the platform config dir) holding MapRuler's files.
pub const CONFIG_DIR_NAME: &str = "mapruler";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "calibration.toml";

/// Calibration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationSettings {
    /// Meters per pixel; 0 or below when never calibrated
    pub calibrated_scale: f64,
    /// Use the calibrated value instead of the default factor
    pub use_calibrated_scale: bool,
    /// Map scale the calibration was made at; 0 when unknown
    pub calibration_base_scale: u32,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            calibrated_scale: 0.0,
            use_calibrated_scale: false,
            calibration_base_scale: 0,
        }
    }
}

/// Grid section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid edge length in pixels
    pub grid_size: f64,
    /// Grid left edge in pixels
    pub grid_x: f64,
    /// Grid top edge in pixels
    pub grid_y: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            grid_x: DEFAULT_GRID_POSITION.0,
            grid_y: DEFAULT_GRID_POSITION.1,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Calibration values
    #[serde(default)]
    pub calibration: CalibrationSettings,
    /// Grid placement
    #[serde(default)]
    pub grid: GridSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the configuration file in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path));
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the file is missing or
    /// cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Settings loaded");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "Error loading settings, using defaults: {}", err);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.calibration.calibrated_scale.is_finite() {
            return Err(SettingsError::invalid(
                "calibration.calibrated_scale",
                "must be a finite number",
            ));
        }

        let grid = [
            ("grid.grid_size", self.grid.grid_size),
            ("grid.grid_x", self.grid.grid_x),
            ("grid.grid_y", self.grid.grid_y),
        ];
        if let Some((key, _)) = grid.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SettingsError::invalid(*key, "must be a finite number"));
        }

        Ok(())
    }

    /// Engine view of this configuration. Sentinel zeros become `None`.
    pub fn to_saved_state(&self) -> SavedState {
        let calibration = &self.calibration;
        SavedState {
            calibrated_scale: (calibration.calibrated_scale > 0.0)
                .then_some(calibration.calibrated_scale),
            use_calibrated_scale: Some(calibration.use_calibrated_scale),
            calibration_base_scale: (calibration.calibration_base_scale > 0)
                .then_some(calibration.calibration_base_scale),
            grid_size: Some(self.grid.grid_size),
            grid_position: Some(Point::new(self.grid.grid_x, self.grid.grid_y)),
        }
    }

    /// Builds a configuration from engine state, writing sentinels and
    /// defaults for absent values.
    pub fn from_saved_state(state: &SavedState) -> Self {
        let grid_defaults = GridSettings::default();
        let position = state
            .grid_position
            .unwrap_or_else(|| Point::new(grid_defaults.grid_x, grid_defaults.grid_y));

        Self {
            calibration: CalibrationSettings {
                calibrated_scale: state.calibrated_scale.unwrap_or(0.0),
                use_calibrated_scale: state.use_calibrated_scale.unwrap_or(false),
                calibration_base_scale: state.calibration_base_scale.unwrap_or(0),
            },
            grid: GridSettings {
                grid_size: state.grid_size.unwrap_or(grid_defaults.grid_size),
                grid_x: position.x,
                grid_y: position.y,
            },
        }
    }
}

fn unsupported_format(path: &Path) -> SettingsError {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    SettingsError::UnsupportedFormat(format!("'{}' (expected .json or .toml)", ext))
}
