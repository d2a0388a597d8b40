//! MapRuler Settings Crate
//!
//! Handles the calibration configuration file: where it lives, how it is
//! read and written, and how it maps onto the engine's saved state.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{CalibrationSettings, Config, GridSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
