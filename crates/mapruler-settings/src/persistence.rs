//! Settings Persistence
//!
//! Binds a [`Config`] to the file it was loaded from, and bridges it with the
//! engine's [`SavedState`] at startup and shutdown.

use crate::config::Config;
use crate::error::SettingsResult;
use mapruler_core::SavedState;
use std::path::{Path, PathBuf};

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    config: Config,
}

impl SettingsPersistence {
    /// Open the settings file at `path`.
    ///
    /// A missing or unreadable file yields defaults; the file is only
    /// written on [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = Config::load_or_default(&path);
        Self { path, config }
    }

    /// Open the settings file in the platform config directory.
    pub fn open_default() -> SettingsResult<Self> {
        Ok(Self::open(Config::default_path()?))
    }

    /// Path the settings are saved to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Engine view of the loaded settings
    pub fn saved_state(&self) -> SavedState {
        self.config.to_saved_state()
    }

    /// Replace the settings with engine state. Does not write the file.
    pub fn store(&mut self, state: &SavedState) {
        self.config = Config::from_saved_state(state);
    }

    /// Write the settings to their file
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)
    }
}
