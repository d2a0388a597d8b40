//! # MapRuler
//!
//! An on-screen map ruler for games whose maps carry a fixed grid:
//! - Lay a 7x7 calibration grid over the in-game map and size it to match
//! - Derive meters-per-pixel from the grid and the map's nominal scale
//! - Rescale the calibration when the map scale changes
//! - Measure point-to-point distances in meters
//!
//! ## Architecture
//!
//! MapRuler is organized as a workspace with multiple crates:
//!
//! 1. **mapruler-core** - Shared types, constants, units, errors
//! 2. **mapruler-calibration** - Grid, scale and measurement engines plus the controller
//! 3. **mapruler-settings** - Calibration file loading, saving and validation
//! 4. **mapruler** - Logging setup, event-script replay and the main binary

pub mod replay;

pub use mapruler_calibration::{
    CalibrationReport, CalibrationState, CursorHint, DragSession, EventOutcome, GridModel,
    GridRect, Handle, InputEvent, MeasurementEngine, MeasurementSegment, Mode, PointerButton,
    RulerController, ScaleEngine,
};
pub use mapruler_core::{format_distance, CalibrationError, Length, Point, SavedState, ScaleFactor};
pub use mapruler_settings::{Config, SettingsError, SettingsPersistence};
pub use replay::{replay, ReplaySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log format (`json` or the default pretty output)
pub const LOG_FORMAT_ENV: &str = "MAPRULER_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the replay report
/// - RUST_LOG environment variable support, `info` when unset
/// - JSON lines when `MAPRULER_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
