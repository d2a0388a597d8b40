//! Shared data types: screen points and the persisted engine snapshot.

use serde::{Deserialize, Serialize};

/// Screen coordinates in pixels (0,0 at top-left, +Y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Component-wise offset from `origin` to this point.
    pub fn delta_from(&self, origin: &Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Engine state that survives restarts.
///
/// Every field is optional: the settings layer may know only some of them
/// (first launch, hand-edited file, older format) and the engine falls back
/// to its defaults for anything missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavedState {
    /// Meters per pixel derived by the last calibration
    pub calibrated_scale: Option<f64>,
    /// Whether the calibrated value (rather than the default) is active
    pub use_calibrated_scale: Option<bool>,
    /// Nominal map scale the calibration was performed at
    pub calibration_base_scale: Option<u32>,
    /// Calibration grid edge length in pixels
    pub grid_size: Option<f64>,
    /// Calibration grid top-left corner
    pub grid_position: Option<Point>,
}
