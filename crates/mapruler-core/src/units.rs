//! Unit types for distance reporting
//!
//! Screen distances are measured in pixels and converted to meters through a
//! meters-per-pixel [`ScaleFactor`]. Labels shown to the user carry meters
//! with one decimal place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_SCALE_FACTOR;

/// Meters represented by one screen pixel.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Creates a scale factor from a meters-per-pixel value.
    pub fn new(meters_per_pixel: f64) -> Self {
        Self(meters_per_pixel)
    }

    /// Gets the meters-per-pixel value.
    pub fn meters_per_pixel(self) -> f64 {
        self.0
    }

    /// Converts a pixel distance to meters.
    pub fn to_meters(self, pixels: f64) -> f64 {
        pixels * self.0
    }

    /// Returns this factor multiplied by `ratio`.
    pub fn rescaled(self, ratio: f64) -> Self {
        Self(self.0 * ratio)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE_FACTOR)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} m/px", self.0)
    }
}

/// A measured distance, kept both in screen pixels and in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    /// Euclidean length on screen
    pub pixels: f64,
    /// Real-world length under the scale factor active at measurement time
    pub meters: f64,
}

impl Length {
    /// Creates a length from a pixel distance and the active scale factor.
    pub fn from_pixels(pixels: f64, factor: ScaleFactor) -> Self {
        Self {
            pixels,
            meters: factor.to_meters(pixels),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m", self.meters)
    }
}

/// Format a distance for the readout label
///
/// * `length` - Current distance, `None` when nothing is being measured
pub fn format_distance(length: Option<Length>) -> String {
    match length {
        Some(length) => length.to_string(),
        None => "0.00 m".to_string(),
    }
}
