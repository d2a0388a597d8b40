//! Error handling for MapRuler
//!
//! The engine has one real failure: applying a calibration against a grid
//! with no usable size or at a zero map scale. Everything else (missing start point, no open
//! drag, absent persisted values) is a normal state handled by no-ops and
//! defaults.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Calibration error type
///
/// Returned by `apply_calibration`; the UI is expected to show it as a
/// blocking notice. State is left untouched when it is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// The grid has zero, negative or non-finite size
    #[error("Invalid grid size {size}: place the grid over the map first")]
    InvalidGrid {
        /// The rejected grid size in pixels.
        size: f64,
    },

    /// The nominal map scale is zero
    #[error("Invalid map scale {scale}: choose a scale from the list")]
    InvalidMapScale {
        /// The rejected nominal map scale.
        scale: u32,
    },
}
