//! # MapRuler Core
//!
//! Core types, constants and utilities for MapRuler.
//! Provides the screen-space geometry primitives, the unit types used to
//! report distances, the persisted calibration snapshot and the calibration
//! error shared by the engine and settings crates.

pub mod constants;
pub mod data;
pub mod error;
pub mod units;

pub use data::{Point, SavedState};

pub use error::CalibrationError;

pub use units::{format_distance, Length, ScaleFactor};
