//! # MapRuler Calibration
//!
//! The measuring engine behind the overlay. It turns a user-aligned grid into
//! a meters-per-pixel factor and uses that factor to convert on-screen
//! distances to meters.
//!
//! ## Components
//!
//! - **Grid** ([`GridModel`]): the 7x7 calibration grid, moved and resized by
//!   dragging with the opposite corner anchored
//! - **Scale** ([`ScaleEngine`]): derives the factor from a finalized grid and
//!   a nominal map scale, and rescales it when the map scale changes
//! - **Measurement** ([`MeasurementEngine`]): two-point ruler with live hover
//!   preview
//! - **Controller** ([`RulerController`]): routes input events to the above
//!   according to the current mode
//!
//! ```text
//! pointer drags ──> GridModel ──(apply)──> ScaleEngine ──(factor)──> MeasurementEngine
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mapruler_calibration::{PointerButton, RulerController};
//! use mapruler_core::Point;
//!
//! let mut controller = RulerController::new();
//! controller.pointer_down(Point::new(0.0, 0.0), PointerButton::Secondary);
//! controller.pointer_down(Point::new(30.0, 40.0), PointerButton::Primary);
//! assert_eq!(controller.distance_label(), "50.0 m");
//! ```

pub mod controller;
pub mod events;
pub mod grid;
pub mod measurement;
pub mod scale;

pub use controller::{CursorHint, Mode, PointerButton, RulerController};
pub use events::{EventOutcome, InputEvent};
pub use grid::{DragSession, GridModel, GridRect, Handle};
pub use measurement::{MeasurementEngine, MeasurementSegment};
pub use scale::{CalibrationReport, CalibrationState, ScaleEngine};
