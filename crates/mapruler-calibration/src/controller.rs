//! Ruler controller
//!
//! Composes the grid, scale and measurement engines and routes discrete
//! input events to them according to the current mode. The UI layer feeds
//! pointer and button events in and reads the grid, segment and labels back
//! out after each event; it never touches the engines' fields directly.

use mapruler_core::constants::{is_known_map_scale, DEFAULT_MAP_SCALE, DEFAULT_SCALE_FACTOR};
use mapruler_core::{format_distance, CalibrationError, Length, Point, SavedState, ScaleFactor};
use serde::{Deserialize, Serialize};

use crate::grid::{GridModel, GridRect, Handle};
use crate::measurement::{MeasurementEngine, MeasurementSegment};
use crate::scale::{CalibrationReport, CalibrationState, ScaleEngine};

/// Interaction mode of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two-point ruler
    #[default]
    Measure,
    /// Grid placement
    Calibrate,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Measure => write!(f, "measure"),
            Self::Calibrate => write!(f, "calibrate"),
        }
    }
}

/// Pointer buttons the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Left button: end point, grid drag
    Primary,
    /// Right button: start point
    Secondary,
}

/// Cursor shape the UI should show over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Over a corner handle
    Resize,
    /// Over the grid interior
    Move,
}

/// Owns the three engines and the selected nominal map scale.
#[derive(Debug, Clone)]
pub struct RulerController {
    grid: GridModel,
    scale: ScaleEngine,
    ruler: MeasurementEngine,
    mode: Mode,
    selected_scale: u32,
}

impl RulerController {
    /// Creates a controller with default grid and no calibration.
    pub fn new() -> Self {
        Self::from_saved(&SavedState::default())
    }

    /// Restores a controller from persisted values, defaulting missing ones.
    ///
    /// With a usable calibration the selected map scale starts at its base
    /// scale so the selection and active factor agree.
    pub fn from_saved(saved: &SavedState) -> Self {
        let defaults = GridRect::default();
        let position = saved.grid_position.unwrap_or_else(|| defaults.position());
        let size = saved
            .grid_size
            .filter(|size| size.is_finite())
            .unwrap_or(defaults.size());
        let grid = GridModel::new(GridRect::new(position.x, position.y, size));

        let state = CalibrationState::restore(saved);
        let scale = ScaleEngine::from_state(state, ScaleFactor::new(DEFAULT_SCALE_FACTOR));
        let selected_scale = if scale.is_calibrated() {
            state.calibration_base_scale.unwrap_or(DEFAULT_MAP_SCALE)
        } else {
            DEFAULT_MAP_SCALE
        };

        tracing::debug!(
            grid_size = grid.rect().size(),
            calibrated = scale.is_calibrated(),
            selected_scale,
            "Ruler state restored"
        );

        Self {
            grid,
            scale,
            ruler: MeasurementEngine::new(),
            mode: Mode::default(),
            selected_scale,
        }
    }

    /// Values to persist at shutdown.
    pub fn saved_state(&self) -> SavedState {
        let calibration = self.scale.calibration();
        let rect = self.grid.rect();
        SavedState {
            calibrated_scale: calibration.calibrated_scale,
            use_calibrated_scale: Some(calibration.use_calibrated_scale),
            calibration_base_scale: calibration.calibration_base_scale,
            grid_size: Some(rect.size()),
            grid_position: Some(rect.position()),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches between measuring and calibrating.
    ///
    /// Leaving calibration clears the measurement; an open drag is closed
    /// either way.
    pub fn toggle_mode(&mut self) -> Mode {
        self.grid.end_drag();
        self.mode = match self.mode {
            Mode::Measure => Mode::Calibrate,
            Mode::Calibrate => {
                self.ruler.reset();
                Mode::Measure
            }
        };
        tracing::debug!(mode = %self.mode, "Mode changed");
        self.mode
    }

    /// Currently selected nominal map scale.
    pub fn selected_scale(&self) -> u32 {
        self.selected_scale
    }

    /// Selects a nominal map scale, rescaling an existing calibration.
    ///
    /// A zero scale is ignored. Scales outside the in-game list are
    /// accepted.
    pub fn select_scale(&mut self, nominal_scale: u32) -> ScaleFactor {
        if nominal_scale == 0 {
            tracing::warn!("Ignoring map scale of 0");
            return self.scale.current_factor();
        }
        if !is_known_map_scale(nominal_scale) {
            tracing::debug!(nominal_scale, "Map scale not in the in-game list");
        }
        self.selected_scale = nominal_scale;
        self.scale.on_nominal_scale_changed(nominal_scale)
    }

    /// Calibrates against the current grid at the selected map scale.
    ///
    /// On success the controller returns to measure mode. On failure
    /// nothing changes, mode included.
    pub fn apply_calibration(&mut self) -> Result<CalibrationReport, CalibrationError> {
        let report = self
            .scale
            .apply_calibration(self.selected_scale, self.grid.rect().size())?;
        self.grid.end_drag();
        self.mode = Mode::Measure;
        Ok(report)
    }

    /// Clears the measurement points.
    pub fn reset(&mut self) {
        self.ruler.reset();
    }

    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        match (self.mode, button) {
            (Mode::Measure, PointerButton::Secondary) => self.ruler.set_start(point),
            (Mode::Measure, PointerButton::Primary) => self.ruler.set_end(point),
            (Mode::Calibrate, PointerButton::Primary) => {
                if let Some(handle) = self.grid.hit_test_handle(&point) {
                    self.grid.begin_drag(point, handle);
                }
            }
            (Mode::Calibrate, PointerButton::Secondary) => {}
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        match self.mode {
            Mode::Calibrate => self.grid.update_drag(point),
            Mode::Measure => {
                let segment = self.ruler.segment();
                if segment.start.is_some() && segment.end.is_none() {
                    self.ruler.update_hover(point);
                }
            }
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.grid.end_drag();
        }
    }

    /// Cursor to show at `point`. Only calibration mode changes it, and not
    /// while a drag is running.
    pub fn cursor_hint(&self, point: &Point) -> CursorHint {
        if self.mode != Mode::Calibrate || self.grid.is_dragging() {
            return CursorHint::Default;
        }
        match self.grid.hit_test_handle(point) {
            Some(Handle::Move) => CursorHint::Move,
            Some(_) => CursorHint::Resize,
            None => CursorHint::Default,
        }
    }

    pub fn grid(&self) -> GridRect {
        self.grid.rect()
    }

    pub fn grid_model(&self) -> &GridModel {
        &self.grid
    }

    pub fn scale_engine(&self) -> &ScaleEngine {
        &self.scale
    }

    pub fn segment(&self) -> &MeasurementSegment {
        self.ruler.segment()
    }

    /// Live distance for the current segment.
    pub fn distance(&self) -> Option<Length> {
        self.ruler.distance(&self.scale)
    }

    pub fn current_factor(&self) -> ScaleFactor {
        self.scale.current_factor()
    }

    pub fn is_calibrated(&self) -> bool {
        self.scale.is_calibrated()
    }

    pub fn scale_label(&self) -> String {
        self.scale.label()
    }

    pub fn distance_label(&self) -> String {
        format_distance(self.distance())
    }
}

impl Default for RulerController {
    fn default() -> Self {
        Self::new()
    }
}
