//! Meters-per-pixel scale derivation.
//!
//! A calibration pins the on-screen grid to a nominal map scale: with the
//! grid matched to the game's 7x7 map grid, one square spans
//! `grid_size / 7` pixels and represents `nominal` meters. Switching to a
//! different nominal scale later rescales the calibrated factor in
//! proportion, without redoing the drag.

use mapruler_core::constants::GRID_CELLS;
use mapruler_core::{CalibrationError, SavedState, ScaleFactor};
use serde::{Deserialize, Serialize};

/// Result of the most recent calibration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationState {
    /// Meters per pixel at the base scale
    pub calibrated_scale: Option<f64>,
    /// Nominal map scale the calibration was made at
    pub calibration_base_scale: Option<u32>,
    /// Whether the calibrated value drives the active factor
    pub use_calibrated_scale: bool,
}

impl CalibrationState {
    /// Builds a state from persisted values.
    ///
    /// Non-positive scales count as absent. The calibrated flag survives
    /// only if both the value and its base scale are present, so the flag
    /// never claims a calibration that cannot be rescaled.
    pub fn restore(saved: &SavedState) -> Self {
        let calibrated_scale = saved
            .calibrated_scale
            .filter(|scale| scale.is_finite() && *scale > 0.0);
        let calibration_base_scale = saved.calibration_base_scale.filter(|base| *base > 0);
        let requested = saved.use_calibrated_scale.unwrap_or(false);
        let use_calibrated_scale =
            requested && calibrated_scale.is_some() && calibration_base_scale.is_some();

        if requested && !use_calibrated_scale {
            tracing::warn!(
                ?calibrated_scale,
                ?calibration_base_scale,
                "Persisted calibration is incomplete, falling back to the default scale"
            );
        }

        Self {
            calibrated_scale,
            calibration_base_scale,
            use_calibrated_scale,
        }
    }

    /// The calibrated factor and its base, when a calibration is in use.
    fn active(&self) -> Option<(f64, u32)> {
        if !self.use_calibrated_scale {
            return None;
        }
        match (self.calibrated_scale, self.calibration_base_scale) {
            (Some(scale), Some(base)) if base > 0 => Some((scale, base)),
            _ => None,
        }
    }
}

/// Summary of a successful calibration, for the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub scale_factor: ScaleFactor,
    pub grid_size: f64,
    pub square_size: f64,
    pub base_scale: u32,
}

/// Owns the calibration and the active conversion factor.
#[derive(Debug, Clone)]
pub struct ScaleEngine {
    state: CalibrationState,
    factor: ScaleFactor,
}

impl ScaleEngine {
    /// Creates an uncalibrated engine using `default_factor`.
    pub fn new(default_factor: ScaleFactor) -> Self {
        Self {
            state: CalibrationState::default(),
            factor: default_factor,
        }
    }

    /// Creates an engine from a previously saved calibration.
    ///
    /// When the calibration is in use the active factor is the calibrated
    /// value at its base scale.
    pub fn from_state(state: CalibrationState, default_factor: ScaleFactor) -> Self {
        let factor = state
            .active()
            .map(|(scale, _)| ScaleFactor::new(scale))
            .unwrap_or(default_factor);
        Self { state, factor }
    }

    /// Derives and stores the factor for a grid matched at `nominal_scale`.
    ///
    /// Fails with [`CalibrationError::InvalidGrid`] for a grid size that is
    /// not strictly positive and [`CalibrationError::InvalidMapScale`] for a
    /// zero map scale; state is untouched in both cases.
    pub fn apply_calibration(
        &mut self,
        nominal_scale: u32,
        grid_size: f64,
    ) -> Result<CalibrationReport, CalibrationError> {
        if !(grid_size > 0.0 && grid_size.is_finite()) {
            return Err(CalibrationError::InvalidGrid { size: grid_size });
        }
        if nominal_scale == 0 {
            return Err(CalibrationError::InvalidMapScale {
                scale: nominal_scale,
            });
        }

        let square_size = grid_size / GRID_CELLS as f64;
        let scale = nominal_scale as f64 / square_size;

        self.state = CalibrationState {
            calibrated_scale: Some(scale),
            calibration_base_scale: Some(nominal_scale),
            use_calibrated_scale: true,
        };
        self.factor = ScaleFactor::new(scale);

        tracing::info!(
            nominal_scale,
            grid_size,
            square_size,
            factor = scale,
            "Calibration applied"
        );

        Ok(CalibrationReport {
            scale_factor: self.factor,
            grid_size,
            square_size,
            base_scale: nominal_scale,
        })
    }

    /// Re-derives the active factor for a newly selected nominal scale.
    ///
    /// Without a calibration, or for a zero scale, the factor is left as it
    /// was.
    pub fn on_nominal_scale_changed(&mut self, nominal_scale: u32) -> ScaleFactor {
        if nominal_scale == 0 {
            tracing::warn!("Ignoring map scale of 0");
            return self.factor;
        }
        if let Some((scale, base)) = self.state.active() {
            let ratio = nominal_scale as f64 / base as f64;
            self.factor = ScaleFactor::new(scale).rescaled(ratio);
            tracing::info!(
                nominal_scale,
                base,
                factor = self.factor.meters_per_pixel(),
                "Calibration rescaled"
            );
        }
        self.factor
    }

    /// Active meters-per-pixel factor.
    pub fn current_factor(&self) -> ScaleFactor {
        self.factor
    }

    pub fn calibration(&self) -> &CalibrationState {
        &self.state
    }

    /// True when the active factor comes from a calibration.
    pub fn is_calibrated(&self) -> bool {
        self.state.active().is_some()
    }

    /// Label text for the current factor, with the base scale when calibrated.
    pub fn label(&self) -> String {
        match self.state.active() {
            Some((_, base)) => format!("{} (base: {} m)", self.factor, base),
            None => self.factor.to_string(),
        }
    }
}

impl Default for ScaleEngine {
    fn default() -> Self {
        Self::new(ScaleFactor::default())
    }
}
