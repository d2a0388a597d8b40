//! Input events understood by the controller.
//!
//! Events are plain data so they can come from a toolkit callback, a test or
//! a recorded JSON script alike.

use mapruler_core::{CalibrationError, Point};
use serde::{Deserialize, Serialize};

use crate::controller::{Mode, PointerButton, RulerController};
use crate::scale::CalibrationReport;

/// A discrete input from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        button: PointerButton,
    },
    SelectScale {
        scale: u32,
    },
    ApplyCalibration,
    Reset,
    ToggleMode,
}

/// What the UI should react to after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// State may have changed; redraw
    Updated,
    /// Mode switched
    ModeChanged(Mode),
    /// Calibration succeeded; show the report
    Calibrated(CalibrationReport),
    /// Calibration was refused; show a blocking notice
    CalibrationFailed(CalibrationError),
}

impl RulerController {
    /// Dispatches one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                self.pointer_down(Point::new(x, y), button);
                EventOutcome::Updated
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Point::new(x, y));
                EventOutcome::Updated
            }
            InputEvent::PointerUp { button } => {
                self.pointer_up(button);
                EventOutcome::Updated
            }
            InputEvent::SelectScale { scale } => {
                self.select_scale(scale);
                EventOutcome::Updated
            }
            InputEvent::ApplyCalibration => match self.apply_calibration() {
                Ok(report) => EventOutcome::Calibrated(report),
                Err(err) => {
                    tracing::warn!("Calibration refused: {}", err);
                    EventOutcome::CalibrationFailed(err)
                }
            },
            InputEvent::Reset => {
                self.reset();
                EventOutcome::Updated
            }
            InputEvent::ToggleMode => EventOutcome::ModeChanged(self.toggle_mode()),
        }
    }
}
