//! Two-point ruler.
//!
//! The user sets a start point, then an end point that can be moved around
//! afterwards. While only the start is set, the live cursor position acts as
//! the other endpoint so the readout previews the distance.

use mapruler_core::{Length, Point};

use crate::scale::ScaleEngine;

/// Endpoints of the current measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasurementSegment {
    pub start: Option<Point>,
    pub end: Option<Point>,
    /// Live cursor position, only meaningful while `end` is unset
    pub hover: Option<Point>,
}

impl MeasurementSegment {
    /// The endpoint paired with `start`: the fixed end point, else the hover.
    pub fn target(&self) -> Option<Point> {
        self.end.or(self.hover)
    }

    /// True while the segment follows the cursor rather than a fixed end.
    pub fn is_preview(&self) -> bool {
        self.start.is_some() && self.end.is_none() && self.hover.is_some()
    }
}

/// Manages the measurement segment and converts it to a distance.
#[derive(Debug, Clone, Default)]
pub struct MeasurementEngine {
    segment: MeasurementSegment,
}

impl MeasurementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(&self) -> &MeasurementSegment {
        &self.segment
    }

    /// Starts a new measurement at `point`, discarding any end point.
    pub fn set_start(&mut self, point: Point) {
        self.segment.start = Some(point);
        self.segment.end = None;
    }

    /// Places or moves the end point. No-op without a start point.
    pub fn set_end(&mut self, point: Point) {
        if self.segment.start.is_none() {
            return;
        }
        match self.segment.end.as_mut() {
            Some(end) => *end = point,
            None => self.segment.end = Some(point),
        }
    }

    /// Records the cursor position for the live preview.
    pub fn update_hover(&mut self, point: Point) {
        self.segment.hover = Some(point);
    }

    /// Distance from start to the resolved target under the engine's
    /// current factor, read at call time.
    pub fn distance(&self, scale: &ScaleEngine) -> Option<Length> {
        let start = self.segment.start?;
        let target = self.segment.target()?;
        Some(Length::from_pixels(
            start.distance_to(&target),
            scale.current_factor(),
        ))
    }

    /// Clears start, end and hover.
    pub fn reset(&mut self) {
        self.segment = MeasurementSegment::default();
    }
}
