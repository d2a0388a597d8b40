//! Calibration grid geometry and drag handling.
//!
//! The grid is a square 7x7 matrix the user lays over the in-game map.
//! Dragging its interior translates it; dragging a corner resizes it against
//! the diagonally opposite corner. Pointer deltas are damped to half the
//! pointer's travel.

use mapruler_core::constants::{DRAG_DAMPING, GRID_CELLS, HANDLE_THRESHOLD, MIN_GRID_SIZE};
use mapruler_core::constants::{DEFAULT_GRID_POSITION, DEFAULT_GRID_SIZE};
use mapruler_core::Point;
use serde::{Deserialize, Serialize};

/// Part of the grid grabbed by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    /// Interior: translate the whole grid
    Move,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    /// The four resize corners in hit-test priority order.
    pub const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    /// Returns true for the four resize corners.
    pub fn is_corner(self) -> bool {
        !matches!(self, Handle::Move)
    }

    /// The corner diagonally opposite this one.
    pub fn opposite(self) -> Handle {
        match self {
            Handle::Move => Handle::Move,
            Handle::TopLeft => Handle::BottomRight,
            Handle::TopRight => Handle::BottomLeft,
            Handle::BottomLeft => Handle::TopRight,
            Handle::BottomRight => Handle::TopLeft,
        }
    }
}

/// Square grid rectangle: top-left corner plus edge length.
///
/// The size never drops below [`MIN_GRID_SIZE`]; constructors clamp rather
/// than reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRect {
    x: f64,
    y: f64,
    size: f64,
}

impl GridRect {
    /// Creates a grid rectangle, clamping `size` to the minimum.
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size: size.max(MIN_GRID_SIZE),
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Edge length in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Edge length of one grid square in pixels.
    pub fn square_size(&self) -> f64 {
        self.size / GRID_CELLS as f64
    }

    /// Position of a corner. `Handle::Move` yields the center.
    pub fn corner(&self, handle: Handle) -> Point {
        match handle {
            Handle::Move => Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0),
            Handle::TopLeft => Point::new(self.x, self.y),
            Handle::TopRight => Point::new(self.x + self.size, self.y),
            Handle::BottomLeft => Point::new(self.x, self.y + self.size),
            Handle::BottomRight => Point::new(self.x + self.size, self.y + self.size),
        }
    }

    /// All four corners with their handles, in hit-test order.
    pub fn corners(&self) -> [(Handle, Point); 4] {
        Handle::CORNERS.map(|handle| (handle, self.corner(handle)))
    }

    /// Offsets from the top-left edge of the interior grid lines.
    ///
    /// The same offsets apply to vertical lines (added to `x`) and
    /// horizontal lines (added to `y`).
    pub fn line_offsets(&self) -> impl Iterator<Item = f64> {
        let step = self.square_size();
        (1..GRID_CELLS).map(move |i| i as f64 * step)
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.size
            && point.y >= self.y
            && point.y <= self.y + self.size
    }
}

impl Default for GridRect {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_POSITION.0, DEFAULT_GRID_POSITION.1, DEFAULT_GRID_SIZE)
    }
}

/// An in-progress drag: what was grabbed, where, and the grid at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: Handle,
    pub start: Point,
    pub origin: GridRect,
}

/// Owns the calibration grid and the live drag, if any.
#[derive(Debug, Clone, Default)]
pub struct GridModel {
    rect: GridRect,
    drag: Option<DragSession>,
}

impl GridModel {
    /// Creates a model around an existing rectangle.
    pub fn new(rect: GridRect) -> Self {
        Self { rect, drag: None }
    }

    /// Current grid rectangle.
    pub fn rect(&self) -> GridRect {
        self.rect
    }

    /// Replaces the grid rectangle, dropping any open drag.
    pub fn set_rect(&mut self, rect: GridRect) {
        self.rect = rect;
        self.drag = None;
    }

    /// The open drag session, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Finds the handle under `point`.
    ///
    /// Corners within [`HANDLE_THRESHOLD`] win over the interior, so a point
    /// near a corner but inside the grid resolves to the corner.
    pub fn hit_test_handle(&self, point: &Point) -> Option<Handle> {
        let corner = self
            .rect
            .corners()
            .into_iter()
            .find(|(_, corner)| point.distance_to(corner) <= HANDLE_THRESHOLD)
            .map(|(handle, _)| handle);

        corner.or_else(|| self.rect.contains(point).then_some(Handle::Move))
    }

    /// Opens a drag session, replacing any that was open.
    pub fn begin_drag(&mut self, point: Point, handle: Handle) {
        tracing::debug!(?handle, x = point.x, y = point.y, "grid drag started");
        self.drag = Some(DragSession {
            handle,
            start: point,
            origin: self.rect,
        });
    }

    /// Applies the pointer position to the open drag. No-op without one.
    ///
    /// Size changes by the sum of the signed delta components and the
    /// position by the components on the dragged side. Only the stored size
    /// is clamped, position is not re-derived from it.
    ///
    /// The opposite corner is fully fixed for `BottomRight`. `TopRight`
    /// keeps its x and `BottomLeft` its y; `TopLeft` lets it drift by the
    /// cross component of the delta.
    pub fn update_drag(&mut self, point: Point) {
        let Some(session) = self.drag else {
            return;
        };

        let (raw_dx, raw_dy) = point.delta_from(&session.start);
        let dx = raw_dx * DRAG_DAMPING;
        let dy = raw_dy * DRAG_DAMPING;
        let origin = session.origin;

        let (x, y, size) = match session.handle {
            Handle::Move => (origin.x + dx, origin.y + dy, origin.size),
            Handle::TopLeft => (origin.x + dx, origin.y + dy, origin.size - dx - dy),
            Handle::TopRight => (origin.x, origin.y + dy, origin.size + dx - dy),
            Handle::BottomLeft => (origin.x + dx, origin.y, origin.size - dx + dy),
            Handle::BottomRight => (origin.x, origin.y, origin.size + dx + dy),
        };

        self.rect = GridRect::new(x, y, size);
    }

    /// Closes the drag session. Idempotent.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(
                handle = ?session.handle,
                size = self.rect.size,
                "grid drag finished"
            );
        }
    }
}
