//! Application-wide constants.

/// Smallest edge length (pixels) the calibration grid may take.
pub const MIN_GRID_SIZE: f64 = 50.0;

/// Number of squares along each edge of the calibration grid.
pub const GRID_CELLS: u32 = 7;

/// Radius (pixels) around a grid corner that counts as grabbing it.
pub const HANDLE_THRESHOLD: f64 = 15.0;

/// Pointer deltas are scaled by this factor while dragging the grid.
pub const DRAG_DAMPING: f64 = 0.5;

/// Grid edge length used when nothing was persisted.
pub const DEFAULT_GRID_SIZE: f64 = 200.0;

/// Grid top-left position used when nothing was persisted.
pub const DEFAULT_GRID_POSITION: (f64, f64) = (100.0, 100.0);

/// Meters per pixel before any calibration exists.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Map scale selected at startup.
pub const DEFAULT_MAP_SCALE: u32 = 225;

/// Nominal map scales (meters per grid square) offered by the game.
pub const MAP_SCALES: [u32; 15] = [
    150, 170, 180, 190, 200, 225, 250, 275, 300, 325, 350, 400, 450, 500, 550,
];

/// Returns true if `scale` is one of the game's nominal map scales.
pub fn is_known_map_scale(scale: u32) -> bool {
    MAP_SCALES.contains(&scale)
}
