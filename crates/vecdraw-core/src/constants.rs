//! Shared constants for the drawing engine.

/// Discrete zoom scales selectable from the toolbar, smallest first.
pub const ZOOM_LEVELS: [f64; 5] = [0.25, 0.5, 1.0, 2.0, 4.0];

/// Index into [`ZOOM_LEVELS`] for 100%.
pub const DEFAULT_ZOOM_LEVEL: usize = 2;

/// Pick band half-width for thin features, in screen units.
pub const DEFAULT_PICK_TOLERANCE: f64 = 4.0;

/// Radius of a reshape handle, in screen units.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Radius of the rotation handle, in screen units.
pub const ROTATION_HANDLE_RADIUS: f64 = 4.0;

/// Distance of the rotation handle past the right edge of the box, in screen units.
pub const ROTATION_HANDLE_OFFSET: f64 = 15.0;

/// Tolerance used when matching handle centers against shape geometry.
pub const HANDLE_MATCH_EPSILON: f64 = 1e-6;

/// Default world extent (matches the 512x512 drawing widget).
pub const DEFAULT_WORLD_SIZE: f64 = 512.0;

/// Default view (window) extent.
pub const DEFAULT_VIEW_SIZE: f64 = 512.0;
