//! Shared constants for the outfit composition canvas.

/// Logical canvas width in canvas units (phone-screen mockup aspect).
pub const CANVAS_WIDTH: f64 = 375.0;

/// Logical canvas height in canvas units.
pub const CANVAS_HEIGHT: f64 = 667.0;

/// Minimum crop rectangle dimension, as a fraction of the source image.
pub const MIN_CROP_FRACTION: f64 = 0.1;

/// Horizontal cascade step, in canvas units, between same-category items.
pub const CASCADE_STEP_X: f64 = 24.0;

/// Vertical cascade step, in canvas units, between same-category items.
pub const CASCADE_STEP_Y: f64 = 18.0;

/// z-index an item is elevated to while it is being dragged.
pub const DRAG_ELEVATION_Z: i32 = 1000;

/// Seconds the replace-undo affordance stays reachable after a replace.
pub const REPLACE_UNDO_WINDOW_SECS: i64 = 5;
