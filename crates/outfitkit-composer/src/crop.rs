//! Crop-rectangle math and the manual crop tool session.
//!
//! All math operates in normalized [0,1] space relative to the source
//! image: a pixel delta divided by the rendered container dimension gives a
//! normalized delta, so the same gesture crops identically at any zoom.
//!
//! Moves clamp to the image bounds. Corner resizes that would push an edge
//! past the image bound or shrink a dimension below the 10% minimum are
//! rejected outright (the rectangle does not update) rather than clamped,
//! which keeps the rectangle from jittering at its limits.

use serde::{Deserialize, Serialize};

use outfitkit_core::constants::MIN_CROP_FRACTION;

/// Drag handles exposed by the crop tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropHandle {
    /// Translates the whole rectangle.
    Move,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Normalized sub-rectangle of a source image.
///
/// Invariants: `0 <= x, y`, `x + width <= 1`, `y + height <= 1`, and both
/// dimensions are at least [`MIN_CROP_FRACTION`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// The full source image.
    pub const FULL: CropRect = CropRect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle satisfies the crop invariants.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.x >= 0.0
            && self.y >= 0.0
            && self.width >= MIN_CROP_FRACTION
            && self.height >= MIN_CROP_FRACTION
            && self.x + self.width <= 1.0
            && self.y + self.height <= 1.0
    }

    /// Applies a normalized drag delta for the given handle, returning the
    /// updated rectangle.
    ///
    /// `Move` clamps `x` to `[0, 1 - width]` and `y` to `[0, 1 - height]`;
    /// the rectangle cannot leave the image. Each corner handle adjusts two
    /// edges simultaneously; a resize that would violate the bounds or the
    /// minimum size returns `self` unchanged.
    pub fn apply_handle_drag(&self, handle: CropHandle, dx: f64, dy: f64) -> CropRect {
        if !dx.is_finite() || !dy.is_finite() {
            return *self;
        }

        let resized = match handle {
            CropHandle::Move => {
                return CropRect {
                    x: (self.x + dx).clamp(0.0, 1.0 - self.width),
                    y: (self.y + dy).clamp(0.0, 1.0 - self.height),
                    ..*self
                };
            }
            CropHandle::NorthWest => CropRect {
                x: self.x + dx,
                y: self.y + dy,
                width: self.width - dx,
                height: self.height - dy,
            },
            CropHandle::NorthEast => CropRect {
                x: self.x,
                y: self.y + dy,
                width: self.width + dx,
                height: self.height - dy,
            },
            CropHandle::SouthWest => CropRect {
                x: self.x + dx,
                y: self.y,
                width: self.width - dx,
                height: self.height + dy,
            },
            CropHandle::SouthEast => CropRect {
                x: self.x,
                y: self.y,
                width: self.width + dx,
                height: self.height + dy,
            },
        };

        if resized.is_valid() {
            resized
        } else {
            *self
        }
    }
}

impl Default for CropRect {
    fn default() -> Self {
        CropRect::FULL
    }
}

/// Converts a pixel delta into a normalized delta relative to the rendered
/// container size at interaction time.
///
/// Formula:
/// ```text
/// normalized_dx = pixel_dx / container_width
/// normalized_dy = pixel_dy / container_height
/// ```
pub fn normalized_delta(
    pixel_dx: f64,
    pixel_dy: f64,
    container_width: f64,
    container_height: f64,
) -> (f64, f64) {
    if container_width <= 0.0 || container_height <= 0.0 {
        return (0.0, 0.0);
    }
    (pixel_dx / container_width, pixel_dy / container_height)
}

/// Interactive crop editing state with two tiers.
///
/// The `preview` rectangle updates immediately on every handle drag and is
/// what the overlay and live thumbnail render from. The `committed`
/// rectangle is the canonical value siblings read; it syncs from the
/// preview through [`CropSession::take_pending`], which the owner is free
/// to run at lower priority than preview rendering. [`CropSession::finish`]
/// is the reconciliation step: once dragging stops the two tiers converge
/// and no pending write is dropped.
#[derive(Debug, Clone)]
pub struct CropSession {
    preview: CropRect,
    committed: CropRect,
    dirty: bool,
    dragging: Option<CropHandle>,
}

impl CropSession {
    /// Opens a session on an item's current crop region; `None` starts from
    /// the full image.
    pub fn new(initial: Option<CropRect>) -> Self {
        let rect = initial.unwrap_or(CropRect::FULL);
        Self {
            preview: rect,
            committed: rect,
            dirty: false,
            dragging: None,
        }
    }

    /// The immediately-updated rectangle used for rendering.
    pub fn preview(&self) -> CropRect {
        self.preview
    }

    /// The last synced canonical rectangle.
    pub fn committed(&self) -> CropRect {
        self.committed
    }

    /// Whether a preview change has not yet been synced.
    pub fn has_pending(&self) -> bool {
        self.dirty
    }

    /// The handle currently being dragged, if any.
    pub fn active_handle(&self) -> Option<CropHandle> {
        self.dragging
    }

    /// Starts dragging a handle. Ignored while another handle drag is
    /// already in progress.
    pub fn begin_drag(&mut self, handle: CropHandle) {
        if self.dragging.is_none() {
            self.dragging = Some(handle);
        }
    }

    /// Applies a pointer delta (in container pixels) to the active handle.
    /// Updates only the preview tier.
    pub fn drag_by_pixels(
        &mut self,
        pixel_dx: f64,
        pixel_dy: f64,
        container_width: f64,
        container_height: f64,
    ) {
        let Some(handle) = self.dragging else {
            return;
        };
        let (dx, dy) = normalized_delta(pixel_dx, pixel_dy, container_width, container_height);
        let updated = self.preview.apply_handle_drag(handle, dx, dy);
        if updated != self.preview {
            self.preview = updated;
            self.dirty = true;
        }
    }

    /// Ends the active handle drag.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Deferred sync step: moves the preview value into the committed tier.
    ///
    /// Returns the newly committed rectangle, or `None` when the tiers
    /// already agree.
    pub fn take_pending(&mut self) -> Option<CropRect> {
        if !self.dirty {
            return None;
        }
        self.committed = self.preview;
        self.dirty = false;
        Some(self.committed)
    }

    /// Flushes any pending sync and returns the converged rectangle. This
    /// is the value `apply_crop` persists on explicit user confirmation.
    pub fn finish(&mut self) -> CropRect {
        self.dragging = None;
        self.take_pending();
        self.committed
    }
}

impl Default for CropSession {
    fn default() -> Self {
        Self::new(None)
    }
}
