//! Drag interaction controller for canvas placements.
//!
//! Translates pointer events into a live visual offset for the dragged item
//! and a single committed position on release. The composition's item list
//! is never touched mid-gesture: only the dragged item's own transform
//! follows the pointer, so sibling placements never re-render per frame.
//!
//! One gesture at a time: a pointer-down on a second item while a drag is
//! in progress is ignored until the current drag ends.

use uuid::Uuid;

use outfitkit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DRAG_ELEVATION_Z};

use crate::item::OutfitItem;

/// The one position write a completed drag gesture produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnd {
    pub item_id: Uuid,
    /// Final normalized x, relative to canvas width.
    pub position_x: f64,
    /// Final normalized y, relative to canvas height.
    pub position_y: f64,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    item_id: Uuid,
    /// Pointer position at pointer-down, in canvas pixels.
    grab_x: f64,
    grab_y: f64,
    /// The item's normalized position at pointer-down.
    origin_x: f64,
    origin_y: f64,
    /// Accumulated pointer delta, in canvas pixels.
    delta_x: f64,
    delta_y: f64,
}

/// Tracks at most one in-progress drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// The id of the item currently being dragged, if any.
    pub fn dragging_item_id(&self) -> Option<Uuid> {
        self.active.as_ref().map(|drag| drag.item_id)
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begins dragging `item` from a pointer-down at canvas pixel
    /// coordinates. Returns `false` (and does nothing) when another drag is
    /// already in progress.
    pub fn pointer_down(&mut self, item: &OutfitItem, pointer_x: f64, pointer_y: f64) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActiveDrag {
            item_id: item.id,
            grab_x: pointer_x,
            grab_y: pointer_y,
            origin_x: item.position_x,
            origin_y: item.position_y,
            delta_x: 0.0,
            delta_y: 0.0,
        });
        true
    }

    /// Updates the tracked delta from a pointer-move and returns the
    /// dragged item's live visual offset in canvas pixels. Returns `None`
    /// when no drag is in progress (the event is not ours).
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64) -> Option<(f64, f64)> {
        let drag = self.active.as_mut()?;
        drag.delta_x = pointer_x - drag.grab_x;
        drag.delta_y = pointer_y - drag.grab_y;
        Some((drag.delta_x, drag.delta_y))
    }

    /// Ends the gesture and produces the single committed position:
    ///
    /// ```text
    /// position_x = origin_x + delta_x / CANVAS_WIDTH
    /// position_y = origin_y + delta_y / CANVAS_HEIGHT
    /// ```
    ///
    /// Returns `None` when no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        let drag = self.active.take()?;
        Some(DragEnd {
            item_id: drag.item_id,
            position_x: drag.origin_x + drag.delta_x / CANVAS_WIDTH,
            position_y: drag.origin_y + drag.delta_y / CANVAS_HEIGHT,
        })
    }

    /// Abandons the gesture without committing a position.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The z-index `item` should render at right now: its own value, or the
    /// elevated layer while it is the dragged item.
    pub fn visual_z(&self, item: &OutfitItem) -> i32 {
        if self.dragging_item_id() == Some(item.id) {
            DRAG_ELEVATION_Z
        } else {
            item.z_index
        }
    }
}
