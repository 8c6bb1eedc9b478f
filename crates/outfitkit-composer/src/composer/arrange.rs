//! Placement operations (position, z-order, auto-arrange, crop) for the
//! composer.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use outfitkit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use outfitkit_core::error::{ComposeError, Result};
use outfitkit_core::types::Category;

use super::Composer;
use crate::crop::CropRect;
use crate::drag::DragEnd;
use crate::item::OutfitItem;
use crate::layout;

impl Composer {
    /// Writes a placement's normalized position. Called only from the drag
    /// controller's release path; positions may sit past the canvas edges
    /// but must be finite.
    pub fn update_position(&mut self, id: Uuid, x: f64, y: f64) -> Result<()> {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "position must be finite, got ({x}, {y})"
        );
        let item = self.item_mut(id)?;
        item.position_x = x;
        item.position_y = y;
        Ok(())
    }

    /// Commits a finished drag gesture: the one position write the gesture
    /// produces, plus a permanent bring-to-front (the drop is treated as a
    /// manual override until the next auto-arrange).
    pub fn apply_drag_end(&mut self, end: DragEnd) -> Result<()> {
        self.update_position(end.item_id, end.position_x, end.position_y)?;
        self.move_to_front(end.item_id)
    }

    /// Raises a placement above every other item in the composition.
    pub fn move_to_front(&mut self, id: Uuid) -> Result<()> {
        let top = self
            .items
            .iter()
            .filter(|placed| placed.id != id)
            .map(|placed| placed.z_index)
            .max()
            .unwrap_or(0);
        let item = self.item_mut(id)?;
        item.z_index = top + 1;
        Ok(())
    }

    /// Recomputes position, size, and z-layer for every item via the layout
    /// engine, in current list order, overwriting manual placements.
    /// Deliberately destructive and not undoable.
    pub fn reset_auto_arrange(&mut self) {
        debug!(items = self.items.len(), "auto-arranging composition");
        let mut per_category: HashMap<Category, usize> = HashMap::new();

        let mut items = std::mem::take(&mut self.items);
        for item in &mut items {
            let index = per_category.entry(item.category()).or_insert(0);
            Self::layout_item(item, *index);
            *index += 1;
        }
        self.items = items;
    }

    /// Persists a crop region on a placement after explicit confirmation in
    /// the crop tool. The rectangle must satisfy the crop invariants.
    pub fn apply_crop(&mut self, id: Uuid, crop: CropRect) -> Result<()> {
        if !crop.is_valid() {
            return Err(ComposeError::InvalidCropGeometry);
        }
        let item = self.item_mut(id)?;
        item.crop_region = Some(crop);
        Ok(())
    }

    /// Removes a placement's crop region, showing the full image again.
    pub fn clear_crop(&mut self, id: Uuid) -> Result<()> {
        let item = self.item_mut(id)?;
        item.crop_region = None;
        Ok(())
    }

    pub(crate) fn apply_layout(&mut self, item: &mut OutfitItem, index_within_category: usize) {
        Self::layout_item(item, index_within_category);
    }

    /// Fills in a placement from the layout engine, converting the engine's
    /// canvas-unit position into normalized coordinates.
    fn layout_item(item: &mut OutfitItem, index_within_category: usize) {
        let placement = layout::auto_position(item.category(), index_within_category);
        let (width, height) = layout::suggested_size(item.category());

        item.position_x = placement.x / CANVAS_WIDTH;
        item.position_y = placement.y / CANVAS_HEIGHT;
        item.display_width = width;
        item.display_height = height;
        item.z_index = placement.z_index;
    }

    fn item_mut(&mut self, id: Uuid) -> Result<&mut OutfitItem> {
        self.items
            .iter_mut()
            .find(|placed| placed.id == id)
            .ok_or(ComposeError::ItemNotFound)
    }
}
