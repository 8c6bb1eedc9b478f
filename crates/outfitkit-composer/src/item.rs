//! Item type definitions: the placed garment record on the composition
//! canvas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use outfitkit_core::types::{Category, WardrobeItem};

use crate::crop::CropRect;

/// One placed garment or accessory within a composition.
///
/// Position and size are normalized fractions of the canvas reference
/// dimensions, so a placement renders identically regardless of the actual
/// pixel size the canvas is displayed at. The id is client-generated and
/// temporary until the composition is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItem {
    pub id: Uuid,
    /// The external wardrobe item this placement renders. Never mutated here.
    pub item: WardrobeItem,
    /// Normalized [0,1] top-left position, relative to canvas width.
    pub position_x: f64,
    /// Normalized [0,1] top-left position, relative to canvas height.
    pub position_y: f64,
    /// Normalized [0,1] footprint, relative to canvas width.
    pub display_width: f64,
    /// Normalized [0,1] footprint, relative to canvas height.
    pub display_height: f64,
    /// Layering order; higher draws on top.
    pub z_index: i32,
    /// Visible sub-rectangle of the source image; `None` shows the full image.
    pub crop_region: Option<CropRect>,
    /// Insertion/display order, independent of `z_index`.
    pub order: usize,
}

impl OutfitItem {
    /// Creates a placement for a wardrobe item. Position, size, and z-index
    /// start at zero; the layout engine fills them in.
    pub fn new(item: WardrobeItem, order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            position_x: 0.0,
            position_y: 0.0,
            display_width: 0.0,
            display_height: 0.0,
            z_index: 0,
            crop_region: None,
            order,
        }
    }

    /// The garment category of the referenced wardrobe item.
    pub fn category(&self) -> Category {
        self.item.category
    }

    /// The wardrobe id of the referenced item.
    pub fn wardrobe_id(&self) -> &str {
        &self.item.id
    }
}
