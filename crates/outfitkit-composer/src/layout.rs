//! Auto-arrange layout engine.
//!
//! Maps each garment category to a vertical band on the phone-screen canvas
//! and a z-layer matching real-world wearing order (shoes below bottoms
//! below tops below outerwear; accessories always on top). Positions are
//! computed in canvas units; sizes are normalized fractions of the canvas.
//!
//! The engine is a fixed lookup plus a deterministic cascade offset for
//! same-category siblings, so re-arranging the same item list always yields
//! the same placements.

use outfitkit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, CASCADE_STEP_X, CASCADE_STEP_Y};
use outfitkit_core::types::Category;

/// Placement computed by the layout engine, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z_index: i32,
}

/// Normalized top-left anchor of a category's band, chosen so the
/// category's default footprint sits centered (or offset for side bands)
/// within its band.
fn band_anchor(category: Category) -> (f64, f64) {
    match category {
        Category::Shoes => (0.34, 0.78),
        Category::Bottoms => (0.31, 0.44),
        Category::Tops => (0.29, 0.16),
        Category::Dresses => (0.29, 0.14),
        Category::Outerwear => (0.45, 0.12),
        Category::Bags => (0.68, 0.52),
        Category::Accessories => (0.06, 0.04),
    }
}

/// Base z-layer per category. Flat layering: every item of a category
/// shares the layer; cascade order breaks visual ties by draw order.
fn z_layer(category: Category) -> i32 {
    match category {
        Category::Shoes => 1,
        Category::Bottoms => 2,
        Category::Dresses => 3,
        Category::Tops => 4,
        Category::Outerwear => 5,
        Category::Bags => 6,
        Category::Accessories => 10,
    }
}

/// Computes the auto-arrange position for the `index_within_category`-th
/// item of a category, in canvas units.
///
/// The first item of a category lands on the band anchor; each successive
/// same-category item offsets by a fixed cascade step so siblings do not
/// perfectly overlap.
pub fn auto_position(category: Category, index_within_category: usize) -> Placement {
    let (anchor_x, anchor_y) = band_anchor(category);
    let cascade = index_within_category as f64;

    Placement {
        x: anchor_x * CANVAS_WIDTH + cascade * CASCADE_STEP_X,
        y: anchor_y * CANVAS_HEIGHT + cascade * CASCADE_STEP_Y,
        z_index: z_layer(category),
    }
}

/// Category-appropriate default footprint, as normalized fractions of the
/// canvas dimensions. A fixed lookup, independent of the source image's
/// aspect ratio.
pub fn suggested_size(category: Category) -> (f64, f64) {
    match category {
        Category::Shoes => (0.32, 0.14),
        Category::Bottoms => (0.38, 0.32),
        Category::Tops => (0.42, 0.26),
        Category::Dresses => (0.42, 0.50),
        Category::Outerwear => (0.44, 0.30),
        Category::Bags => (0.24, 0.18),
        Category::Accessories => (0.18, 0.12),
    }
}
