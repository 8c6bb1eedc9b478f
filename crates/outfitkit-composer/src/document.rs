//! Serializable outfit document handed to the persistence collaborator.
//!
//! The document is a plain value: the composer produces it on save and can
//! be re-opened from one for editing. Persistence itself (wire format,
//! storage) belongs to an external collaborator.

use serde::{Deserialize, Serialize};

use outfitkit_core::types::Occasion;

use crate::item::OutfitItem;

/// A complete outfit composition: metadata plus ordered item placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitComposition {
    pub name: String,
    pub occasion: Occasion,
    /// Canvas background, as a hex color string.
    pub background_color: String,
    pub description: String,
    /// Placements in insertion order, unique by wardrobe item id.
    pub items: Vec<OutfitItem>,
}

impl OutfitComposition {
    /// An empty composition with default metadata.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            occasion: Occasion::default(),
            background_color: "#ffffff".to_string(),
            description: String::new(),
            items: Vec::new(),
        }
    }
}

impl Default for OutfitComposition {
    fn default() -> Self {
        Self::empty()
    }
}
