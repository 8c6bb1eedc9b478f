//! Fundamental data types: garment categories, occasions, and wardrobe
//! item references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Garment classification used for quota and layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Shoes,
    Bottoms,
    Tops,
    Dresses,
    Outerwear,
    Bags,
    Accessories,
}

impl Category {
    /// All categories, in real-world wearing order (bottom layer first).
    pub const ALL: [Category; 7] = [
        Category::Shoes,
        Category::Bottoms,
        Category::Tops,
        Category::Dresses,
        Category::Outerwear,
        Category::Bags,
        Category::Accessories,
    ];

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Shoes => "Shoes",
            Category::Bottoms => "Bottoms",
            Category::Tops => "Tops",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Bags => "Bags",
            Category::Accessories => "Accessories",
        }
    }

    /// Phrase used in quota rejection messages ("a pair of shoes", "a bag").
    pub fn quota_phrase(&self) -> &'static str {
        match self {
            Category::Shoes => "a pair of shoes",
            Category::Bottoms => "a bottom",
            Category::Tops => "enough tops",
            Category::Dresses => "a dress",
            Category::Outerwear => "an outerwear piece",
            Category::Bags => "a bag",
            Category::Accessories => "enough accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Occasion an outfit is composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Casual,
    Work,
    Date,
    Gym,
    Formal,
    Travel,
    Weekend,
    NightOut,
    Other,
}

impl Default for Occasion {
    fn default() -> Self {
        Occasion::Casual
    }
}

/// Reference to an item in the external wardrobe.
///
/// Owned by the wardrobe data provider; the composition engine reads it but
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Wardrobe-assigned identifier, unique per item.
    pub id: String,
    pub category: Category,
    pub brand: String,
    pub model: String,
    /// Hosted image URLs, primary image first.
    pub image_urls: Vec<String>,
}

impl WardrobeItem {
    /// Creates a wardrobe item reference.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        brand: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            brand: brand.into(),
            model: model.into(),
            image_urls: Vec::new(),
        }
    }

    /// The primary image URL, if any image is hosted for this item.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}
