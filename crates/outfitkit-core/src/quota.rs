//! Per-category placement quota configuration.
//!
//! The quota table is a static resource supplied by the host application;
//! the composition engine only reads it. `None` for a max count means the
//! category is unlimited.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Maximum number of items of one category permitted in a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRule {
    pub category: Category,
    /// `None` means unlimited.
    pub max_count: Option<u32>,
}

impl QuotaRule {
    pub fn new(category: Category, max_count: Option<u32>) -> Self {
        Self {
            category,
            max_count,
        }
    }
}

/// Category → max-count lookup table.
///
/// Categories without an explicit rule are unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaConfig {
    rules: HashMap<Category, Option<u32>>,
}

impl QuotaConfig {
    /// Builds a config from explicit rules.
    pub fn from_rules(rules: impl IntoIterator<Item = QuotaRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|r| (r.category, r.max_count))
                .collect(),
        }
    }

    /// The standard wardrobe quota table: one slot for each garment layer,
    /// two tops (layering), unlimited accessories.
    pub fn standard() -> Self {
        Self::from_rules([
            QuotaRule::new(Category::Shoes, Some(1)),
            QuotaRule::new(Category::Bottoms, Some(1)),
            QuotaRule::new(Category::Tops, Some(2)),
            QuotaRule::new(Category::Dresses, Some(1)),
            QuotaRule::new(Category::Outerwear, Some(1)),
            QuotaRule::new(Category::Bags, Some(1)),
            QuotaRule::new(Category::Accessories, None),
        ])
    }

    /// Maximum count for a category; `None` means unlimited.
    pub fn max_count(&self, category: Category) -> Option<u32> {
        self.rules.get(&category).copied().flatten()
    }

    /// Whether the category allows exactly one item.
    pub fn is_single_slot(&self, category: Category) -> bool {
        self.max_count(category) == Some(1)
    }
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self::standard()
    }
}
