//! # OutfitKit Core
//!
//! Core types, errors, and configuration for OutfitKit.
//! Provides the fundamental abstractions shared by the outfit composition
//! engine: garment categories, wardrobe item references, the per-category
//! quota table, and the error taxonomy.

pub mod constants;
pub mod error;
pub mod quota;
pub mod types;

pub use error::{ComposeError, Result};
pub use quota::{QuotaConfig, QuotaRule};
pub use types::{Category, Occasion, WardrobeItem};
