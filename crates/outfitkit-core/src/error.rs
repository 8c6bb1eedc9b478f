//! Error handling for OutfitKit.
//!
//! Every error in the composition engine is recoverable and user-facing:
//! rejections are returned inline as values, never thrown across module
//! boundaries, and the composition state is always left valid. The `Display`
//! strings double as the user-visible messages the orchestrator surfaces.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::Category;

/// Composition error type
///
/// Represents the rejections a composition operation can report. None of
/// these are fatal; the caller surfaces the message and the composition
/// remains unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComposeError {
    /// The candidate's category is already at its quota.
    #[error("{reason}")]
    QuotaExceeded {
        /// The category that is full.
        category: Category,
        /// Human-readable rejection message.
        reason: String,
    },

    /// The candidate wardrobe item is already placed in this composition.
    #[error("This item is already in the outfit")]
    DuplicateItem {
        /// The wardrobe id of the duplicate item.
        item_id: String,
    },

    /// A crop rectangle violates the bounds or minimum-size invariants.
    #[error("Crop region must stay inside the image and keep at least 10% of each dimension")]
    InvalidCropGeometry,

    /// Undo was requested with an empty history.
    #[error("Nothing to undo")]
    UndoUnavailable,

    /// An operation addressed a placement id that is not in the composition.
    #[error("Item is no longer part of the outfit")]
    ItemNotFound,
}

/// Result type using ComposeError
pub type Result<T> = std::result::Result<T, ComposeError>;
