//! # OutfitKit Composer
//!
//! The outfit composition engine: the interactive core that lets a user
//! build an outfit by placing wardrobe item images on a phone-screen canvas.
//!
//! ## Core Components
//!
//! - **Layout**: Auto-arrange positions and sizes by garment category, with
//!   vertical bands and z-layers matching real-world wearing order
//! - **Quota**: Per-category placement limits (one pair of shoes, unlimited
//!   accessories)
//! - **Crop**: Normalized crop-rectangle math with handle dragging and a
//!   two-tier preview/commit session
//! - **Drag**: Single-gesture drag controller committing one final position
//!   per gesture
//! - **Undo**: Snapshot stack for add and replace actions
//! - **Composer**: The orchestrator owning the item list and wiring the
//!   modules together
//!
//! ## Architecture
//!
//! ```text
//! Composer (item list, metadata, replace flow)
//!   ├── quota::can_add (pure validation)
//!   ├── layout (pure placement)
//!   ├── UndoStack (add/replace snapshots)
//!   ├── DragController (gesture → one committed position)
//!   └── CropSession (preview tier → committed tier)
//!
//! OutfitComposition (serializable document handed to persistence)
//! ```
//!
//! All I/O (saving, loading, image hosting) belongs to external
//! collaborators; this crate is a synchronous in-memory engine.

pub mod composer;
pub mod crop;
pub mod document;
pub mod drag;
pub mod item;
pub mod layout;
pub mod quota;
pub mod undo;

pub use composer::{AddOutcome, Composer, ComposerPhase, PendingReplace};
pub use crop::{CropHandle, CropRect, CropSession};
pub use document::OutfitComposition;
pub use drag::{DragController, DragEnd};
pub use item::OutfitItem;
pub use layout::{auto_position, suggested_size, Placement};
pub use quota::{can_add, QuotaDecision};
pub use undo::{UndoAction, UndoEntry, UndoStack};
