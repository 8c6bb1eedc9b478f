//! Composition orchestrator.
//!
//! Owns the live item list and composition metadata, and wires every user
//! action through the pure modules: quota validation, layout, crop math,
//! and the undo stack. This is the single place module outcomes become
//! user-facing messages; the pure modules stay free of presentation
//! concerns.
//!
//! This module is split into submodules:
//! - `items`: add/remove and the confirmation-gated replace flow
//! - `arrange`: position updates, z-order, auto-arrange, crops
//! - `history`: undo handling and the replace-undo window

mod arrange;
mod history;
mod items;

use uuid::Uuid;

use outfitkit_core::quota::QuotaConfig;
use outfitkit_core::types::{Occasion, WardrobeItem};

use crate::document::OutfitComposition;
use crate::item::OutfitItem;
use crate::undo::UndoStack;

/// Lifecycle phase of the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    /// No items placed yet.
    Empty,
    /// At least one item placed.
    Populated,
    /// A single-slot replace decision is awaiting confirmation.
    PendingReplace,
}

/// An unresolved replace decision: which occupant the candidate would swap
/// out. Surfaced to the external confirmation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReplace {
    /// Placement id of the current occupant.
    pub old_item_id: Uuid,
    /// The wardrobe item waiting to take the slot.
    pub candidate: WardrobeItem,
}

/// Outcome of an accepted `add_item` call.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The item was placed and an Add action recorded.
    Added {
        /// Placement id of the new item.
        item_id: Uuid,
    },
    /// A single-slot category is occupied; the composer is now awaiting a
    /// replace confirmation. The pair is surfaced for the confirmation UI.
    ReplaceRequested {
        old_item: Box<OutfitItem>,
        candidate: WardrobeItem,
    },
}

/// The outfit composition orchestrator.
#[derive(Debug, Clone)]
pub struct Composer {
    pub(crate) items: Vec<OutfitItem>,
    pub(crate) undo_stack: UndoStack,
    pub(crate) pending_replace: Option<PendingReplace>,
    quota: QuotaConfig,
    pub name: String,
    pub occasion: Occasion,
    pub background_color: String,
    pub description: String,
}

impl Composer {
    /// Creates an empty composer with the given quota table.
    pub fn new(quota: QuotaConfig) -> Self {
        Self {
            items: Vec::new(),
            undo_stack: UndoStack::new(),
            pending_replace: None,
            quota,
            name: String::new(),
            occasion: Occasion::default(),
            background_color: "#ffffff".to_string(),
            description: String::new(),
        }
    }

    /// Re-opens a saved composition for editing. Undo history starts fresh.
    pub fn from_document(doc: OutfitComposition, quota: QuotaConfig) -> Self {
        Self {
            items: doc.items,
            undo_stack: UndoStack::new(),
            pending_replace: None,
            quota,
            name: doc.name,
            occasion: doc.occasion,
            background_color: doc.background_color,
            description: doc.description,
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> ComposerPhase {
        if self.pending_replace.is_some() {
            ComposerPhase::PendingReplace
        } else if self.items.is_empty() {
            ComposerPhase::Empty
        } else {
            ComposerPhase::Populated
        }
    }

    /// The live item list, in insertion order.
    pub fn items(&self) -> &[OutfitItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Looks up a placement by id.
    pub fn get_item(&self, id: Uuid) -> Option<&OutfitItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The unresolved replace decision, if the composer is awaiting one.
    pub fn pending_replace(&self) -> Option<&PendingReplace> {
        self.pending_replace.as_ref()
    }

    /// The quota table in effect.
    pub fn quota(&self) -> &QuotaConfig {
        &self.quota
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_occasion(&mut self, occasion: Occasion) {
        self.occasion = occasion;
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Produces the immutable composition value for the persistence
    /// collaborator. The composer has no opinion on what happens to it.
    pub fn snapshot(&self) -> OutfitComposition {
        OutfitComposition {
            name: self.name.clone(),
            occasion: self.occasion,
            background_color: self.background_color.clone(),
            description: self.description.clone(),
            items: self.items.clone(),
        }
    }

    /// Session teardown: discards items, pending decisions, and all undo
    /// history. Called when the composer closes, save or cancel alike.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pending_replace = None;
        self.undo_stack.clear();
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(QuotaConfig::standard())
    }
}
