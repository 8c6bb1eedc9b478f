//! Undo stack for reversible composition actions.
//!
//! Records whole item-list snapshots for add and replace actions; the
//! orchestrator installs a popped entry's previous snapshot as the live
//! list. Drag repositioning and crops are deliberately not recorded.
//! History is session-scoped: it is cleared when the composer closes and
//! never persists.

use chrono::{DateTime, Utc};

use crate::item::OutfitItem;

/// The composition actions that can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoAction {
    Add,
    Replace,
}

/// One reversible action: the item list before and after it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    pub action: UndoAction,
    pub timestamp: DateTime<Utc>,
    pub previous_items: Vec<OutfitItem>,
    pub current_items: Vec<OutfitItem>,
}

impl UndoEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(
        action: UndoAction,
        previous_items: Vec<OutfitItem>,
        current_items: Vec<OutfitItem>,
    ) -> Self {
        Self {
            action,
            timestamp: Utc::now(),
            previous_items,
            current_items,
        }
    }
}

/// LIFO stack of undoable actions.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records an action.
    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    /// Pops the most recent action. The caller installs
    /// `entry.previous_items` as the live list; an empty stack returns
    /// `None` and the caller no-ops.
    pub fn undo(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// The most recent entry without popping it.
    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards all history. Called when the composer closes, regardless of
    /// save or cancel.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
