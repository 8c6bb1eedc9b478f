//! Undo handling for the composer.

use chrono::{DateTime, Utc};
use tracing::debug;

use outfitkit_core::constants::REPLACE_UNDO_WINDOW_SECS;

use super::Composer;
use crate::undo::UndoAction;

impl Composer {
    /// Undoes the most recent add or replace by installing its previous
    /// item-list snapshot. Returns the undone action, or `None` when the
    /// history is empty (the call no-ops).
    pub fn undo(&mut self) -> Option<UndoAction> {
        let entry = self.undo_stack.undo()?;
        debug!(action = ?entry.action, "undoing");
        self.items = entry.previous_items;
        self.pending_replace = None;
        Some(entry.action)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    /// Whether the time-boxed replace-undo affordance should still be
    /// offered: the top of the stack is a Replace recorded within the
    /// undo window. The window is UX policy; the stack itself keeps the
    /// entry either way.
    pub fn replace_undo_available(&self, now: DateTime<Utc>) -> bool {
        self.undo_stack.last().is_some_and(|entry| {
            entry.action == UndoAction::Replace
                && (now - entry.timestamp).num_seconds() <= REPLACE_UNDO_WINDOW_SECS
        })
    }
}
