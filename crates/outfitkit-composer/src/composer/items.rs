//! Item operations (add, remove, replace flow) for the composer.

use tracing::{debug, warn};
use uuid::Uuid;

use outfitkit_core::error::{ComposeError, Result};
use outfitkit_core::types::WardrobeItem;

use super::{AddOutcome, Composer, PendingReplace};
use crate::item::OutfitItem;
use crate::quota;
use crate::undo::{UndoAction, UndoEntry};

impl Composer {
    /// Attempts to add a wardrobe item to the composition.
    ///
    /// Rejects duplicates and full categories with an inline error. A full
    /// single-slot category transitions to the pending-replace phase
    /// instead of failing: the old/new pair goes to the confirmation
    /// collaborator and the list stays untouched until
    /// [`Composer::confirm_replace`] or [`Composer::cancel_replace`]
    /// resolves it.
    pub fn add_item(&mut self, candidate: WardrobeItem) -> Result<AddOutcome> {
        // A stale pending decision is abandoned by a fresh pick.
        if self.pending_replace.take().is_some() {
            debug!("discarding unresolved replace decision on new add");
        }

        if self.items.iter().any(|placed| placed.item.id == candidate.id) {
            warn!(item_id = %candidate.id, "rejected duplicate item");
            return Err(ComposeError::DuplicateItem {
                item_id: candidate.id,
            });
        }

        let decision = quota::can_add(&candidate, &self.items, self.quota());
        if decision.allowed {
            let item_id = self.place(candidate);
            return Ok(AddOutcome::Added { item_id });
        }

        if let Some(old_id) = decision.replace_candidate {
            let old_item = self
                .get_item(old_id)
                .cloned()
                .ok_or(ComposeError::ItemNotFound)?;
            debug!(category = %candidate.category, "entering replace flow");
            self.pending_replace = Some(PendingReplace {
                old_item_id: old_id,
                candidate: candidate.clone(),
            });
            return Ok(AddOutcome::ReplaceRequested {
                old_item: Box::new(old_item),
                candidate,
            });
        }

        let reason = decision
            .reason
            .unwrap_or_else(|| format!("No room for more {} in this outfit", candidate.category));
        warn!(category = %candidate.category, %reason, "rejected by quota");
        Err(ComposeError::QuotaExceeded {
            category: candidate.category,
            reason,
        })
    }

    /// Resolves the pending replace decision affirmatively: removes the old
    /// occupant, places the candidate, and records one Replace action whose
    /// previous snapshot still contains the old item.
    ///
    /// Returns the new placement id, or `None` when no decision was
    /// pending (the call no-ops).
    pub fn confirm_replace(&mut self) -> Option<Uuid> {
        let pending = self.pending_replace.take()?;
        let previous = self.items.clone();

        self.items.retain(|placed| placed.id != pending.old_item_id);
        let item_id = self.place_without_history(pending.candidate);

        self.undo_stack.push(UndoEntry::new(
            UndoAction::Replace,
            previous,
            self.items.clone(),
        ));
        debug!(%item_id, "replace confirmed");
        Some(item_id)
    }

    /// Resolves the pending replace decision negatively: the composition is
    /// left exactly as it was. Returns `false` when nothing was pending.
    pub fn cancel_replace(&mut self) -> bool {
        self.pending_replace.take().is_some()
    }

    /// Removes a placement unconditionally. Explicit deletion is treated as
    /// intentional and is not undoable.
    pub fn remove_item(&mut self, id: Uuid) -> Result<OutfitItem> {
        let index = self
            .items
            .iter()
            .position(|placed| placed.id == id)
            .ok_or(ComposeError::ItemNotFound)?;
        let removed = self.items.remove(index);

        // A pending replace aimed at the removed occupant is moot.
        if self
            .pending_replace
            .as_ref()
            .is_some_and(|pending| pending.old_item_id == id)
        {
            self.pending_replace = None;
        }
        Ok(removed)
    }

    /// Places an allowed candidate and records an Add action.
    fn place(&mut self, candidate: WardrobeItem) -> Uuid {
        let previous = self.items.clone();
        let item_id = self.place_without_history(candidate);
        self.undo_stack.push(UndoEntry::new(
            UndoAction::Add,
            previous,
            self.items.clone(),
        ));
        item_id
    }

    /// Appends a placement with its auto-layout position and size.
    fn place_without_history(&mut self, candidate: WardrobeItem) -> Uuid {
        let category = candidate.category;
        let index_within_category = self
            .items
            .iter()
            .filter(|placed| placed.category() == category)
            .count();

        let mut item = OutfitItem::new(candidate, self.items.len());
        self.apply_layout(&mut item, index_within_category);

        let item_id = item.id;
        self.items.push(item);
        item_id
    }
}
