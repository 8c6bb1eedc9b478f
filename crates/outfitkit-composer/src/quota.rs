//! Quota validation: may a candidate item join the composition?
//!
//! Pure function of its inputs; the orchestrator decides what to do with a
//! denial (reject outright, or route a full single-slot category into the
//! replace flow).

use uuid::Uuid;

use outfitkit_core::quota::QuotaConfig;
use outfitkit_core::types::WardrobeItem;

use crate::item::OutfitItem;

/// Outcome of a quota check.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaDecision {
    pub allowed: bool,
    /// Human-readable rejection message when not allowed.
    pub reason: Option<String>,
    /// The occupant to swap out when a full single-slot category should go
    /// through the replace flow instead of a plain rejection.
    pub replace_candidate: Option<Uuid>,
}

impl QuotaDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            replace_candidate: None,
        }
    }
}

/// Checks whether `candidate` may be added next to `current` under `config`.
///
/// Unlimited categories always allow. Finite categories allow while the
/// current count is below the maximum. A full single-slot category reports
/// its occupant as a replace candidate; a full multi-slot category is a
/// plain rejection (no replace path).
pub fn can_add(
    candidate: &WardrobeItem,
    current: &[OutfitItem],
    config: &QuotaConfig,
) -> QuotaDecision {
    let category = candidate.category;
    let Some(max) = config.max_count(category) else {
        return QuotaDecision::allow();
    };

    let in_category: Vec<&OutfitItem> = current
        .iter()
        .filter(|placed| placed.category() == category)
        .collect();

    if (in_category.len() as u32) < max {
        return QuotaDecision::allow();
    }

    let reason = format!("Already have {} in this outfit", category.quota_phrase());
    let replace_candidate = if max == 1 {
        in_category.first().map(|occupant| occupant.id)
    } else {
        None
    };

    QuotaDecision {
        allowed: false,
        reason: Some(reason),
        replace_candidate,
    }
}
