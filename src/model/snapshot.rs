//! Read-only wardrobe snapshot: the engine's input.

use serde::{Deserialize, Serialize};

use super::{Item, ItemWearLog, Outfit, OutfitWearLog, OutfitWearLogItem, UserId};

/// Everything the engine needs to score one user's wardrobe.
///
/// Collaborators assemble this from their own storage: active items,
/// outfits with their item lists, and non-deleted wear logs. Scoring
/// additionally skips inactive items and soft-deleted logs itself, so a
/// snapshot built from unfiltered rows still scores correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub user_id: UserId,
    pub items: Vec<Item>,
    pub outfits: Vec<Outfit>,
    pub outfit_wear_logs: Vec<OutfitWearLog>,
    pub outfit_wear_log_items: Vec<OutfitWearLogItem>,
    pub item_wear_logs: Vec<ItemWearLog>,
}

impl Snapshot {
    /// Create an empty snapshot for a user.
    #[must_use]
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            outfits: Vec::new(),
            outfit_wear_logs: Vec::new(),
            outfit_wear_log_items: Vec::new(),
            item_wear_logs: Vec::new(),
        }
    }

    /// Active items, the population every scorer works on.
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.active)
    }

    /// Number of active items.
    #[must_use]
    pub fn items_count(&self) -> usize {
        self.active_items().count()
    }

    /// Number of outfits.
    #[must_use]
    pub fn outfits_count(&self) -> usize {
        self.outfits.len()
    }

    /// Total wear log rows (outfit-level plus item-level), before dedup.
    #[must_use]
    pub fn wear_logs_count(&self) -> usize {
        self.outfit_wear_logs.len() + self.item_wear_logs.len()
    }
}
