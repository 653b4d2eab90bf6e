//! Per-item wear statistics with cross-source deduplication.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{ItemId, OutfitWearLogId, Snapshot};

/// Per-item wear counts and last-worn dates, merged from both wear sources.
///
/// Outfit-derived wear is counted once per [`crate::model::OutfitWearLogItem`]
/// row whose parent log is live. Item-level logs are counted only when their
/// source is `Standalone`; an `OutfitDerived` item log describes the same
/// physical event as the outfit log that produced it and is skipped here.
#[derive(Debug, Default)]
pub struct WearStats {
    counts: HashMap<ItemId, usize>,
    last_worn: HashMap<ItemId, DateTime<Utc>>,
}

impl WearStats {
    /// Merge both wear sources of a snapshot, applying the dedup rule.
    #[must_use]
    pub fn collect(snapshot: &Snapshot) -> Self {
        let mut stats = Self::default();

        // Timestamps of live outfit wear logs; items of deleted logs are
        // skipped along with their parent.
        let log_timestamps: HashMap<OutfitWearLogId, DateTime<Utc>> = snapshot
            .outfit_wear_logs
            .iter()
            .filter(|log| !log.is_deleted())
            .map(|log| (log.id, log.effective_worn_at()))
            .collect();

        for assoc in &snapshot.outfit_wear_log_items {
            let Some(&worn_at) = log_timestamps.get(&assoc.wear_log_id) else {
                continue;
            };
            stats.record(assoc.item_id, worn_at);
        }

        for log in &snapshot.item_wear_logs {
            if log.is_deleted() || !log.is_standalone() {
                continue;
            }
            stats.record(log.item_id, log.effective_worn_at());
        }

        stats
    }

    fn record(&mut self, item_id: ItemId, worn_at: DateTime<Utc>) {
        *self.counts.entry(item_id).or_insert(0) += 1;
        self.last_worn
            .entry(item_id)
            .and_modify(|last| {
                if worn_at > *last {
                    *last = worn_at;
                }
            })
            .or_insert(worn_at);
    }

    /// Total deduplicated wear events.
    #[must_use]
    pub fn total_wears(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct items with at least one wear.
    #[must_use]
    pub fn items_worn(&self) -> usize {
        self.counts.len()
    }

    /// Wear count of one item.
    #[must_use]
    pub fn count(&self, item_id: ItemId) -> usize {
        self.counts.get(&item_id).copied().unwrap_or(0)
    }

    /// Whether an item has ever been worn.
    #[must_use]
    pub fn has_worn(&self, item_id: ItemId) -> bool {
        self.counts.contains_key(&item_id)
    }

    /// Most recent wear date of an item.
    #[must_use]
    pub fn last_worn(&self, item_id: ItemId) -> Option<DateTime<Utc>> {
        self.last_worn.get(&item_id).copied()
    }

    /// Worn items whose last wear is older than `threshold_days` before `now`.
    #[must_use]
    pub fn neglected_count(&self, now: DateTime<Utc>, threshold_days: i64) -> usize {
        let cutoff = now - chrono::Duration::days(threshold_days);
        self.last_worn.values().filter(|last| **last < cutoff).count()
    }

    /// Per-item wear counts sorted ascending, for distribution analysis.
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable();
        counts
    }
}
