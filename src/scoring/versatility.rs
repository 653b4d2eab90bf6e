//! Versatility: how much items are reused across outfits.

use std::collections::HashMap;

use crate::config::defaults::{MIN_ITEMS_VERSATILITY, OUTFIT_DENSITY_TARGET};
use crate::model::{Dimension, ItemId};

use super::{DimensionResult, DimensionScorer, Factor, ScoringContext};

/// Scores item reuse: how many items appear in outfits, how many appear in
/// several, and how densely outfits draw on the same pieces.
#[derive(Debug, Clone, Copy)]
pub struct VersatilityScorer;

impl DimensionScorer for VersatilityScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Versatility
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult {
        let items_count = ctx.items_count();
        if items_count < MIN_ITEMS_VERSATILITY {
            return DimensionResult::degraded(
                0.0,
                0.3,
                format!("Need at least {MIN_ITEMS_VERSATILITY} items to assess versatility"),
                Factor::InsufficientItems,
            );
        }

        // How many outfits each item appears in
        let mut outfit_memberships: HashMap<ItemId, usize> = HashMap::new();
        for outfit in &ctx.snapshot.outfits {
            for placement in &outfit.items {
                *outfit_memberships.entry(placement.item_id).or_insert(0) += 1;
            }
        }

        if outfit_memberships.is_empty() {
            return DimensionResult::degraded(
                30.0,
                0.5,
                "No outfits created yet. Create outfits to see item versatility.",
                Factor::NoOutfits,
            );
        }

        let items_in_outfits = outfit_memberships.len();
        let total_memberships: usize = outfit_memberships.values().sum();
        let avg_outfits_per_item = total_memberships as f32 / items_in_outfits.max(1) as f32;
        let items_in_multiple = outfit_memberships.values().filter(|c| **c > 1).count();
        let reuse_ratio = items_in_multiple as f32 / items_in_outfits.max(1) as f32;
        let usage_ratio = items_in_outfits as f32 / items_count as f32;

        let base_score = usage_ratio * 40.0;
        let reuse_score = reuse_ratio * 40.0;
        let density_score = (avg_outfits_per_item / OUTFIT_DENSITY_TARGET).min(1.0) * 20.0;

        let mut factors = Vec::new();
        if reuse_ratio > 0.5 {
            factors.push(Factor::HighReuse);
        }
        if usage_ratio < 0.3 {
            factors.push(Factor::ManyUnusedItems);
        }

        let why = format!(
            "{items_in_multiple} of {items_in_outfits} items appear in multiple outfits. \
             Average {avg_outfits_per_item:.1} outfits per item."
        );

        DimensionResult::new(
            base_score + reuse_score + density_score,
            (0.5 + ctx.outfits_count() as f32 / 20.0).min(0.9),
            why,
            factors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiversityConfig;
    use crate::model::{Category, Item, Outfit, Snapshot, UserId};
    use chrono::Utc;

    fn snapshot_with_items(count: usize) -> Snapshot {
        let mut snapshot = Snapshot::empty(UserId::new());
        for _ in 0..count {
            snapshot.items.push(Item::new(Category::Top));
        }
        snapshot
    }

    fn score(snapshot: &Snapshot) -> DimensionResult {
        let ctx = ScoringContext::new(snapshot, DiversityConfig::default(), Utc::now());
        VersatilityScorer.score(&ctx)
    }

    #[test]
    fn too_few_items_degrades() {
        let snapshot = snapshot_with_items(4);
        let result = score(&snapshot);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.3);
        assert!(result.has_factor(Factor::InsufficientItems));
    }

    #[test]
    fn no_outfits_degrades() {
        let snapshot = snapshot_with_items(6);
        let result = score(&snapshot);
        assert_eq!(result.score, 30.0);
        assert_eq!(result.confidence, 0.5);
        assert!(result.has_factor(Factor::NoOutfits));
    }

    #[test]
    fn full_reuse_scores_high() {
        let mut snapshot = snapshot_with_items(5);
        let ids: Vec<_> = snapshot.items.iter().map(|item| item.id).collect();
        // Every item in both outfits: usage 1.0, reuse 1.0
        for _ in 0..2 {
            snapshot
                .outfits
                .push(Outfit::new(ids.iter().map(|id| (*id, "slot"))));
        }
        let result = score(&snapshot);
        assert!(result.score > 80.0, "score {} should be > 80", result.score);
        assert!(result.has_factor(Factor::HighReuse));
    }

    #[test]
    fn mostly_unused_items_flagged() {
        let mut snapshot = snapshot_with_items(10);
        let first = snapshot.items[0].id;
        snapshot.outfits.push(Outfit::new([(first, "top")]));
        let result = score(&snapshot);
        assert!(result.has_factor(Factor::ManyUnusedItems));
        assert!(result.score < 50.0);
    }

    #[test]
    fn confidence_grows_with_outfits_up_to_cap() {
        let mut snapshot = snapshot_with_items(5);
        let first = snapshot.items[0].id;
        for _ in 0..30 {
            snapshot.outfits.push(Outfit::new([(first, "top")]));
        }
        let result = score(&snapshot);
        assert_eq!(result.confidence, 0.9);
    }
}
