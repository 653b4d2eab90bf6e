//! Utilization: how actively items are worn.

use crate::config::defaults::{
    MIN_ITEMS_UTILIZATION, NEGLECT_THRESHOLD_DAYS, SINGLE_ITEM_DISTRIBUTION_SCORE,
};
use crate::model::Dimension;

use super::{DimensionResult, DimensionScorer, Factor, ScoringContext, WearStats};

/// Scores wear activity: how many items get worn at all, how many were worn
/// recently, and how evenly wear spreads across the wardrobe.
#[derive(Debug, Clone, Copy)]
pub struct UtilizationScorer;

impl DimensionScorer for UtilizationScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Utilization
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult {
        let items_count = ctx.items_count();
        if items_count < MIN_ITEMS_UTILIZATION {
            return DimensionResult::degraded(
                0.0,
                0.2,
                format!("Need at least {MIN_ITEMS_UTILIZATION} items to assess utilization"),
                Factor::InsufficientItems,
            );
        }

        let stats = WearStats::collect(ctx.snapshot);
        let total_wears = stats.total_wears();
        let items_worn = stats.items_worn();
        let never_worn = items_count.saturating_sub(items_worn);
        let neglected = stats.neglected_count(ctx.now, NEGLECT_THRESHOLD_DAYS);

        if total_wears == 0 {
            return DimensionResult::degraded(
                20.0,
                0.4,
                "No wear logs recorded yet. Start logging what you wear!",
                Factor::NoWearLogs,
            );
        }

        let worn_ratio = items_worn as f32 / items_count as f32;
        let active_ratio = items_worn.saturating_sub(neglected) as f32 / items_count as f32;

        // Gini coefficient of the per-item wear distribution
        // (0 = perfectly even, 1 = all wear on one item)
        let distribution_score = if items_worn > 1 {
            (1.0 - gini(&stats.sorted_counts())) * 30.0
        } else {
            SINGLE_ITEM_DISTRIBUTION_SCORE
        };

        let mut factors = Vec::new();
        if never_worn as f32 > items_count as f32 * 0.3 {
            factors.push(Factor::ManyUnwornItems);
        }
        if neglected as f32 > items_worn as f32 * 0.5 {
            factors.push(Factor::ManyNeglectedItems);
        }

        let why = format!(
            "{items_worn} of {items_count} items worn. \
             {never_worn} never worn, {neglected} neglected (30+ days)."
        );

        DimensionResult::new(
            worn_ratio * 35.0 + active_ratio * 35.0 + distribution_score,
            (0.4 + total_wears as f32 / 50.0).min(0.95),
            why,
            factors,
        )
    }
}

/// Standard discrete Gini coefficient over sorted ascending counts.
fn gini(sorted_counts: &[usize]) -> f32 {
    let n = sorted_counts.len();
    let total: usize = sorted_counts.iter().sum();
    if n < 2 || total == 0 {
        return 0.0;
    }
    let cumulative: usize = sorted_counts
        .iter()
        .enumerate()
        .map(|(i, count)| (i + 1) * count)
        .sum();
    (2.0 * cumulative as f32) / (n as f32 * total as f32) - (n as f32 + 1.0) / n as f32
}
