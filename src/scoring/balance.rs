//! Balance: proportions between categories.

use crate::config::defaults::MIN_ITEMS_BALANCE;
use crate::model::{Category, CoreCategory, Dimension};

use super::{tally::CategoryTally, DimensionResult, DimensionScorer, Factor, ScoringContext};

/// Scores category proportions: the tops-to-bottoms ratio and the share of
/// outerwear and footwear in the wardrobe.
///
/// Banded components use effective counts (onepiece covers both top and
/// bottom); the imbalance factor looks at raw counts so the follow-up
/// suggestion targets what the user actually owns.
#[derive(Debug, Clone, Copy)]
pub struct BalanceScorer;

impl DimensionScorer for BalanceScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Balance
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult {
        let items_count = ctx.items_count();
        if items_count < MIN_ITEMS_BALANCE {
            return DimensionResult::degraded(
                50.0,
                0.3,
                "Need more items to assess balance",
                Factor::InsufficientItems,
            );
        }

        let tally = CategoryTally::collect(ctx.items());
        let tops = tally.effective(CoreCategory::Top);
        let bottoms = tally.effective(CoreCategory::Bottom);
        let outerwear = tally.raw(Category::Outerwear);
        let footwear = tally.raw(Category::Footwear);

        // Tops to bottoms ratio (ideal: 1.0 to 2.0)
        let tb_score = if bottoms > 0 {
            let ratio = tops as f32 / bottoms as f32;
            if (1.0..=2.0).contains(&ratio) {
                40.0
            } else if (0.5..=3.0).contains(&ratio) {
                25.0
            } else {
                10.0
            }
        } else if tops > 0 {
            5.0
        } else {
            0.0
        };

        // Outerwear proportion (ideal: 10-25% of wardrobe)
        let ow_ratio = outerwear as f32 / items_count as f32;
        let ow_score = if (0.10..=0.25).contains(&ow_ratio) {
            30.0
        } else if (0.05..=0.35).contains(&ow_ratio) {
            20.0
        } else if outerwear > 0 {
            10.0
        } else {
            5.0
        };

        // Footwear proportion (ideal: 8-20%)
        let fw_ratio = footwear as f32 / items_count as f32;
        let fw_score = if (0.08..=0.20).contains(&fw_ratio) {
            30.0
        } else if footwear > 0 {
            15.0
        } else {
            5.0
        };

        // Imbalance factor on raw counts, not effective ones
        let raw_tops = tally.raw(Category::Top);
        let raw_bottoms = tally.raw(Category::Bottom);
        let mut factors = Vec::new();
        if raw_bottoms > 0 {
            let raw_ratio = raw_tops as f32 / raw_bottoms as f32;
            if raw_ratio > 3.0 || raw_ratio < 0.5 {
                factors.push(Factor::ImbalancedTopsBottoms);
            }
        }

        let mut why = format!("Tops:Bottoms ratio is {tops}:{bottoms}");
        if tally.onepiece() > 0 {
            why.push_str(&format!(" (including {} onepiece)", tally.onepiece()));
        }
        why.push_str(&format!(
            ". Outerwear {outerwear} items ({:.0}%), Footwear {footwear} items ({:.0}%).",
            ow_ratio * 100.0,
            fw_ratio * 100.0
        ));

        DimensionResult::new(tb_score + ow_score + fw_score, 0.85, why, factors)
    }
}
