//! Completeness: coverage of the core wardrobe categories.

use std::collections::BTreeSet;

use crate::config::defaults::{CATEGORY_VARIETY_TARGET, EVENT_TAG_TARGET};
use crate::model::{CoreCategory, Dimension};

use super::{tally::CategoryTally, DimensionResult, DimensionScorer, Factor, ScoringContext};

/// Scores whether the essential categories are present, how much variety
/// each carries, and how many event types the wardrobe covers.
#[derive(Debug, Clone, Copy)]
pub struct CompletenessScorer;

impl DimensionScorer for CompletenessScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Completeness
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult {
        if ctx.items_count() == 0 {
            return DimensionResult::degraded(
                0.0,
                0.5,
                "No items in wardrobe yet",
                Factor::EmptyWardrobe,
            );
        }

        let tally = CategoryTally::collect(ctx.items());

        // Normalized distinct event tags across all items
        let event_coverage: BTreeSet<String> = ctx
            .items()
            .flat_map(|item| item.event_tags.iter())
            .map(|tag| tag.to_lowercase())
            .collect();

        let core_present = CoreCategory::ALL
            .iter()
            .filter(|core| tally.effective(**core) > 0)
            .count();
        let core_ratio = core_present as f32 / CoreCategory::ALL.len() as f32;

        let variety_score = CoreCategory::ALL
            .iter()
            .map(|core| (tally.effective(*core) as f32 / CATEGORY_VARIETY_TARGET).min(1.0))
            .sum::<f32>()
            / CoreCategory::ALL.len() as f32;

        let event_score = (event_coverage.len() as f32 / EVENT_TAG_TARGET).min(1.0);

        let missing: Vec<CoreCategory> = CoreCategory::ALL
            .iter()
            .copied()
            .filter(|core| tally.effective(*core) == 0)
            .collect();
        let factors = missing
            .first()
            .map(|core| vec![Factor::MissingCategory(*core)])
            .unwrap_or_default();

        let mut why = format!(
            "{core_present}/{} core categories covered",
            CoreCategory::ALL.len()
        );
        if tally.onepiece() > 0 {
            why.push_str(&format!(" (including {} onepiece)", tally.onepiece()));
        }
        why.push_str(". ");
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(CoreCategory::name).collect();
            why.push_str(&format!("Missing: {}. ", names.join(", ")));
        }
        why.push_str(&format!("Event types: {}.", event_coverage.len()));

        DimensionResult::new(
            core_ratio * 50.0 + variety_score * 30.0 + event_score * 20.0,
            0.9,
            why,
            factors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiversityConfig;
    use crate::model::{Category, Item, Snapshot, UserId};
    use chrono::Utc;

    fn score(snapshot: &Snapshot) -> DimensionResult {
        let ctx = ScoringContext::new(snapshot, DiversityConfig::default(), Utc::now());
        CompletenessScorer.score(&ctx)
    }

    fn snapshot_of(categories: &[Category]) -> Snapshot {
        let mut snapshot = Snapshot::empty(UserId::new());
        for category in categories {
            snapshot.items.push(Item::new(*category));
        }
        snapshot
    }

    #[test]
    fn empty_wardrobe_scores_zero() {
        let snapshot = Snapshot::empty(UserId::new());
        let result = score(&snapshot);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.5);
        assert!(result.why.to_lowercase().contains("no items"));
        assert!(result.has_factor(Factor::EmptyWardrobe));
    }

    #[test]
    fn onepiece_covers_top_and_bottom() {
        let snapshot = snapshot_of(&[
            Category::Onepiece,
            Category::Footwear,
            Category::Outerwear,
        ]);
        let result = score(&snapshot);
        assert!(result.why.contains("4/4"), "why: {}", result.why);
        assert!(result.why.contains("onepiece"), "why: {}", result.why);
        assert!(result.contributing_factors.is_empty());
    }

    #[test]
    fn first_missing_category_reported() {
        let snapshot = snapshot_of(&[Category::Top, Category::Bottom]);
        let result = score(&snapshot);
        assert!(result.has_factor(Factor::MissingCategory(CoreCategory::Footwear)));
        assert!(result.why.contains("Missing: footwear, outerwear"));
    }

    #[test]
    fn event_tags_are_normalized() {
        let mut snapshot = snapshot_of(&[Category::Top]);
        snapshot.items[0].event_tags = vec!["Office".to_string(), "office".to_string()];
        let result = score(&snapshot);
        assert!(result.why.contains("Event types: 1."));
    }

    #[test]
    fn full_core_coverage_with_variety_scores_high() {
        let mut categories = Vec::new();
        for category in [
            Category::Top,
            Category::Bottom,
            Category::Footwear,
            Category::Outerwear,
        ] {
            for _ in 0..3 {
                categories.push(category);
            }
        }
        let mut snapshot = snapshot_of(&categories);
        for (i, tag) in ["casual", "office", "formal", "sport"].iter().enumerate() {
            snapshot.items[i].event_tags = vec![(*tag).to_string()];
        }
        let result = score(&snapshot);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.confidence, 0.9);
    }
}
