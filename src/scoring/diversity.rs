//! Diversity: variety across configurable item attributes.

use std::collections::BTreeSet;

use crate::config::defaults::{
    COLOR_TARGET, LOW_COLOR_THRESHOLD, LOW_STYLE_THRESHOLD, MIN_ITEMS_DIVERSITY, PATTERN_TARGET,
    SEASON_TARGET, STYLE_TARGET,
};
use crate::model::Dimension;

use super::{DimensionResult, DimensionScorer, Factor, ScoringContext};

/// Scores attribute variety over the enabled subset of colors, patterns,
/// seasons, and styles. Each enabled attribute contributes a 0-100
/// sub-score that saturates at its target count; attributes with no
/// observed values are skipped.
#[derive(Debug, Clone, Copy)]
pub struct DiversityScorer;

impl DimensionScorer for DiversityScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Diversity
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult {
        if ctx.items_count() < MIN_ITEMS_DIVERSITY {
            return DimensionResult::degraded(
                50.0,
                0.3,
                "Need more items to assess diversity",
                Factor::InsufficientItems,
            );
        }

        let config = ctx.diversity;
        if !config.any_enabled() {
            return DimensionResult::degraded(
                50.0,
                0.8,
                "No diversity attributes enabled in preferences",
                Factor::NoAttributesEnabled,
            );
        }

        let mut sub_scores = Vec::new();
        let mut factors = Vec::new();

        if config.colors {
            let colors: BTreeSet<&str> = ctx
                .items()
                .filter_map(|item| item.base_color.as_deref())
                .collect();
            if !colors.is_empty() {
                sub_scores.push((colors.len() as f32 / COLOR_TARGET).min(1.0) * 100.0);
                if colors.len() < LOW_COLOR_THRESHOLD {
                    factors.push(Factor::LowColorDiversity);
                }
            }
        }

        if config.patterns {
            let patterns: BTreeSet<&str> = ctx
                .items()
                .filter_map(|item| item.pattern.as_deref())
                .collect();
            if !patterns.is_empty() {
                sub_scores.push((patterns.len() as f32 / PATTERN_TARGET).min(1.0) * 100.0);
            }
        }

        if config.seasons {
            let seasons: BTreeSet<String> = ctx
                .items()
                .flat_map(|item| item.season_tags.iter())
                .map(|tag| tag.to_lowercase())
                .collect();
            if !seasons.is_empty() {
                sub_scores.push((seasons.len() as f32 / SEASON_TARGET).min(1.0) * 100.0);
            }
        }

        if config.styles {
            let styles: BTreeSet<String> = ctx
                .items()
                .flat_map(|item| item.style_tags.iter())
                .map(|tag| tag.to_lowercase())
                .collect();
            if !styles.is_empty() {
                sub_scores.push((styles.len() as f32 / STYLE_TARGET).min(1.0) * 100.0);
                if styles.len() < LOW_STYLE_THRESHOLD {
                    factors.push(Factor::LowStyleDiversity);
                }
            }
        }

        if sub_scores.is_empty() {
            return DimensionResult::degraded(
                50.0,
                0.4,
                "Not enough attribute data to calculate diversity",
                Factor::MissingAttributeData,
            );
        }

        let total = sub_scores.iter().sum::<f32>() / sub_scores.len() as f32;
        let enabled = config.enabled_names();
        let why = format!(
            "Diversity across {} enabled attributes. Scored on: {}.",
            enabled.len(),
            enabled.join(", ")
        );

        DimensionResult::new(total, 0.7, why, factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiversityConfig;
    use crate::model::{Category, Item, Snapshot, UserId};
    use chrono::Utc;

    fn score_with(snapshot: &Snapshot, config: DiversityConfig) -> DimensionResult {
        let ctx = ScoringContext::new(snapshot, config, Utc::now());
        DiversityScorer.score(&ctx)
    }

    fn items(count: usize) -> Snapshot {
        let mut snapshot = Snapshot::empty(UserId::new());
        for _ in 0..count {
            snapshot.items.push(Item::new(Category::Top));
        }
        snapshot
    }

    #[test]
    fn too_few_items_degrades() {
        let snapshot = items(2);
        let result = score_with(&snapshot, DiversityConfig::default());
        assert_eq!(result.score, 50.0);
        assert_eq!(result.confidence, 0.3);
    }

    #[test]
    fn all_attributes_disabled_degrades() {
        let snapshot = items(5);
        let config = DiversityConfig {
            colors: false,
            patterns: false,
            seasons: false,
            styles: false,
        };
        let result = score_with(&snapshot, config);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.confidence, 0.8);
        assert!(result.has_factor(Factor::NoAttributesEnabled));
    }

    #[test]
    fn untagged_items_degrade_to_missing_data() {
        let snapshot = items(5);
        let result = score_with(&snapshot, DiversityConfig::default());
        assert_eq!(result.score, 50.0);
        assert_eq!(result.confidence, 0.4);
        assert!(result.has_factor(Factor::MissingAttributeData));
    }

    #[test]
    fn colors_are_excluded_by_default() {
        let mut snapshot = items(5);
        // Only one color: would fire the low-color factor if colors counted
        for item in &mut snapshot.items {
            item.base_color = Some("black".to_string());
            item.pattern = Some("solid".to_string());
        }
        snapshot.items[0].pattern = Some("stripe".to_string());
        let result = score_with(&snapshot, DiversityConfig::default());
        assert!(!result.has_factor(Factor::LowColorDiversity));
        assert!(result.why.contains("patterns, seasons, styles"));
    }

    #[test]
    fn low_color_and_style_diversity_flagged_when_enabled() {
        let mut snapshot = items(5);
        for item in &mut snapshot.items {
            item.base_color = Some("black".to_string());
            item.style_tags = vec!["casual".to_string()];
        }
        let config = DiversityConfig {
            colors: true,
            ..DiversityConfig::default()
        };
        let result = score_with(&snapshot, config);
        assert!(result.has_factor(Factor::LowColorDiversity));
        assert!(result.has_factor(Factor::LowStyleDiversity));
    }

    #[test]
    fn rich_tagging_scores_high() {
        let mut snapshot = items(8);
        let styles = ["casual", "office", "formal", "street", "sport"];
        let seasons = ["spring", "summer", "fall", "winter"];
        for (i, item) in snapshot.items.iter_mut().enumerate() {
            item.pattern = Some(["solid", "stripe", "check", "floral"][i % 4].to_string());
            item.style_tags = vec![styles[i % styles.len()].to_string()];
            item.season_tags = vec![seasons[i % seasons.len()].to_string()];
        }
        let result = score_with(&snapshot, DiversityConfig::default());
        assert_eq!(result.score, 100.0);
        assert_eq!(result.confidence, 0.7);
    }
}
