//! Property-based tests for the scoring engine.
//!
//! Ensures the scoring contract holds across arbitrary snapshots: scores
//! stay in [0, 100], confidences in [0, 1], computation is deterministic,
//! and the suggestion list respects its bounds and ordering.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use wardrobe_quality::config::QualityPreferences;
use wardrobe_quality::model::{
    Category, Item, ItemWearLog, ItemWearLogId, Outfit, OutfitWearLog, OutfitWearLogId,
    OutfitWearLogItem, Snapshot, UserId, WearSource,
};
use wardrobe_quality::{Dimension, MemoryScoreStore, QualityEngine, ScoringWeights, Validatable};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 28, 12, 0, 0).unwrap()
}

fn day(offset: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + Duration::days(i64::from(offset))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Top),
        Just(Category::Bottom),
        Just(Category::Onepiece),
        Just(Category::Outerwear),
        Just(Category::Footwear),
        Just(Category::Accessory),
        Just(Category::Underlayer),
    ]
}

prop_compose! {
    fn item_strategy()(
        category in category_strategy(),
        color in proptest::option::of("(black|white|navy|red|green|blue|beige|grey)"),
        pattern in proptest::option::of("(solid|stripe|check|floral)"),
        styles in proptest::collection::vec("(casual|office|formal|sport|street)", 0..3),
        seasons in proptest::collection::vec("(spring|summer|fall|winter)", 0..3),
        events in proptest::collection::vec("(casual|office|formal|sport)", 0..3),
        warmth in 0..5i32,
        formality in 0.0f32..1.0,
        active in proptest::bool::weighted(0.9),
    ) -> Item {
        let mut item = Item::new(category);
        item.base_color = color;
        item.pattern = pattern;
        item.style_tags = styles;
        item.season_tags = seasons;
        item.event_tags = events;
        item.warmth = warmth;
        item.formality = formality;
        item.active = active;
        item
    }
}

/// Assemble a snapshot from raw generator output. Outfit members and wear
/// targets are indices taken modulo the item count; an outfit wear also
/// writes the derived item-level rows real logging flows produce, so the
/// dedup path is always exercised.
fn build_snapshot(
    items: Vec<Item>,
    outfit_specs: Vec<Vec<usize>>,
    wear_specs: Vec<(usize, u32)>,
    outfit_wear_days: Vec<u32>,
) -> Snapshot {
    let mut snapshot = Snapshot::empty(UserId::new());
    snapshot.items = items;

    if !snapshot.items.is_empty() {
        for spec in outfit_specs {
            let members: Vec<_> = spec
                .iter()
                .map(|index| snapshot.items[index % snapshot.items.len()].id)
                .collect();
            snapshot
                .outfits
                .push(Outfit::new(members.into_iter().map(|id| (id, "slot"))));
        }

        for (index, offset) in wear_specs {
            let item_id = snapshot.items[index % snapshot.items.len()].id;
            snapshot.item_wear_logs.push(ItemWearLog {
                id: ItemWearLogId::new(),
                item_id,
                worn_at: Some(day(offset)),
                created_at: day(offset),
                deleted_at: None,
                source: WearSource::Standalone,
            });
        }

        if let Some(outfit) = snapshot.outfits.first() {
            let outfit_id = outfit.id;
            let members: Vec<_> = outfit.items.iter().map(|m| m.item_id).collect();
            for offset in outfit_wear_days {
                let log = OutfitWearLog {
                    id: OutfitWearLogId::new(),
                    outfit_id,
                    worn_at: Some(day(offset)),
                    created_at: day(offset),
                    deleted_at: None,
                };
                for item_id in &members {
                    snapshot.outfit_wear_log_items.push(OutfitWearLogItem {
                        wear_log_id: log.id,
                        item_id: *item_id,
                        slot: "slot".to_string(),
                    });
                    snapshot.item_wear_logs.push(ItemWearLog {
                        id: ItemWearLogId::new(),
                        item_id: *item_id,
                        worn_at: Some(day(offset)),
                        created_at: day(offset),
                        deleted_at: None,
                        source: WearSource::OutfitDerived {
                            outfit_log_id: log.id,
                        },
                    });
                }
                snapshot.outfit_wear_logs.push(log);
            }
        }
    }

    snapshot
}

prop_compose! {
    fn snapshot_strategy()(
        items in proptest::collection::vec(item_strategy(), 0..25),
        outfit_specs in proptest::collection::vec(
            proptest::collection::vec(0usize..100, 1..6), 0..8),
        wear_specs in proptest::collection::vec((0usize..100, 0u32..27), 0..20),
        outfit_wear_days in proptest::collection::vec(0u32..27, 0..6),
    ) -> Snapshot {
        build_snapshot(items, outfit_specs, wear_specs, outfit_wear_days)
    }
}

proptest! {
    // 256 cases: each runs five scorers plus suggestion generation, and the
    // invariants are cheap to check.
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scores_and_confidences_stay_in_range(snapshot in snapshot_strategy()) {
        let engine = QualityEngine::new(MemoryScoreStore::new());
        let (score, suggestions) = engine
            .compute_at(&snapshot, &QualityPreferences::default(), now())
            .expect("compute");

        prop_assert!((0.0..=100.0).contains(&score.total_score));
        prop_assert!((0.0..=1.0).contains(&score.confidence));
        for dimension in Dimension::ALL {
            let value = score.dimension_scores.get(dimension);
            prop_assert!((0.0..=100.0).contains(&value), "{dimension} score {value}");
            let confidence = score.explanations[&dimension].confidence;
            prop_assert!((0.0..=1.0).contains(&confidence), "{dimension} confidence {confidence}");
            prop_assert!(!score.explanations[&dimension].why.is_empty());
        }
        for suggestion in &suggestions {
            prop_assert!((1..=5).contains(&suggestion.priority));
            prop_assert!((0.0..=1.0).contains(&suggestion.confidence));
            prop_assert!(suggestion.related_item_ids.len() <= 5);
        }
    }

    #[test]
    fn total_is_the_weighted_dimension_sum(snapshot in snapshot_strategy()) {
        let engine = QualityEngine::new(MemoryScoreStore::new());
        let (score, _) = engine
            .compute_at(&snapshot, &QualityPreferences::default(), now())
            .expect("compute");

        let weights = ScoringWeights::default();
        let expected: f32 = Dimension::ALL
            .iter()
            .map(|d| score.dimension_scores.get(*d) * weights.weight(*d))
            .sum();
        prop_assert!((score.total_score - expected).abs() < 1e-3);
    }

    #[test]
    fn compute_is_deterministic(snapshot in snapshot_strategy()) {
        let engine = QualityEngine::new(MemoryScoreStore::new());
        let prefs = QualityPreferences::default();
        let (first, _) = engine.compute_at(&snapshot, &prefs, now()).expect("compute");
        let (second, _) = engine.compute_at(&snapshot, &prefs, now()).expect("compute");
        prop_assert!((first.total_score - second.total_score).abs() < 1e-5);
        prop_assert!((first.confidence - second.confidence).abs() < 1e-5);
    }

    #[test]
    fn suggestions_respect_bounds_and_ordering(snapshot in snapshot_strategy()) {
        let engine = QualityEngine::new(MemoryScoreStore::new());
        let (score, suggestions) = engine
            .compute_at(&snapshot, &QualityPreferences::default(), now())
            .expect("compute");

        prop_assert!(suggestions.len() <= 10);
        for suggestion in &suggestions {
            prop_assert!(
                score.dimension_scores.get(suggestion.dimension) < 80.0,
                "suggestion for {} which scored >= 80",
                suggestion.dimension
            );
        }
        for pair in suggestions.windows(2) {
            prop_assert!(
                pair[0].priority < pair[1].priority
                    || (pair[0].priority == pair[1].priority
                        && pair[0].expected_impact >= pair[1].expected_impact)
            );
        }
    }

    #[test]
    fn normalized_weights_pass_validation(raw in proptest::array::uniform5(0.01f32..10.0)) {
        // Any positive weight vector normalized to sum 1.0 is valid
        let sum: f32 = raw.iter().sum();
        let weights = ScoringWeights {
            versatility: raw[0] / sum,
            utilization: raw[1] / sum,
            completeness: raw[2] / sum,
            balance: raw[3] / sum,
            diversity: raw[4] / sum,
        };
        prop_assert!(weights.is_valid());
    }
}
