//! Suggestion generation.
//!
//! Turns dimension results into a short, prioritized list of actions.
//! Dimensions are visited worst-first; anything scoring 80 or above needs no
//! action. Emission is driven by an exhaustive match over the contributing
//! [`Factor`]s, so a new factor variant cannot be silently ignored.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::defaults::{MAX_RELATED_ITEMS, MAX_SUGGESTIONS, SUGGESTION_SCORE_CEILING};
use crate::config::ScoringWeights;
use crate::model::{Category, Dimension, ItemId, SuggestionKind};
use crate::scoring::{DimensionResult, Factor, ScoringContext, WearStats};

/// A generated suggestion before persistence assigns ids and status.
#[derive(Debug, Clone)]
pub struct SuggestionDraft {
    pub kind: SuggestionKind,
    pub dimension: Dimension,
    /// 1 = highest, 5 = lowest.
    pub priority: u8,
    pub title: String,
    pub description: String,
    pub why: String,
    pub confidence: f32,
    /// Estimated total-score gain if acted on.
    pub expected_impact: f32,
    /// Items the suggestion is about (at most 5).
    pub related_item_ids: Vec<ItemId>,
}

/// Generates actionable suggestions from scoring results.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate suggestions ordered by (priority asc, expected impact desc),
    /// truncated to the top 10.
    #[must_use]
    pub fn generate(
        &self,
        ctx: &ScoringContext<'_>,
        results: &[(Dimension, DimensionResult)],
        weights: &ScoringWeights,
    ) -> Vec<SuggestionDraft> {
        // Worst dimensions first, so truncation keeps the biggest problems
        let mut by_score: Vec<&(Dimension, DimensionResult)> = results.iter().collect();
        by_score.sort_by(|a, b| a.1.score.partial_cmp(&b.1.score).unwrap_or(Ordering::Equal));

        let mut drafts = Vec::new();
        for (dimension, result) in by_score {
            if result.score >= SUGGESTION_SCORE_CEILING {
                continue;
            }
            self.for_dimension(*dimension, result, weights.weight(*dimension), ctx, &mut drafts);
        }

        drafts.sort_by(|a, b| {
            a.priority.cmp(&b.priority).then_with(|| {
                b.expected_impact
                    .partial_cmp(&a.expected_impact)
                    .unwrap_or(Ordering::Equal)
            })
        });
        drafts.truncate(MAX_SUGGESTIONS);
        drafts
    }

    fn for_dimension(
        &self,
        dimension: Dimension,
        result: &DimensionResult,
        weight: f32,
        ctx: &ScoringContext<'_>,
        drafts: &mut Vec<SuggestionDraft>,
    ) {
        for factor in &result.contributing_factors {
            match factor {
                Factor::NoOutfits => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::CreateOutfit,
                    dimension,
                    priority: 1,
                    title: "Create your first outfit".to_string(),
                    description: "Combine your items into outfits to track versatility."
                        .to_string(),
                    why: "Creating outfits helps you see which items work well together and \
                          identifies pieces that could be styled more ways."
                        .to_string(),
                    confidence: 0.95,
                    expected_impact: weight * 20.0,
                    related_item_ids: Vec::new(),
                }),

                Factor::ManyUnusedItems => {
                    let unused = unused_items(ctx);
                    if !unused.is_empty() {
                        drafts.push(SuggestionDraft {
                            kind: SuggestionKind::UseInOutfit,
                            dimension,
                            priority: 2,
                            title: format!("Style {} unused items", unused.len()),
                            description: "These items haven't been added to any outfit yet."
                                .to_string(),
                            why: "Adding unused items to outfits increases your wardrobe's \
                                  versatility score and helps you get more value from your \
                                  clothes."
                                .to_string(),
                            confidence: 0.9,
                            expected_impact: weight * 15.0,
                            related_item_ids: truncated(unused),
                        });
                    }
                }

                Factor::NoWearLogs => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::LogWear,
                    dimension,
                    priority: 1,
                    title: "Start logging what you wear".to_string(),
                    description: "Track your outfits to see utilization patterns.".to_string(),
                    why: "Wear logging reveals which items you actually use versus which sit \
                          unworn, helping you make better wardrobe decisions."
                        .to_string(),
                    confidence: 0.95,
                    expected_impact: weight * 25.0,
                    related_item_ids: Vec::new(),
                }),

                Factor::ManyUnwornItems => {
                    let never_worn = never_worn_items(ctx);
                    if !never_worn.is_empty() {
                        drafts.push(SuggestionDraft {
                            kind: SuggestionKind::WearMore,
                            dimension,
                            priority: 2,
                            title: format!("Wear {} neglected items", never_worn.len()),
                            description: "These items have never been logged as worn.".to_string(),
                            why: "Regularly wearing all your items improves utilization. \
                                  Consider whether items you never wear should be donated or \
                                  styled differently."
                                .to_string(),
                            confidence: 0.85,
                            expected_impact: weight * 15.0,
                            related_item_ids: truncated(never_worn),
                        });
                    }
                }

                Factor::MissingCategory(category) => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::AddItem,
                    dimension,
                    priority: 1,
                    title: format!("Add {category} to your wardrobe"),
                    description: format!("You're missing items in the {category} category."),
                    why: format!(
                        "A complete wardrobe needs {category}. Adding this category will \
                         improve outfit options and completeness score."
                    ),
                    confidence: 0.95,
                    expected_impact: weight * 12.0,
                    related_item_ids: Vec::new(),
                }),

                Factor::EmptyWardrobe => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::AddItem,
                    dimension,
                    priority: 1,
                    title: "Add items to your wardrobe".to_string(),
                    description: "Start by adding your essential clothing items.".to_string(),
                    why: "Building a wardrobe starts with the basics. Add tops, bottoms, and \
                          footwear to begin tracking your style."
                        .to_string(),
                    confidence: 0.95,
                    expected_impact: weight * 25.0,
                    related_item_ids: Vec::new(),
                }),

                Factor::ImbalancedTopsBottoms => {
                    drafts.push(self.balance_draft(dimension, weight, ctx));
                }

                Factor::LowColorDiversity => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::AddItem,
                    dimension,
                    priority: 3,
                    title: "Add more color variety".to_string(),
                    description: "Your wardrobe has limited color diversity.".to_string(),
                    why: "A diverse color palette enables more outfit combinations and helps \
                          you dress for different moods and occasions."
                        .to_string(),
                    confidence: 0.8,
                    expected_impact: weight * 8.0,
                    related_item_ids: Vec::new(),
                }),

                Factor::LowStyleDiversity => drafts.push(SuggestionDraft {
                    kind: SuggestionKind::AddItem,
                    dimension,
                    priority: 3,
                    title: "Explore different styles".to_string(),
                    description: "Your wardrobe style variety is limited.".to_string(),
                    why: "Different style items help you adapt to various occasions from \
                          casual to formal settings."
                        .to_string(),
                    confidence: 0.8,
                    expected_impact: weight * 8.0,
                    related_item_ids: Vec::new(),
                }),

                // Informational factors: nothing actionable to suggest
                Factor::InsufficientItems
                | Factor::HighReuse
                | Factor::ManyNeglectedItems
                | Factor::NoAttributesEnabled
                | Factor::MissingAttributeData => {}
            }
        }
    }

    /// Recommend adding whichever of raw tops/bottoms is the minority.
    fn balance_draft(
        &self,
        dimension: Dimension,
        weight: f32,
        ctx: &ScoringContext<'_>,
    ) -> SuggestionDraft {
        let raw_tops = ctx.items().filter(|i| i.category == Category::Top).count();
        let raw_bottoms = ctx
            .items()
            .filter(|i| i.category == Category::Bottom)
            .count();

        let (title, description, why) = if raw_tops >= raw_bottoms {
            (
                "Add more bottoms".to_string(),
                format!("You have {raw_tops} tops but only {raw_bottoms} bottoms."),
                "A balanced wardrobe has roughly 1-2 tops per bottom. Adding bottoms will \
                 create more outfit combinations."
                    .to_string(),
            )
        } else {
            (
                "Add more tops".to_string(),
                format!("You have {raw_bottoms} bottoms but only {raw_tops} tops."),
                "You need more tops to pair with your bottoms. Consider versatile pieces \
                 that match multiple bottoms."
                    .to_string(),
            )
        };

        SuggestionDraft {
            kind: SuggestionKind::AddItem,
            dimension,
            priority: 2,
            title,
            description,
            why,
            confidence: 0.9,
            expected_impact: weight * 10.0,
            related_item_ids: Vec::new(),
        }
    }
}

/// Active items not placed in any outfit.
fn unused_items(ctx: &ScoringContext<'_>) -> Vec<ItemId> {
    let used: HashSet<ItemId> = ctx
        .snapshot
        .outfits
        .iter()
        .flat_map(|outfit| outfit.items.iter().map(|placement| placement.item_id))
        .collect();
    ctx.items()
        .map(|item| item.id)
        .filter(|id| !used.contains(id))
        .collect()
}

/// Active items with no deduplicated wear event.
fn never_worn_items(ctx: &ScoringContext<'_>) -> Vec<ItemId> {
    let stats = WearStats::collect(ctx.snapshot);
    ctx.items()
        .map(|item| item.id)
        .filter(|id| !stats.has_worn(*id))
        .collect()
}

fn truncated(mut ids: Vec<ItemId>) -> Vec<ItemId> {
    ids.truncate(MAX_RELATED_ITEMS);
    ids
}
