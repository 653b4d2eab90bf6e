//! Dimension scorers.
//!
//! Five independent, stateless heuristics each map a read-only wardrobe
//! snapshot to a [`DimensionResult`]: versatility (item reuse across
//! outfits), utilization (active wear), completeness (core category
//! coverage), balance (category proportions), and diversity (attribute
//! variety).
//!
//! Scorers never fail. Every edge case (too few items, no outfits, no wear
//! logs, no enabled diversity attributes) degrades to an explicit
//! low-confidence default so callers always receive a usable score.
//!
//! # Usage
//!
//! ```rust
//! use wardrobe_quality::model::{Snapshot, UserId};
//! use wardrobe_quality::scoring::{ScoringContext, SCORERS};
//! use wardrobe_quality::config::DiversityConfig;
//! use chrono::Utc;
//!
//! let snapshot = Snapshot::empty(UserId::new());
//! let ctx = ScoringContext::new(&snapshot, DiversityConfig::default(), Utc::now());
//! for scorer in SCORERS {
//!     let result = scorer.score(&ctx);
//!     assert!((0.0..=100.0).contains(&result.score));
//! }
//! ```

mod balance;
mod completeness;
mod context;
mod diversity;
mod tally;
mod utilization;
mod versatility;
mod wear_stats;

pub use balance::BalanceScorer;
pub use completeness::CompletenessScorer;
pub use context::ScoringContext;
pub use diversity::DiversityScorer;
pub use utilization::UtilizationScorer;
pub use versatility::VersatilityScorer;
pub use wear_stats::WearStats;

use crate::model::{CoreCategory, Dimension};

// ============================================================================
// Contributing factors
// ============================================================================

/// Machine-readable tag explaining a dimension's score.
///
/// The suggestion generator matches on these exhaustively; adding a variant
/// forces every consumer to decide how to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    /// Too few items for the dimension to score meaningfully.
    InsufficientItems,
    /// No outfits exist yet.
    NoOutfits,
    /// More than half of styled items appear in multiple outfits.
    HighReuse,
    /// Under 30% of items appear in any outfit.
    ManyUnusedItems,
    /// No wear events recorded yet.
    NoWearLogs,
    /// Over 30% of items have never been worn.
    ManyUnwornItems,
    /// Over half of worn items have not been worn in 30+ days.
    ManyNeglectedItems,
    /// No items at all.
    EmptyWardrobe,
    /// A core category has zero effective items.
    MissingCategory(CoreCategory),
    /// Raw tops/bottoms ratio outside [0.5, 3.0].
    ImbalancedTopsBottoms,
    /// Diversity scoring has every attribute disabled.
    NoAttributesEnabled,
    /// Enabled diversity attributes have no observed values.
    MissingAttributeData,
    /// Fewer than 4 distinct colors.
    LowColorDiversity,
    /// Fewer than 3 distinct styles.
    LowStyleDiversity,
}

impl Factor {
    /// Stable snake_case label persisted in explanation maps.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::InsufficientItems => "insufficient_items".to_string(),
            Self::NoOutfits => "no_outfits".to_string(),
            Self::HighReuse => "high_reuse".to_string(),
            Self::ManyUnusedItems => "many_unused_items".to_string(),
            Self::NoWearLogs => "no_wear_logs".to_string(),
            Self::ManyUnwornItems => "many_unworn_items".to_string(),
            Self::ManyNeglectedItems => "many_neglected_items".to_string(),
            Self::EmptyWardrobe => "empty_wardrobe".to_string(),
            Self::MissingCategory(category) => format!("missing_{category}"),
            Self::ImbalancedTopsBottoms => "imbalanced_tops_bottoms".to_string(),
            Self::NoAttributesEnabled => "no_attributes_enabled".to_string(),
            Self::MissingAttributeData => "missing_attribute_data".to_string(),
            Self::LowColorDiversity => "low_color_diversity".to_string(),
            Self::LowStyleDiversity => "low_style_diversity".to_string(),
        }
    }
}

// ============================================================================
// Dimension result
// ============================================================================

/// Result of scoring a single dimension.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct DimensionResult {
    /// Score from 0 to 100.
    pub score: f32,
    /// Self-reported confidence from 0 to 1, driven by sample size.
    pub confidence: f32,
    /// Human-readable explanation.
    pub why: String,
    /// Machine-readable factors behind the score.
    pub contributing_factors: Vec<Factor>,
}

impl DimensionResult {
    /// Build a result, clamping the score into [0, 100].
    pub fn new(
        score: f32,
        confidence: f32,
        why: impl Into<String>,
        contributing_factors: Vec<Factor>,
    ) -> Self {
        Self {
            score: clamp_score(score),
            confidence,
            why: why.into(),
            contributing_factors,
        }
    }

    /// Build an edge-case default carrying a single explanatory factor.
    pub fn degraded(score: f32, confidence: f32, why: impl Into<String>, factor: Factor) -> Self {
        Self::new(score, confidence, why, vec![factor])
    }

    /// Whether a factor contributed to this score.
    #[must_use]
    pub fn has_factor(&self, factor: Factor) -> bool {
        self.contributing_factors.contains(&factor)
    }

    /// Persisted snake_case labels of the contributing factors.
    #[must_use]
    pub fn factor_labels(&self) -> Vec<String> {
        self.contributing_factors.iter().map(Factor::label).collect()
    }
}

/// Clamp a raw score into the canonical [0, 100] range.
#[must_use]
pub fn clamp_score(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

// ============================================================================
// Scorer dispatch
// ============================================================================

/// A stateless dimension scoring heuristic.
pub trait DimensionScorer: Send + Sync {
    /// The dimension this scorer produces.
    fn dimension(&self) -> Dimension;

    /// Score a snapshot. Never fails; edge cases degrade to defaults.
    fn score(&self, ctx: &ScoringContext<'_>) -> DimensionResult;
}

/// The five scorers, in weight order. The engine iterates this table.
pub static SCORERS: [&dyn DimensionScorer; 5] = [
    &VersatilityScorer,
    &UtilizationScorer,
    &CompletenessScorer,
    &BalanceScorer,
    &DiversityScorer,
];
