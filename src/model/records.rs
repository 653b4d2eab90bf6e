//! Persisted score and suggestion records.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{defaults::TREND_DELTA_THRESHOLD, DiversityConfig};

use super::{ItemId, ScoreId, SuggestionId, UserId};

// ============================================================================
// Dimensions
// ============================================================================

/// One of the five weighted axes of wardrobe quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Versatility,
    Utilization,
    Completeness,
    Balance,
    Diversity,
}

impl Dimension {
    /// All dimensions, in weight order.
    pub const ALL: [Self; 5] = [
        Self::Versatility,
        Self::Utilization,
        Self::Completeness,
        Self::Balance,
        Self::Diversity,
    ];

    /// Stable snake_case label, matching the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Versatility => "versatility",
            Self::Utilization => "utilization",
            Self::Completeness => "completeness",
            Self::Balance => "balance",
            Self::Diversity => "diversity",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Score records
// ============================================================================

/// The five per-dimension scores of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub versatility: f32,
    pub utilization: f32,
    pub completeness: f32,
    pub balance: f32,
    pub diversity: f32,
}

impl DimensionScores {
    /// Score of a single dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Versatility => self.versatility,
            Dimension::Utilization => self.utilization,
            Dimension::Completeness => self.completeness,
            Dimension::Balance => self.balance,
            Dimension::Diversity => self.diversity,
        }
    }
}

/// Why a dimension scored the way it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Human-readable explanation.
    pub why: String,
    /// The dimension's self-reported confidence (0-1).
    pub confidence: f32,
    /// Stable machine-readable factor labels.
    pub contributing_factors: Vec<String>,
}

/// An immutable, append-only record of one quality computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: ScoreId,
    pub user_id: UserId,
    /// Weighted total (0-100).
    pub total_score: f32,
    pub dimension_scores: DimensionScores,
    /// Weighted aggregate confidence (0-1).
    pub confidence: f32,
    /// Per-dimension explanation, confidence, and factors.
    pub explanations: IndexMap<Dimension, Explanation>,
    pub items_count: usize,
    pub outfits_count: usize,
    pub wear_logs_count: usize,
    /// Diversity configuration the computation ran with.
    pub diversity_config: DiversityConfig,
    pub computed_at: DateTime<Utc>,
}

// ============================================================================
// Suggestions
// ============================================================================

/// The action a suggestion asks the user to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Compose a first outfit from existing items.
    CreateOutfit,
    /// Place never-styled items into outfits.
    UseInOutfit,
    /// Start recording wear events.
    LogWear,
    /// Wear items that have never been logged.
    WearMore,
    /// Acquire items (missing category, minority side, more variety).
    AddItem,
}

impl SuggestionKind {
    /// Stable snake_case label, matching the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateOutfit => "create_outfit",
            Self::UseInOutfit => "use_in_outfit",
            Self::LogWear => "log_wear",
            Self::WearMore => "wear_more",
            Self::AddItem => "add_item",
        }
    }
}

/// Lifecycle of a suggestion. The only mutable part of a persisted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    Pending,
    Dismissed,
    Completed,
}

impl SuggestionStatus {
    /// Stable snake_case label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Dismissed => "dismissed",
            Self::Completed => "completed",
        }
    }
}

/// A persisted, actionable improvement suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub id: SuggestionId,
    pub user_id: UserId,
    /// The score computation that produced this suggestion.
    pub score_id: ScoreId,
    pub kind: SuggestionKind,
    pub dimension: Dimension,
    /// 1 = highest, 5 = lowest.
    pub priority: u8,
    pub title: String,
    pub description: String,
    /// Rationale shown to the user.
    pub why: String,
    pub confidence: f32,
    /// Estimated total-score gain if acted on.
    pub expected_impact: f32,
    /// Items the suggestion is about (at most 5).
    pub related_item_ids: Vec<ItemId>,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Trend
// ============================================================================

/// Direction of change between two chronologically ordered score records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    /// Classify a total-score delta (current minus previous).
    #[must_use]
    pub fn from_delta(delta: f32) -> Self {
        if delta > TREND_DELTA_THRESHOLD {
            Self::Improving
        } else if delta < -TREND_DELTA_THRESHOLD {
            Self::Declining
        } else {
            Self::Stable
        }
    }

    /// Stable snake_case label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_thresholds() {
        assert_eq!(Trend::from_delta(2.1), Trend::Improving);
        assert_eq!(Trend::from_delta(2.0), Trend::Stable);
        assert_eq!(Trend::from_delta(0.0), Trend::Stable);
        assert_eq!(Trend::from_delta(-2.0), Trend::Stable);
        assert_eq!(Trend::from_delta(-2.1), Trend::Declining);
    }

    #[test]
    fn dimension_order_is_stable() {
        let names: Vec<_> = Dimension::ALL.iter().map(Dimension::name).collect();
        assert_eq!(
            names,
            ["versatility", "utilization", "completeness", "balance", "diversity"]
        );
    }

    #[test]
    fn explanation_map_serializes_with_dimension_keys() {
        let mut explanations = IndexMap::new();
        explanations.insert(
            Dimension::Balance,
            Explanation {
                why: "Tops:Bottoms ratio is 3:3".to_string(),
                confidence: 0.85,
                contributing_factors: Vec::new(),
            },
        );
        let json = serde_json::to_string(&explanations).expect("serialize");
        assert!(json.contains("\"balance\""));
    }
}
