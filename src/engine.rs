//! Quality engine: orchestrates scoring, suggestion generation, and
//! persistence.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;

use crate::config::{QualityPreferences, ScoringWeights};
use crate::error::Result;
use crate::model::{
    Dimension, DimensionScores, Explanation, ScoreId, ScoreRecord, Snapshot, SuggestionId,
    SuggestionRecord, SuggestionStatus, Trend, UserId,
};
use crate::scoring::{DimensionResult, ScoringContext, SCORERS};
use crate::store::ScoreStore;
use crate::suggest::SuggestionGenerator;

/// Latest score with its history and trend, ready for presentation.
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    /// The most recent score record.
    pub current: ScoreRecord,
    /// Older records, most recent first (excludes `current`).
    pub history: Vec<ScoreRecord>,
    /// Direction versus the previous record, when one exists.
    pub trend: Option<Trend>,
    /// Total-score delta versus the previous record.
    pub trend_delta: Option<f32>,
}

/// Computes, persists, and retrieves wardrobe quality scores.
///
/// Scoring is pure and synchronous; the only side effect is the atomic
/// append of each score with its suggestion batch. Two concurrent computes
/// for different users share no mutable state. Two concurrent computes for
/// the *same* user are not coordinated: both proceed and the history gains
/// two near-simultaneous rows.
#[derive(Debug)]
pub struct QualityEngine<S> {
    store: S,
    weights: ScoringWeights,
    generator: SuggestionGenerator,
}

impl<S: ScoreStore> QualityEngine<S> {
    /// Create an engine over a store with default weights.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            weights: ScoringWeights::default(),
            generator: SuggestionGenerator::new(),
        }
    }

    /// Use custom dimension weights (must sum to 1.0).
    #[must_use]
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score a snapshot now and persist the result.
    pub fn compute(
        &self,
        snapshot: &Snapshot,
        preferences: &QualityPreferences,
    ) -> Result<(ScoreRecord, Vec<SuggestionRecord>)> {
        self.compute_at(snapshot, preferences, Utc::now())
    }

    /// Score a snapshot at an explicit instant and persist the result.
    ///
    /// The instant drives the utilization neglect window and `computed_at`;
    /// recomputing an unchanged snapshot at the same instant yields
    /// identical scores.
    pub fn compute_at(
        &self,
        snapshot: &Snapshot,
        preferences: &QualityPreferences,
        now: DateTime<Utc>,
    ) -> Result<(ScoreRecord, Vec<SuggestionRecord>)> {
        let ctx = ScoringContext::new(snapshot, preferences.diversity, now);

        let mut results: Vec<(Dimension, DimensionResult)> = Vec::with_capacity(SCORERS.len());
        let mut total_score = 0.0;
        let mut total_confidence = 0.0;
        let mut explanations = IndexMap::with_capacity(SCORERS.len());

        for scorer in SCORERS {
            let dimension = scorer.dimension();
            let result = scorer.score(&ctx);
            let weight = self.weights.weight(dimension);
            total_score += result.score * weight;
            total_confidence += result.confidence * weight;
            explanations.insert(
                dimension,
                Explanation {
                    why: result.why.clone(),
                    confidence: result.confidence,
                    contributing_factors: result.factor_labels(),
                },
            );
            tracing::debug!(
                dimension = dimension.name(),
                score = result.score,
                confidence = result.confidence,
                "Scored dimension"
            );
            results.push((dimension, result));
        }

        let score_of = |wanted: Dimension| {
            results
                .iter()
                .find(|(dimension, _)| *dimension == wanted)
                .map(|(_, result)| result.score)
                .unwrap_or(0.0)
        };

        let score = ScoreRecord {
            id: ScoreId::new(),
            user_id: snapshot.user_id,
            total_score,
            dimension_scores: DimensionScores {
                versatility: score_of(Dimension::Versatility),
                utilization: score_of(Dimension::Utilization),
                completeness: score_of(Dimension::Completeness),
                balance: score_of(Dimension::Balance),
                diversity: score_of(Dimension::Diversity),
            },
            confidence: total_confidence,
            explanations,
            items_count: snapshot.items_count(),
            outfits_count: snapshot.outfits_count(),
            wear_logs_count: snapshot.wear_logs_count(),
            diversity_config: preferences.diversity,
            computed_at: now,
        };

        let suggestions: Vec<SuggestionRecord> = self
            .generator
            .generate(&ctx, &results, &self.weights)
            .into_iter()
            .map(|draft| SuggestionRecord {
                id: SuggestionId::new(),
                user_id: snapshot.user_id,
                score_id: score.id,
                kind: draft.kind,
                dimension: draft.dimension,
                priority: draft.priority,
                title: draft.title,
                description: draft.description,
                why: draft.why,
                confidence: draft.confidence,
                expected_impact: draft.expected_impact,
                related_item_ids: draft.related_item_ids,
                status: SuggestionStatus::Pending,
                created_at: now,
            })
            .collect();

        // Score and batch land together or not at all
        self.store.append(&score, &suggestions)?;

        tracing::info!(
            user_id = %snapshot.user_id,
            total_score = score.total_score,
            confidence = score.confidence,
            suggestions = suggestions.len(),
            "Computed wardrobe quality score"
        );

        Ok((score, suggestions))
    }

    /// The most recently computed score for a user.
    pub fn latest(&self, user_id: UserId) -> Result<Option<ScoreRecord>> {
        self.store.latest(user_id)
    }

    /// Score history for a user, most recent first.
    pub fn history(&self, user_id: UserId, limit: usize) -> Result<Vec<ScoreRecord>> {
        self.store.history(user_id, limit)
    }

    /// Latest score with history and trend versus the previous record.
    pub fn summary(&self, user_id: UserId, history_limit: usize) -> Result<Option<ScoreSummary>> {
        let mut records = self.store.history(user_id, history_limit.saturating_add(1))?;
        if records.is_empty() {
            return Ok(None);
        }
        let current = records.remove(0);
        let (trend, trend_delta) = match records.first() {
            Some(previous) => {
                let delta = current.total_score - previous.total_score;
                (Some(Trend::from_delta(delta)), Some(delta))
            }
            None => (None, None),
        };
        records.truncate(history_limit);
        Ok(Some(ScoreSummary {
            current,
            history: records,
            trend,
            trend_delta,
        }))
    }

    /// Suggestions for a user, optionally filtered by status.
    pub fn suggestions(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
        limit: usize,
    ) -> Result<Vec<SuggestionRecord>> {
        self.store.suggestions(user_id, status, limit)
    }

    /// Dismiss or complete a suggestion.
    pub fn resolve_suggestion(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<SuggestionRecord> {
        self.store.set_suggestion_status(id, status)
    }

    /// Delete score batches older than the retention horizon. Returns the
    /// number of score records deleted.
    pub fn cleanup(&self, user_id: UserId, retention_days: u32) -> Result<usize> {
        self.cleanup_at(user_id, retention_days, Utc::now())
    }

    /// Cleanup with an explicit "now", for schedulers and tests.
    pub fn cleanup_at(
        &self,
        user_id: UserId,
        retention_days: u32,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let cutoff = now - Duration::days(i64::from(retention_days));
        let deleted = self.store.delete_older_than(user_id, cutoff)?;
        if deleted > 0 {
            tracing::info!(
                user_id = %user_id,
                deleted,
                retention_days,
                "Cleaned up old quality scores"
            );
        }
        Ok(deleted)
    }

    /// Whether a scheduled refresh is due: no score yet, or the latest is
    /// older than the preferred refresh interval.
    pub fn needs_refresh(&self, user_id: UserId, preferences: &QualityPreferences) -> Result<bool> {
        self.needs_refresh_at(user_id, preferences, Utc::now())
    }

    /// Refresh check with an explicit "now", for schedulers and tests.
    pub fn needs_refresh_at(
        &self,
        user_id: UserId,
        preferences: &QualityPreferences,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let Some(latest) = self.store.latest(user_id)? else {
            return Ok(true);
        };
        let age = now - latest.computed_at;
        Ok(age >= Duration::days(i64::from(preferences.refresh_interval_days)))
    }
}
