//! In-memory score store.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::{QualityError, Result, StoreErrorKind};
use crate::model::{ScoreId, ScoreRecord, SuggestionId, SuggestionRecord, SuggestionStatus, UserId};

use super::ScoreStore;

#[derive(Debug, Default)]
struct Shelves {
    scores: HashMap<UserId, Vec<ScoreRecord>>,
    suggestions: HashMap<UserId, Vec<SuggestionRecord>>,
}

/// Mutex-guarded in-memory [`ScoreStore`].
///
/// Appends take the lock once for the score and its suggestion batch, so
/// the atomicity contract holds trivially. Concurrent computes for the same
/// user serialize here and the history gains two rows.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    shelves: Mutex<Shelves>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, context: &str) -> Result<MutexGuard<'_, Shelves>> {
        self.shelves.lock().map_err(|_| {
            QualityError::store(
                context.to_string(),
                StoreErrorKind::Unavailable("store mutex poisoned".to_string()),
            )
        })
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append(&self, score: &ScoreRecord, suggestions: &[SuggestionRecord]) -> Result<()> {
        let mut shelves = self.lock("appending score batch")?;
        shelves
            .scores
            .entry(score.user_id)
            .or_default()
            .push(score.clone());
        shelves
            .suggestions
            .entry(score.user_id)
            .or_default()
            .extend_from_slice(suggestions);
        Ok(())
    }

    fn latest(&self, user_id: UserId) -> Result<Option<ScoreRecord>> {
        let shelves = self.lock("reading latest score")?;
        Ok(shelves.scores.get(&user_id).and_then(|records| {
            records
                .iter()
                .max_by_key(|record| record.computed_at)
                .cloned()
        }))
    }

    fn history(&self, user_id: UserId, limit: usize) -> Result<Vec<ScoreRecord>> {
        let shelves = self.lock("reading score history")?;
        let mut records = shelves.scores.get(&user_id).cloned().unwrap_or_default();
        records.sort_by(|a, b| b.computed_at.cmp(&a.computed_at));
        records.truncate(limit);
        Ok(records)
    }

    fn suggestions(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
        limit: usize,
    ) -> Result<Vec<SuggestionRecord>> {
        let shelves = self.lock("reading suggestions")?;
        let mut records: Vec<SuggestionRecord> = shelves
            .suggestions
            .get(&user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| status.map_or(true, |wanted| record.status == wanted))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        records.truncate(limit);
        Ok(records)
    }

    fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<SuggestionRecord> {
        let mut shelves = self.lock("updating suggestion status")?;
        for records in shelves.suggestions.values_mut() {
            if let Some(record) = records.iter_mut().find(|record| record.id == id) {
                record.status = status;
                return Ok(record.clone());
            }
        }
        Err(QualityError::store(
            "updating suggestion status",
            StoreErrorKind::NotFound(format!("suggestion {id}")),
        ))
    }

    fn delete_older_than(&self, user_id: UserId, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut shelves = self.lock("deleting old score batches")?;

        let Some(records) = shelves.scores.get_mut(&user_id) else {
            return Ok(0);
        };
        let before = records.len();
        let expired: HashSet<ScoreId> = records
            .iter()
            .filter(|record| record.computed_at < cutoff)
            .map(|record| record.id)
            .collect();
        records.retain(|record| !expired.contains(&record.id));
        let deleted = before - records.len();

        if let Some(suggestions) = shelves.suggestions.get_mut(&user_id) {
            suggestions.retain(|record| !expired.contains(&record.score_id));
        }

        Ok(deleted)
    }
}
