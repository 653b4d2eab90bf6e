//! Persistence seam for score and suggestion records.
//!
//! The engine talks to storage through [`ScoreStore`]. Embedders back it
//! with their database; [`MemoryScoreStore`] is the bundled implementation
//! for tests and in-process use.
//!
//! The one contract that matters: [`ScoreStore::append`] is atomic. A score
//! record and its suggestion batch are written together or not at all; a
//! failed write must never leave an orphaned score without its suggestions.

mod memory;

pub use memory::MemoryScoreStore;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{ScoreRecord, SuggestionId, SuggestionRecord, SuggestionStatus, UserId};

/// Storage for score records and their suggestion batches.
pub trait ScoreStore: Send + Sync {
    /// Atomically append a score record together with its suggestion batch.
    fn append(&self, score: &ScoreRecord, suggestions: &[SuggestionRecord]) -> Result<()>;

    /// The most recently computed score record for a user.
    fn latest(&self, user_id: UserId) -> Result<Option<ScoreRecord>>;

    /// Score records for a user, most recent first.
    fn history(&self, user_id: UserId, limit: usize) -> Result<Vec<ScoreRecord>>;

    /// Suggestions for a user ordered by (priority asc, created_at desc),
    /// optionally filtered by status.
    fn suggestions(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
        limit: usize,
    ) -> Result<Vec<SuggestionRecord>>;

    /// Update a suggestion's status, returning the updated record.
    fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<SuggestionRecord>;

    /// Delete score records older than `cutoff` along with their suggestion
    /// batches. Returns the number of score records deleted. Idempotent.
    fn delete_older_than(&self, user_id: UserId, cutoff: DateTime<Utc>) -> Result<usize>;
}
