//! Scoring context.

use chrono::{DateTime, Utc};

use crate::config::DiversityConfig;
use crate::model::{Item, Snapshot};

/// Everything a scorer sees: the snapshot, the resolved diversity
/// configuration, and the evaluation instant.
///
/// `now` is threaded explicitly so utilization's neglect window and the
/// record timestamp are deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub snapshot: &'a Snapshot,
    pub diversity: DiversityConfig,
    pub now: DateTime<Utc>,
}

impl<'a> ScoringContext<'a> {
    /// Create a context over a snapshot.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot, diversity: DiversityConfig, now: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            diversity,
            now,
        }
    }

    /// Active items, the population every scorer works on.
    pub fn items(&self) -> impl Iterator<Item = &'a Item> {
        self.snapshot.active_items()
    }

    /// Number of active items.
    #[must_use]
    pub fn items_count(&self) -> usize {
        self.snapshot.items_count()
    }

    /// Number of outfits.
    #[must_use]
    pub fn outfits_count(&self) -> usize {
        self.snapshot.outfits_count()
    }
}
