//! Wear log records.
//!
//! Two overlapping sources record wear events: outfit-level logs (which fan
//! out to their member items via [`OutfitWearLogItem`]) and item-level logs.
//! When an outfit wear also writes item-level rows, those rows carry an
//! [`WearSource::OutfitDerived`] back-reference: they describe the same
//! physical event and must not be counted twice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, ItemWearLogId, OutfitId, OutfitWearLogId};

/// A recorded wear of a whole outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitWearLog {
    pub id: OutfitWearLogId,
    pub outfit_id: OutfitId,
    /// When the outfit was worn. Older records may lack it.
    pub worn_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker; deleted logs are ignored by scoring.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl OutfitWearLog {
    /// Wear timestamp, falling back to the record's creation time.
    #[must_use]
    pub fn effective_worn_at(&self) -> DateTime<Utc> {
        self.worn_at.unwrap_or(self.created_at)
    }

    /// Whether the log has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Denormalized per-item record of an outfit-level wear event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitWearLogItem {
    pub wear_log_id: OutfitWearLogId,
    pub item_id: ItemId,
    pub slot: String,
}

/// How an item wear log came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WearSource {
    /// Logged directly against the item.
    Standalone,
    /// Generated as a byproduct of logging the referenced outfit wear.
    /// Already counted through that log's [`OutfitWearLogItem`] rows.
    OutfitDerived { outfit_log_id: OutfitWearLogId },
}

/// A recorded wear of a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemWearLog {
    pub id: ItemWearLogId,
    pub item_id: ItemId,
    pub worn_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker; deleted logs are ignored by scoring.
    pub deleted_at: Option<DateTime<Utc>>,
    pub source: WearSource,
}

impl ItemWearLog {
    /// Wear timestamp, falling back to the record's creation time.
    #[must_use]
    pub fn effective_worn_at(&self) -> DateTime<Utc> {
        self.worn_at.unwrap_or(self.created_at)
    }

    /// Whether the log has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether this wear was logged directly (not derived from an outfit).
    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        matches!(self.source, WearSource::Standalone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn worn_at_falls_back_to_created_at() {
        let log = ItemWearLog {
            id: ItemWearLogId::new(),
            item_id: ItemId::new(),
            worn_at: None,
            created_at: at(3),
            deleted_at: None,
            source: WearSource::Standalone,
        };
        assert_eq!(log.effective_worn_at(), at(3));
    }

    #[test]
    fn outfit_derived_source_is_not_standalone() {
        let log = ItemWearLog {
            id: ItemWearLogId::new(),
            item_id: ItemId::new(),
            worn_at: Some(at(5)),
            created_at: at(5),
            deleted_at: None,
            source: WearSource::OutfitDerived {
                outfit_log_id: OutfitWearLogId::new(),
            },
        };
        assert!(!log.is_standalone());
    }

    #[test]
    fn wear_source_serializes_tagged() {
        let json = serde_json::to_string(&WearSource::Standalone).expect("serialize");
        assert_eq!(json, r#"{"kind":"standalone"}"#);
    }
}
