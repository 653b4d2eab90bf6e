//! Typed entity identifiers.
//!
//! Each entity gets its own UUID newtype so an outfit id can never be passed
//! where an item id is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifies a wardrobe owner.
    UserId
);
entity_id!(
    /// Identifies a wardrobe item.
    ItemId
);
entity_id!(
    /// Identifies an outfit.
    OutfitId
);
entity_id!(
    /// Identifies an outfit-level wear log entry.
    OutfitWearLogId
);
entity_id!(
    /// Identifies an item-level wear log entry.
    ItemWearLogId
);
entity_id!(
    /// Identifies a persisted quality score record.
    ScoreId
);
entity_id!(
    /// Identifies a persisted suggestion record.
    SuggestionId
);
