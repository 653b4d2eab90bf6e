//! Data model for wardrobe quality scoring.
//!
//! This module defines the read-only input model (items, outfits, wear logs,
//! the [`Snapshot`] handed to the engine) and the persisted output model
//! ([`ScoreRecord`], [`SuggestionRecord`]).
//!
//! Wear events deserve a note: an item wear can be logged standalone or be
//! generated as a byproduct of logging an outfit wear. The two represent the
//! same physical event when linked, so the source is modeled as a tagged
//! [`WearSource`] rather than a nullable foreign key, and double counting is
//! ruled out structurally.

mod ids;
mod records;
mod snapshot;
mod wardrobe;
mod wear;

pub use ids::*;
pub use records::*;
pub use snapshot::*;
pub use wardrobe::*;
pub use wear::*;
