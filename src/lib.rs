//! **Wardrobe quality scoring and suggestion engine.**
//!
//! `wardrobe-quality` turns a snapshot of a user's items, outfits, and wear
//! history into a weighted multi-dimensional quality score with
//! per-dimension confidence and explanations, a prioritized list of
//! actionable improvement suggestions, and a historical trend.
//!
//! It is a pure library: no HTTP surface, no CLI, no wire format. An API
//! handler or a periodic scheduler invokes it in-process and brings its own
//! storage behind the [`ScoreStore`] trait.
//!
//! ## Scoring model
//!
//! Five independent, stateless heuristics each produce a 0-100 score with a
//! 0-1 confidence:
//!
//! - **Versatility** (weight 0.30): item reuse across outfits
//! - **Utilization** (weight 0.25): active wear, merged from outfit-level
//!   and item-level wear logs with cross-source deduplication
//! - **Completeness** (weight 0.20): core category coverage, where a
//!   onepiece counts as both a top and a bottom
//! - **Balance** (weight 0.15): category proportions
//! - **Diversity** (weight 0.10): attribute variety over a configurable
//!   attribute subset
//!
//! Scorers never fail: thin data degrades to explicit low-confidence
//! defaults, so callers always receive a usable score.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the read-only input model ([`Snapshot`]) and the
//!   persisted output records ([`ScoreRecord`], [`SuggestionRecord`]).
//! - **[`scoring`]**: the five [`DimensionScorer`]s, the closed
//!   [`Factor`] vocabulary, and the wear-dedup accumulator.
//! - **[`suggest`]**: turns contributing factors into ranked suggestions.
//! - **[`store`]**: the persistence seam; [`MemoryScoreStore`] is bundled.
//! - **[`engine`]**: the [`QualityEngine`] orchestrator.
//! - **[`config`]**: weights, preferences, and every named scoring constant.
//!
//! ## Getting Started
//!
//! ```rust
//! use wardrobe_quality::{MemoryScoreStore, QualityEngine};
//! use wardrobe_quality::config::QualityPreferences;
//! use wardrobe_quality::model::{Category, Item, Snapshot, UserId};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = QualityEngine::new(MemoryScoreStore::new());
//!
//!     let mut snapshot = Snapshot::empty(UserId::new());
//!     snapshot.items.push(Item::new(Category::Top));
//!     snapshot.items.push(Item::new(Category::Bottom));
//!     snapshot.items.push(Item::new(Category::Footwear));
//!
//!     let (score, suggestions) = engine.compute(&snapshot, &QualityPreferences::default())?;
//!
//!     println!("Total score: {:.0}/100", score.total_score);
//!     for suggestion in &suggestions {
//!         println!("[P{}] {}", suggestion.priority, suggestion.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Trend
//!
//! Comparing two chronologically ordered records yields a
//! [`Trend`](model::Trend): a delta above +2 reads as improving, below −2 as
//! declining, and anything between as stable. [`QualityEngine::summary`]
//! assembles the latest record, its history, and the trend in one call.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize to f32 casts are pervasive in ratio math and
    // wardrobe populations are far below any precision loss threshold
    clippy::cast_precision_loss
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod scoring;
pub mod store;
pub mod suggest;

// Re-export main types for convenience
pub use config::{DiversityConfig, QualityPreferences, ScoringWeights, Validatable};
pub use engine::{QualityEngine, ScoreSummary};
pub use error::{QualityError, Result, StoreErrorKind};
pub use model::{
    Category, Dimension, Item, ScoreRecord, Snapshot, SuggestionRecord, SuggestionStatus, Trend,
    UserId,
};
pub use scoring::{DimensionResult, DimensionScorer, Factor, ScoringContext, SCORERS};
pub use store::{MemoryScoreStore, ScoreStore};
pub use suggest::{SuggestionDraft, SuggestionGenerator};
