//! Configuration for wardrobe quality scoring.
//!
//! This module provides:
//! - Type-safe configuration structures for scoring weights and user
//!   preferences
//! - Validation for all configuration values
//! - Named constants for every empirically-chosen scoring threshold
//!
//! # Quick Start
//!
//! ```rust
//! use wardrobe_quality::config::{QualityPreferences, ScoringWeights};
//!
//! // Use defaults: colors off, patterns/seasons/styles on, weekly refresh
//! let prefs = QualityPreferences::default();
//!
//! // Weights always sum to 1.0
//! let weights = ScoringWeights::default();
//! assert!((weights.as_array().iter().sum::<f32>() - 1.0).abs() < 0.01);
//! ```
//!
//! The numeric constants in [`defaults`] (ratio bands, diversity targets,
//! impact multipliers, the neglect window) are tuned values carried over
//! from production; they are exposed as named constants rather than
//! re-derived.

pub mod defaults;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_HISTORY_RETENTION_DAYS, DEFAULT_REFRESH_INTERVAL_DAYS, MAX_RELATED_ITEMS,
    MAX_SUGGESTIONS, NEGLECT_THRESHOLD_DAYS, SUGGESTION_SCORE_CEILING, TREND_DELTA_THRESHOLD,
};
pub use types::{DiversityConfig, QualityPreferences, ScoringWeights};
pub use validation::{ConfigError, Validatable};
