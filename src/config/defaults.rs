//! Named scoring constants.
//!
//! Every threshold below is an empirically tuned value. Treat them as part
//! of the scoring contract: tests in `tests/` pin the observable behavior
//! they produce.

// ============================================================================
// Dimension weights (sum to 1.0)
// ============================================================================

/// Weight of the versatility dimension in the total score.
pub const WEIGHT_VERSATILITY: f32 = 0.30;
/// Weight of the utilization dimension in the total score.
pub const WEIGHT_UTILIZATION: f32 = 0.25;
/// Weight of the completeness dimension in the total score.
pub const WEIGHT_COMPLETENESS: f32 = 0.20;
/// Weight of the balance dimension in the total score.
pub const WEIGHT_BALANCE: f32 = 0.15;
/// Weight of the diversity dimension in the total score.
pub const WEIGHT_DIVERSITY: f32 = 0.10;

// ============================================================================
// Minimum-sample gates
// ============================================================================

/// Versatility needs this many items before it scores at all.
pub const MIN_ITEMS_VERSATILITY: usize = 5;
/// Utilization needs this many items before it scores at all.
pub const MIN_ITEMS_UTILIZATION: usize = 3;
/// Balance needs this many items before it scores at all.
pub const MIN_ITEMS_BALANCE: usize = 5;
/// Diversity needs this many items before it scores at all.
pub const MIN_ITEMS_DIVERSITY: usize = 3;

// ============================================================================
// Utilization
// ============================================================================

/// Days without a wear before an item counts as neglected.
pub const NEGLECT_THRESHOLD_DAYS: i64 = 30;
/// Wear-count Gini fallback when only one item has ever been worn
/// (half of the 30-point distribution component).
pub const SINGLE_ITEM_DISTRIBUTION_SCORE: f32 = 15.0;

// ============================================================================
// Versatility
// ============================================================================

/// Outfits-per-used-item count at which the density component saturates.
pub const OUTFIT_DENSITY_TARGET: f32 = 3.0;

// ============================================================================
// Completeness
// ============================================================================

/// Per-category item count at which the variety component saturates.
pub const CATEGORY_VARIETY_TARGET: f32 = 3.0;
/// Distinct event tags at which the event-coverage component saturates.
pub const EVENT_TAG_TARGET: f32 = 4.0;

// ============================================================================
// Diversity targets (distinct values for a full sub-score)
// ============================================================================

/// Distinct base colors for a full color sub-score.
pub const COLOR_TARGET: f32 = 8.0;
/// Distinct patterns for a full pattern sub-score.
pub const PATTERN_TARGET: f32 = 4.0;
/// Distinct season tags for a full season sub-score (four-season universe).
pub const SEASON_TARGET: f32 = 4.0;
/// Distinct style tags for a full style sub-score.
pub const STYLE_TARGET: f32 = 5.0;
/// Distinct colors below which the low-color-diversity factor fires.
pub const LOW_COLOR_THRESHOLD: usize = 4;
/// Distinct styles below which the low-style-diversity factor fires.
pub const LOW_STYLE_THRESHOLD: usize = 3;

// ============================================================================
// Suggestions
// ============================================================================

/// Dimensions scoring at or above this need no suggestions.
pub const SUGGESTION_SCORE_CEILING: f32 = 80.0;
/// Maximum suggestions returned per compute.
pub const MAX_SUGGESTIONS: usize = 10;
/// Maximum related item ids attached to one suggestion.
pub const MAX_RELATED_ITEMS: usize = 5;

// ============================================================================
// Trend
// ============================================================================

/// Absolute total-score delta below which the trend reads as stable.
pub const TREND_DELTA_THRESHOLD: f32 = 2.0;

// ============================================================================
// Preferences
// ============================================================================

/// Default days between scheduled score refreshes.
pub const DEFAULT_REFRESH_INTERVAL_DAYS: u32 = 7;
/// Default days of score history kept by cleanup.
pub const DEFAULT_HISTORY_RETENTION_DAYS: u32 = 180;
