//! Configuration types for wardrobe quality scoring.

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_HISTORY_RETENTION_DAYS, DEFAULT_REFRESH_INTERVAL_DAYS, WEIGHT_BALANCE,
    WEIGHT_COMPLETENESS, WEIGHT_DIVERSITY, WEIGHT_UTILIZATION, WEIGHT_VERSATILITY,
};
use crate::model::Dimension;

// ============================================================================
// Dimension weights
// ============================================================================

/// Weights for total score calculation (sum to 1.0).
///
/// Callers normally use [`ScoringWeights::default`]; custom weights must
/// still sum to 1.0 (see [`super::Validatable`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub versatility: f32,
    pub utilization: f32,
    pub completeness: f32,
    pub balance: f32,
    pub diversity: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            versatility: WEIGHT_VERSATILITY,
            utilization: WEIGHT_UTILIZATION,
            completeness: WEIGHT_COMPLETENESS,
            balance: WEIGHT_BALANCE,
            diversity: WEIGHT_DIVERSITY,
        }
    }
}

impl ScoringWeights {
    /// Return weights as an array in [`Dimension::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 5] {
        [
            self.versatility,
            self.utilization,
            self.completeness,
            self.balance,
            self.diversity,
        ]
    }

    /// Weight of a single dimension.
    #[must_use]
    pub const fn weight(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Versatility => self.versatility,
            Dimension::Utilization => self.utilization,
            Dimension::Completeness => self.completeness,
            Dimension::Balance => self.balance,
            Dimension::Diversity => self.diversity,
        }
    }
}

// ============================================================================
// Diversity configuration
// ============================================================================

/// Which item attributes the diversity scorer considers.
///
/// Colors default to off: most users tag colors inconsistently, so the
/// attribute is opt-in. The other three default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub colors: bool,
    pub patterns: bool,
    pub seasons: bool,
    pub styles: bool,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            colors: false,
            patterns: true,
            seasons: true,
            styles: true,
        }
    }
}

impl DiversityConfig {
    /// Number of enabled attributes.
    #[must_use]
    pub const fn enabled_count(&self) -> usize {
        self.colors as usize + self.patterns as usize + self.seasons as usize + self.styles as usize
    }

    /// Whether any attribute is enabled.
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.colors || self.patterns || self.seasons || self.styles
    }

    /// Names of the enabled attributes, for explanation texts.
    #[must_use]
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.colors {
            names.push("colors");
        }
        if self.patterns {
            names.push("patterns");
        }
        if self.seasons {
            names.push("seasons");
        }
        if self.styles {
            names.push("styles");
        }
        names
    }
}

// ============================================================================
// User preferences
// ============================================================================

/// Per-user quality scoring preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPreferences {
    /// Diversity attribute toggles.
    pub diversity: DiversityConfig,
    /// Days between scheduled refreshes (1-30).
    pub refresh_interval_days: u32,
    /// Days of score history retained by cleanup (30-730).
    pub history_retention_days: u32,
}

impl Default for QualityPreferences {
    fn default() -> Self {
        Self {
            diversity: DiversityConfig::default(),
            refresh_interval_days: DEFAULT_REFRESH_INTERVAL_DAYS,
            history_retention_days: DEFAULT_HISTORY_RETENTION_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f32 = ScoringWeights::default().as_array().iter().sum();
        assert!((sum - 1.0).abs() < 0.01, "weights sum to {sum}, expected 1.0");
    }

    #[test]
    fn weight_lookup_matches_array_order() {
        let w = ScoringWeights::default();
        let arr = w.as_array();
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(w.weight(*dim), arr[i]);
        }
    }

    #[test]
    fn diversity_defaults_exclude_colors() {
        let config = DiversityConfig::default();
        assert!(!config.colors);
        assert!(config.patterns);
        assert!(config.seasons);
        assert!(config.styles);
        assert_eq!(config.enabled_count(), 3);
        assert_eq!(config.enabled_names(), vec!["patterns", "seasons", "styles"]);
    }

    #[test]
    fn preferences_defaults() {
        let prefs = QualityPreferences::default();
        assert_eq!(prefs.refresh_interval_days, 7);
        assert_eq!(prefs.history_retention_days, 180);
    }
}
