//! Configuration validation.

use super::types::{QualityPreferences, ScoringWeights};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for ScoringWeights {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("versatility", self.versatility),
            ("utilization", self.utilization),
            ("completeness", self.completeness),
            ("balance", self.balance),
            ("diversity", self.diversity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ConfigError {
                    field: format!("weights.{name}"),
                    message: format!("Weight must be between 0.0 and 1.0, got {value}"),
                });
            }
        }

        let sum: f32 = self.as_array().iter().sum();
        if (sum - 1.0).abs() > 0.01 {
            errors.push(ConfigError {
                field: "weights".to_string(),
                message: format!("Weights must sum to 1.0 (±0.01), got {sum}"),
            });
        }

        errors
    }
}

impl Validatable for QualityPreferences {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(1..=30).contains(&self.refresh_interval_days) {
            errors.push(ConfigError {
                field: "refresh_interval_days".to_string(),
                message: format!(
                    "Refresh interval must be between 1 and 30 days, got {}",
                    self.refresh_interval_days
                ),
            });
        }

        if !(30..=730).contains(&self.history_retention_days) {
            errors.push(ConfigError {
                field: "history_retention_days".to_string(),
                message: format!(
                    "History retention must be between 30 and 730 days, got {}",
                    self.history_retention_days
                ),
            });
        }

        errors
    }
}
