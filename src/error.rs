//! Unified error types for wardrobe-quality.
//!
//! Scoring itself never fails on a well-formed snapshot; edge cases degrade
//! to explicit low-confidence defaults. Errors here surface from the storage
//! seam and from configuration validation.

use thiserror::Error;

/// Main error type for wardrobe-quality operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QualityError {
    /// Errors from the score store
    #[error("Score store operation failed: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Store is unavailable: {0}")]
    Unavailable(String),

    #[error("Write was rejected: {0}")]
    WriteRejected(String),
}

impl QualityError {
    /// Build a store error with context.
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }
}

/// Convenience result type alias for wardrobe-quality operations.
pub type Result<T> = std::result::Result<T, QualityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_carries_context_and_source() {
        let err = QualityError::store(
            "appending score batch",
            StoreErrorKind::Unavailable("connection refused".to_string()),
        );
        let msg = err.to_string();
        assert!(msg.contains("appending score batch"));

        let source = std::error::Error::source(&err).expect("source should be set");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn validation_error_display() {
        let err = QualityError::Validation("weights must sum to 1.0".to_string());
        assert!(err.to_string().contains("weights must sum to 1.0"));
    }
}
