//! Error types for the examination core
//!
//! Extraction and validation are total operations and never fail; the only
//! fallible surface is rule evaluation. The engine converts every rule
//! failure into a skipped outcome, so this error type never crosses the
//! engine boundary.

use thiserror::Error;

/// Error a rule may return from evaluation
#[derive(Error, Debug)]
pub enum RuleError {
    /// The record lacks data the rule cannot evaluate without
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Rule-internal failure
    #[error("{0}")]
    Internal(String),
}

impl RuleError {
    /// Create an invalid record error
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        RuleError::InvalidRecord(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        RuleError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RuleError::invalid_record("no claims");
        assert_eq!(err.to_string(), "invalid record: no claims");

        let err = RuleError::internal("lookup table corrupt");
        assert_eq!(err.to_string(), "lookup table corrupt");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            RuleError::invalid_record("x"),
            RuleError::InvalidRecord(_)
        ));
        assert!(matches!(RuleError::internal("x"), RuleError::Internal(_)));
    }
}
