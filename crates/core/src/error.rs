//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant signals a broken usage contract rather than a transient
/// failure; nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A dispatcher or decoder met a variant tag outside the closed set.
    #[error("exhaustiveness violation: unrecognized variant `{tag}`")]
    ExhaustivenessViolation { tag: String },

    /// A variant-specific operation was applied to a different variant.
    #[error("narrowing violation: expected {expected}, found {actual}")]
    NarrowingViolation { expected: String, actual: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn exhaustiveness(tag: impl Into<String>) -> Self {
        Self::ExhaustivenessViolation { tag: tag.into() }
    }

    pub fn narrowing(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::NarrowingViolation {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
