//! Error types for trellis.

use thiserror::Error;

use crate::data::FieldKind;

/// Error type for all trellis operations.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Invalid store or registry configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A filter referenced a field that is not registered.
    #[error("Unknown filter field '{0}'")]
    UnknownField(String),

    /// A filter literal's runtime type disagrees with the field's declared kind.
    #[error("Type mismatch for field '{field}': expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        actual: FieldKind,
    },

    /// The target system does not support an operator used in the filter.
    #[error("Unsupported filter operator '{0}'")]
    UnsupportedOperator(String),

    /// Malformed filter expression.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by the search-execution collaborator.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrellisError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        TrellisError::Configuration(msg.into())
    }

    /// Create an unknown-field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        TrellisError::UnknownField(name.into())
    }

    /// Create a type-mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: FieldKind, actual: FieldKind) -> Self {
        TrellisError::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create an unsupported-operator error.
    pub fn unsupported_operator(name: impl Into<String>) -> Self {
        TrellisError::UnsupportedOperator(name.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        TrellisError::Validation(msg.into())
    }

    /// Create an execution error.
    pub fn execution(msg: impl Into<String>) -> Self {
        TrellisError::Execution(msg.into())
    }
}

/// Result type alias for trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;
