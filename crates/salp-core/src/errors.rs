//! Domain error types for salp.
//!
//! Transport and configuration errors live in their own crates
//! (`PredictError`, `ConfigError`). The binary folds everything into
//! `anyhow` at the top level.

use thiserror::Error;

/// Errors raised while building or checking domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A categorical value is not a member of its vocabulary.
    #[error("Unknown {field} option '{value}' (expected one of: {})", .allowed.join(", "))]
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A field identifier did not match any input field.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// A value of the wrong kind was supplied for a field.
    #[error("Field '{field}' is not {expected}")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A salary category literal other than `>50K` / `<=50K`.
    #[error("Invalid salaryCategory value: {0}. Must be '>50K' or '<=50K'.")]
    InvalidCategory(String),

    /// One or more numeric constraints failed.
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
}
