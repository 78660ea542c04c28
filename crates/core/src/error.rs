//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Deterministic failures only (bad identifiers, unknown form fields).
/// Transport concerns live in `stockform-client`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty, or not usable in a path).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A form field name did not match any product field.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
