//! Error types for the contact form library.
//!
//! Field validation failures are not errors: they are reported as
//! [`FieldState`](crate::domain::FieldState) values. This module covers the
//! remaining failure modes, which all come from the environment boundary or
//! from parsing user-supplied identifiers.

use thiserror::Error;

/// Result type alias for contact form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised outside of field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The identifier does not name any known field kind.
    #[error("Unknown field kind '{0}' (expected name, email, subject, message or phone)")]
    UnknownFieldKind(String),

    /// The environment cannot report or move the caret of a field.
    #[error("Caret position unavailable for field '{field}'")]
    CaretUnavailable { field: String },

    /// The environment has no field with this identifier.
    #[error("No field with id '{0}'")]
    UnknownField(String),

    /// Invalid configuration or parameters.
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}
