//! Error types for the library.
//!
//! All fallible operations return [`RdbmsResult`].

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type RdbmsResult<T> = Result<T, RdbmsError>;

/// Errors produced by the rdbms utilities.
#[derive(Debug, Error)]
pub enum RdbmsError {
    /// Input failed validation (blank required field, bad query param, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A required property was absent or blank in a property map.
    #[error("missing required property: {0}")]
    MissingProperty(String),

    /// A `${name}` placeholder had no mapped value and no default.
    #[error("no value for placeholder: {0}")]
    UnresolvedPlaceholder(String),

    /// The template itself is broken (e.g. unterminated placeholder).
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// Could not establish a database connection.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// A query failed against a live connection.
    #[error("database query error: {0}")]
    DatabaseQuery(String),
}
