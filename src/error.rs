//! Error types for IPPIS Admin
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use crate::domain::ValidationErrors;
use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Form values failed required-field or type checks
    #[snafu(display("Validation failed: {errors}"))]
    Validation { errors: ValidationErrors },

    /// A submission is already in flight for this dialog
    #[snafu(display("A submission is already pending"))]
    SubmissionPending,

    /// The operation was cancelled before it settled
    #[snafu(display("Operation cancelled"))]
    Cancelled,

    /// Record lookup failed
    #[snafu(display("Record not found: {id}"))]
    NotFound { id: String },

    /// Data source failed to produce rows
    #[snafu(display("Fetch error: {message}"))]
    Fetch { message: String },

    /// Dialog is not in a state that accepts the request
    #[snafu(display("Dialog error: {message}"))]
    Dialog { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation { errors }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
