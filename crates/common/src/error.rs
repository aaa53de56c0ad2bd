//! Common error types for orbit.

use thiserror::Error;

/// Common error type for orbit operations.
///
/// The masking and card-validation cores never produce these; they only
/// surface while resolving configuration and parsing identifiers.
#[derive(Error, Debug)]
pub enum Error {
    /// Input does not have the expected textual or numeric shape.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A numeric input lies outside its allowed domain.
    #[error("Value out of range: {0}")]
    RangeInvalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;
