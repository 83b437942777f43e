//! errors.rs - Custom error types for the extractguard-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All possible error types in the `extractguard-core` library.
///
/// `#[non_exhaustive]` lets new variants land without breaking callers
/// that match on this enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractGuardError {
    #[error("Failed to parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model response must be a JSON object of field/value pairs, found {0}")]
    NotAnObject(String),

    #[error("Scoring configuration is invalid:\n{0}")]
    InvalidConfig(String),

    #[error("Failed to parse scoring configuration: {0}")]
    ConfigParse(#[from] serde_yml::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout `extractguard-core`.
pub type Result<T> = std::result::Result<T, ExtractGuardError>;
