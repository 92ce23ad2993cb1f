//! Error types for module evaluation and output projection.

use crate::LogicalId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration validation failures
///
/// Raised synchronously during evaluation, before any declaration is
/// produced. These are caller input errors; no retry is applicable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Required { field: String },

    #[error("Field '{field}' has invalid format: {message}")]
    InvalidFormat { field: String, message: String },

    #[error("Field '{field}' contains invalid characters: {invalid_chars}")]
    InvalidCharacters {
        field: String,
        invalid_chars: String,
    },

    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    TooLong { field: String, max_length: usize },

    #[error("Value out of range for '{field}': {message}")]
    OutOfRange { field: String, message: String },

    #[error("Field '{field}' duplicates the name '{name}'")]
    DuplicateName { field: String, name: String },
}

impl ValidationError {
    /// Name of the offending configuration field
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field } => field,
            Self::InvalidFormat { field, .. } => field,
            Self::InvalidCharacters { field, .. } => field,
            Self::TooLong { field, .. } => field,
            Self::OutOfRange { field, .. } => field,
            Self::DuplicateName { field, .. } => field,
        }
    }
}

/// Error type for string parsing failures
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Invalid format: expected {expected}, got '{actual}'")]
    InvalidFormat { expected: String, actual: String },
}

/// Errors raised while loading a configuration record from a file or the
/// environment
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Configuration parsing failed: {message}")]
    Parse { message: String },

    #[error("Configuration source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while projecting an apply report into module outputs
///
/// The module has no visibility into provider failures beyond the absence of
/// a created resource in the engine's report; projecting outputs for such a
/// resource fails rather than handing callers an undefined value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputsError {
    #[error("Resource '{logical_id}' was not created; its outputs are undefined")]
    ResourceNotCreated { logical_id: LogicalId },
}

/// Top-level error type for provisioner operations
#[derive(Debug, Error)]
pub enum ProvisionerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Outputs error: {0}")]
    Outputs(#[from] OutputsError),
}

impl ProvisionerError {
    /// Check if error is transient and should be retried
    ///
    /// Every error the module can raise is a caller input error; transient
    /// provider failures never surface here because the module performs no
    /// provider calls.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Parse(_) => false,
            Self::Configuration(_) => false,
            Self::Outputs(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
