//! Custom error types for FinTooz
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinTooz operations
#[derive(Error, Debug)]
pub enum FinError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The record belongs to another owner
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Chat-completion service errors
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// Malformed records encountered while aggregating
    #[error("Aggregation error: {0}")]
    Aggregation(String),
}

impl FinError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the persistence layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for FinError {
    fn from(err: reqwest::Error) -> Self {
        Self::Assistant(err.to_string())
    }
}

/// Result type alias for FinTooz operations
pub type FinResult<T> = Result<T, FinError>;
