//! Error types for the Curator library.

use thiserror::Error;

/// Main error type for Curator operations.
///
/// Merging never fails; errors only arise while constructing values from
/// external text.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// A license expression could not be constructed from its text.
    #[error("Invalid license expression '{expression}': {reason}")]
    InvalidLicenseExpression { expression: String, reason: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Curator operations.
pub type Result<T> = std::result::Result<T, CuratorError>;
