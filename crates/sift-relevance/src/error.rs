//! Error types for relevance scoring
//!
//! None of these reach a caller of `score`: factor errors collapse to 0.0
//! and combination errors collapse to the degraded score. Only
//! configuration parsing surfaces them.

use thiserror::Error;

/// Errors that can occur while scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelevanceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metadata value that cannot be interpreted
    #[error("Invalid metadata field '{field}': {reason}")]
    InvalidMetadata {
        /// Metadata field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Weights that are negative or non-finite
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A computation produced NaN or infinity
    #[error("Non-finite result in {0}")]
    NonFinite(&'static str),
}
