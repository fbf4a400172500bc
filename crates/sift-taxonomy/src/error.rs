//! Error types for the term taxonomy

use thiserror::Error;

/// Errors surfaced by taxonomy configuration
///
/// Taxonomy operations themselves never fail: malformed text is absorbed by
/// sanitization and validator failures become negative verdicts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaxonomyError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Domain definition error
    #[error("Invalid domain '{name}': {reason}")]
    InvalidDomain {
        /// Domain name
        name: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Errors a term validator can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidatorError {
    /// The backing service could not be reached
    #[error("Validator unavailable: {0}")]
    Unavailable(String),

    /// The backing service answered with something unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Validator error: {0}")]
    Other(String),
}
