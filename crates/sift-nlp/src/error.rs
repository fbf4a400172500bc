//! Error types for the NLP toolkit

use thiserror::Error;

/// Errors that can occur while building toolkit components
#[derive(Error, Debug)]
pub enum NlpError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
