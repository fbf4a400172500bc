//! Sift Relevance Scorer
//!
//! Rates how well a content candidate answers a query. Six independent
//! factors, each in [0, 1], are combined with configurable weights:
//!
//! | Factor | Default weight |
//! |---|---|
//! | Title match | 0.30 |
//! | Content match | 0.25 |
//! | Source reliability | 0.15 |
//! | Recency | 0.10 |
//! | Popularity | 0.10 |
//! | Content quality | 0.10 |
//!
//! Scoring is fail-soft. A factor that cannot be computed contributes 0,
//! and a weighted combination that cannot be computed yields a small
//! degraded score (0.1 by default). The scorer logs both cases through
//! `tracing` and never returns an error from a scoring call.

#![warn(missing_docs)]

mod config;
mod error;
mod factors;
mod options;
mod scorer;

pub use config::{ScorerConfig, SourcePriors, WeightsConfig};
pub use error::RelevanceError;
pub use options::ScoringOptions;
pub use scorer::{RankedCandidate, RelevanceExplanation, RelevanceScorer};
