//! Per-call scoring options

use chrono::{DateTime, Utc};
use sift_domain::{ContentSource, ScoringWeights};

/// Options accepted by every scoring call
///
/// Everything is optional; `ScoringOptions::default()` scores with the
/// configured weights, extracts query terms from the query string, and
/// measures recency against the wall clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringOptions {
    /// Weights replacing the configured defaults for this call
    pub weights: Option<ScoringWeights>,

    /// Precomputed (already stemmed) query terms
    pub query_terms: Option<Vec<String>>,

    /// Sources whose prior gets the preferred-source multiplier
    pub preferred_sources: Vec<ContentSource>,

    /// Candidates scoring below this are dropped by `score_and_rank`
    pub min_score: Option<f64>,

    /// Instant recency is measured against (defaults to now)
    pub reference_time: Option<DateTime<Utc>>,
}

impl ScoringOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Builder: supply precomputed query terms
    pub fn with_query_terms(mut self, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.query_terms = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: prefer a source
    pub fn prefer(mut self, source: ContentSource) -> Self {
        if !self.preferred_sources.contains(&source) {
            self.preferred_sources.push(source);
        }
        self
    }

    /// Builder: set the minimum score cutoff
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Builder: pin the reference time
    pub fn at(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }
}
