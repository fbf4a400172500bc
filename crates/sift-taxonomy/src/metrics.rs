//! Metrics collection for taxonomy operations

use sift_domain::{TaxonomyTerm, TermSource};
use std::collections::BTreeMap;

/// Counters describing the current taxonomy and its activity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxonomyMetrics {
    /// Seeded terms
    pub static_terms: usize,

    /// Learned terms not yet validated (including imported external terms)
    pub learned_terms: usize,

    /// Learned terms confirmed by a validator
    pub validated_terms: usize,

    /// Registered domains
    pub domain_count: usize,

    /// Stored terms per domain
    pub terms_per_domain: BTreeMap<String, usize>,

    /// Terms created by `learn_from_content`
    pub terms_learned: usize,

    /// Validation rounds that reached at least one validator
    pub validation_attempts: usize,

    /// Validation rounds that ended with a positive verdict
    pub validation_successes: usize,

    /// Two-point moving average of validation success
    pub validation_success_rate: f64,

    /// Unix seconds of the last recount
    pub last_updated: u64,
}

impl TaxonomyMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored terms
    pub fn total_terms(&self) -> usize {
        self.static_terms + self.learned_terms + self.validated_terms
    }

    /// Recount term totals from the stored buckets
    pub(crate) fn recount<'a>(
        &mut self,
        terms: impl Iterator<Item = &'a TaxonomyTerm>,
        domain_count: usize,
        now: u64,
    ) {
        self.static_terms = 0;
        self.learned_terms = 0;
        self.validated_terms = 0;
        self.terms_per_domain.clear();

        for term in terms {
            match term.source {
                TermSource::Static => self.static_terms += 1,
                TermSource::Validated => self.validated_terms += 1,
                TermSource::Learned | TermSource::External => self.learned_terms += 1,
            }
            *self.terms_per_domain.entry(term.domain.clone()).or_insert(0) += 1;
        }
        self.domain_count = domain_count;
        self.last_updated = now;
    }

    /// Record a learned term
    pub(crate) fn record_learned(&mut self, count: usize) {
        self.terms_learned += count;
    }

    /// Record the outcome of one validation round
    ///
    /// The success rate is averaged with the newest outcome only, so it
    /// weights recent rounds heavily.
    pub(crate) fn record_validation(&mut self, success: bool) {
        self.validation_attempts += 1;
        let hit = if success {
            self.validation_successes += 1;
            1.0
        } else {
            0.0
        };
        self.validation_success_rate = (self.validation_success_rate + hit) / 2.0;
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Taxonomy Metrics Summary".to_string(),
            "========================".to_string(),
            format!("Domains: {}", self.domain_count),
            format!(
                "Terms: {} (static {}, learned {}, validated {})",
                self.total_terms(),
                self.static_terms,
                self.learned_terms,
                self.validated_terms
            ),
            format!("Learned from content: {}", self.terms_learned),
            format!(
                "Validation: {} attempts, {} successes, rate {:.3}",
                self.validation_attempts, self.validation_successes, self.validation_success_rate
            ),
        ];

        if !self.terms_per_domain.is_empty() {
            lines.push(String::new());
            lines.push("Terms by domain:".to_string());
            for (domain, count) in &self.terms_per_domain {
                lines.push(format!("  {}: {}", domain, count));
            }
        }

        lines.join("\n")
    }
}
