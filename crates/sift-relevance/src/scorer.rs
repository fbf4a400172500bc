//! Core RelevanceScorer implementation

use crate::factors;
use crate::{RelevanceError, ScorerConfig, ScoringOptions};
use chrono::Utc;
use sift_domain::{clamp_unit, ContentCandidate, Factor, RelevanceFactors, ScoringWeights};
use sift_nlp::{Corpus, Lexicon, TextAnalyzer};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A candidate with its score and position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a> {
    /// Position of the candidate in the input slice
    pub index: usize,

    /// Final relevance score in [0, 1]
    pub score: f64,

    /// The scored candidate
    pub candidate: &'a ContentCandidate,
}

/// Six-factor breakdown of a score
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceExplanation {
    /// Query terms the candidate was scored against
    pub query_terms: Vec<String>,

    /// The clamped sub-scores
    pub factors: RelevanceFactors,

    /// Weights in effect for this call
    pub weights: ScoringWeights,

    /// Weighted contribution of each factor, in [`Factor::ALL`] order
    pub contributions: Vec<(Factor, f64)>,

    /// Final relevance score in [0, 1]
    pub score: f64,
}

/// Scores content candidates against a query
///
/// The scorer is immutable once built: the background corpus is only read,
/// and every ephemeral document lives on the stack of a single call. One
/// instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use sift_domain::{ContentCandidate, ContentSource};
/// use sift_relevance::{RelevanceScorer, ScoringOptions};
///
/// let scorer = RelevanceScorer::default();
/// let candidate = ContentCandidate::new(
///     "Rust ownership explained",
///     "Ownership is how Rust manages memory without a garbage collector.",
///     ContentSource::Documentation,
/// );
///
/// let score = scorer.score(&candidate, "rust ownership", &ScoringOptions::default());
/// assert!((0.0..=1.0).contains(&score));
/// ```
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    analyzer: TextAnalyzer,
    corpus: Arc<Corpus>,
    config: ScorerConfig,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self {
            analyzer: TextAnalyzer::default(),
            corpus: Arc::new(Corpus::new()),
            config: ScorerConfig::default(),
        }
    }
}

impl RelevanceScorer {
    /// Create a scorer over a shared lexicon with a validated configuration
    pub fn new(lexicon: Arc<Lexicon>, config: ScorerConfig) -> Result<Self, RelevanceError> {
        config.validate()?;
        Ok(Self {
            analyzer: TextAnalyzer::new(lexicon),
            corpus: Arc::new(Corpus::new()),
            config,
        })
    }

    /// Builder: score importance relative to a background corpus
    pub fn with_corpus(mut self, corpus: Arc<Corpus>) -> Self {
        self.corpus = corpus;
        self
    }

    /// The scorer configuration
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// The text analyzer used for query and content analysis
    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Relevance of one candidate to a query, in [0, 1]
    ///
    /// Never fails: a factor that cannot be computed contributes 0, and a
    /// combination that cannot be computed yields the configured degraded
    /// score.
    pub fn score(
        &self,
        candidate: &ContentCandidate,
        query: &str,
        options: &ScoringOptions,
    ) -> f64 {
        let terms = self.resolve_terms(query, options);
        self.evaluate(candidate, query, &terms, options).1
    }

    /// Score every candidate, drop those under `min_score`, and sort
    /// descending; ties keep their input order
    pub fn score_and_rank<'a>(
        &self,
        candidates: &'a [ContentCandidate],
        query: &str,
        options: &ScoringOptions,
    ) -> Vec<RankedCandidate<'a>> {
        let terms = self.resolve_terms(query, options);
        info!(
            "Ranking {} candidates for query '{}' ({} terms)",
            candidates.len(),
            query,
            terms.len()
        );

        let mut ranked: Vec<RankedCandidate<'a>> = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| RankedCandidate {
                index,
                score: self.evaluate(candidate, query, &terms, options).1,
                candidate,
            })
            .filter(|r| options.min_score.is_none_or(|min| r.score >= min))
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        info!(
            "Ranking complete: {} of {} candidates kept",
            ranked.len(),
            candidates.len()
        );
        ranked
    }

    /// Full factor breakdown for one candidate
    pub fn explain(
        &self,
        candidate: &ContentCandidate,
        query: &str,
        options: &ScoringOptions,
    ) -> RelevanceExplanation {
        let terms = self.resolve_terms(query, options);
        let (factors, score) = self.evaluate(candidate, query, &terms, options);
        let weights = self.weights_for(options);
        let contributions = Factor::ALL
            .iter()
            .map(|f| (*f, factors.get(*f) * weights.get(*f)))
            .collect();

        RelevanceExplanation {
            query_terms: terms,
            factors,
            weights,
            contributions,
            score,
        }
    }

    fn resolve_terms(&self, query: &str, options: &ScoringOptions) -> Vec<String> {
        match &options.query_terms {
            Some(terms) => terms.iter().map(|t| t.to_lowercase()).collect(),
            None => self.analyzer.query_terms(query),
        }
    }

    fn weights_for(&self, options: &ScoringOptions) -> ScoringWeights {
        options
            .weights
            .unwrap_or_else(|| self.config.default_weights())
    }

    fn evaluate(
        &self,
        candidate: &ContentCandidate,
        query: &str,
        terms: &[String],
        options: &ScoringOptions,
    ) -> (RelevanceFactors, f64) {
        let factors = self.compute_factors(candidate, query, terms, options);
        let weights = self.weights_for(options);

        let score = match combine(&factors, &weights) {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    "Scoring '{}' degraded to {}: {}",
                    candidate.title, self.config.degraded_score, e
                );
                self.config.degraded_score
            }
        };

        debug!("Scored '{}': {:.4} ({:?})", candidate.title, score, factors);
        (factors, score)
    }

    fn compute_factors(
        &self,
        candidate: &ContentCandidate,
        query: &str,
        terms: &[String],
        options: &ScoringOptions,
    ) -> RelevanceFactors {
        let now = options.reference_time.unwrap_or_else(Utc::now);
        RelevanceFactors {
            title_match: guarded(
                Factor::TitleMatch,
                factors::title_match(&candidate.title, query, terms, &self.analyzer),
            ),
            content_match: guarded(
                Factor::ContentMatch,
                factors::content_match(&candidate.body, terms, &self.analyzer, &self.corpus),
            ),
            source_reliability: guarded(
                Factor::SourceReliability,
                factors::source_reliability(
                    candidate.source,
                    &options.preferred_sources,
                    &self.config,
                ),
            ),
            recency: guarded(
                Factor::Recency,
                factors::recency(candidate.metadata.published_at.as_deref(), now),
            ),
            popularity: guarded(Factor::Popularity, factors::popularity(&candidate.metadata)),
            content_quality: guarded(
                Factor::ContentQuality,
                factors::content_quality(candidate, &self.analyzer, &self.config),
            ),
        }
    }
}

/// Clamp a factor result, collapsing failures to 0.0
fn guarded(factor: Factor, result: Result<f64, RelevanceError>) -> f64 {
    match result {
        Ok(value) if !value.is_nan() => clamp_unit(value),
        Ok(_) => {
            warn!("Factor {} produced NaN, using 0.0", factor.as_str());
            0.0
        }
        Err(e) => {
            warn!("Factor {} failed, using 0.0: {}", factor.as_str(), e);
            0.0
        }
    }
}

/// Weighted sum of the factors, clamped to [0, 1]
fn combine(factors: &RelevanceFactors, weights: &ScoringWeights) -> Result<f64, RelevanceError> {
    if !weights.is_valid() {
        return Err(RelevanceError::InvalidWeights(format!("{:?}", weights)));
    }
    let total = factors.weighted_sum(weights);
    if !total.is_finite() {
        return Err(RelevanceError::NonFinite("weighted sum"));
    }
    Ok(clamp_unit(total))
}
