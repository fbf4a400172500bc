//! Heuristics for learning terms from raw text

use crate::TaxonomyConfig;
use sift_domain::{ContentType, LearningContext, Platform};
use sift_nlp::{sanitize, Lexicon, TermCategory};
use std::collections::HashSet;

const BASE_CONFIDENCE: f64 = 0.3;
const DOCUMENTATION_BOOST: f64 = 0.2;
const CODE_BOOST: f64 = 0.3;
const GITHUB_BOOST: f64 = 0.1;

/// Candidate tokens for learning, in first-occurrence order
///
/// Sanitizes the text, splits on whitespace, and keeps unique tokens within
/// the configured length bounds that are not stop-words.
pub(crate) fn candidate_tokens(
    text: &str,
    lexicon: &Lexicon,
    config: &TaxonomyConfig,
) -> Vec<String> {
    let sanitized = sanitize(text);
    let mut seen = HashSet::new();
    sanitized
        .split_whitespace()
        .map(|t| t.trim_matches('-'))
        .filter(|t| {
            let len = t.chars().count();
            len >= config.min_term_length && len <= config.max_term_length
        })
        .filter(|t| !lexicon.is_stop_word(t))
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

/// Exclusive boost for the term's technical category
pub(crate) fn category_boost(category: Option<TermCategory>) -> f64 {
    match category {
        Some(TermCategory::Language | TermCategory::Architecture) => 0.4,
        Some(TermCategory::Framework | TermCategory::Concept | TermCategory::Data) => 0.3,
        Some(TermCategory::Tool | TermCategory::Api) => 0.2,
        None => 0.0,
    }
}

/// Heuristic confidence for a newly seen term, capped at the configured
/// learned-confidence ceiling
pub(crate) fn heuristic_confidence(
    category: Option<TermCategory>,
    context: &LearningContext,
    config: &TaxonomyConfig,
) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    match context.content_type {
        ContentType::Documentation => confidence += DOCUMENTATION_BOOST,
        ContentType::Code => confidence += CODE_BOOST,
        _ => {}
    }
    if context.platform == Platform::GitHub {
        confidence += GITHUB_BOOST;
    }
    confidence += category_boost(category);
    confidence.min(config.max_learned_confidence)
}
