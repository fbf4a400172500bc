//! The six relevance factors
//!
//! Each function computes one raw sub-score. Callers clamp the result into
//! [0, 1] and turn an `Err` into 0.0 for that factor only.

use crate::{RelevanceError, ScorerConfig};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sift_domain::{clamp_unit, CandidateMetadata, ContentCandidate, ContentSource};
use sift_nlp::{sentences, tokenize, words, Corpus, TextAnalyzer};
use std::collections::HashSet;
use tracing::debug;

const EXACT_HIT: f64 = 1.0;
const PARTIAL_HIT: f64 = 0.5;
const SIMILARITY_WEIGHT: f64 = 0.8;
const STEM_OVERLAP_WEIGHT: f64 = 0.6;

const IMPORTANCE_LENGTH_SCALE: f64 = 0.5;
const CONCEPT_WEIGHT: f64 = 2.0;
const CONTENT_SCALE: f64 = 100.0;

/// Views at which popularity saturates: log10(1e6) / 6 = 1.0
const VIEW_LOG_DIVISOR: f64 = 6.0;
const SCORE_DIVISOR: f64 = 100.0;
const COMMENT_DIVISOR: f64 = 50.0;

const NEUTRAL: f64 = 0.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minimum shared prefix for two words to count as a partial match
const PARTIAL_PREFIX_LEN: usize = 4;

/// Exact substring hits, partial word overlap, whole-string similarity and
/// stem overlap, normalized by the number of query terms
pub(crate) fn title_match(
    title: &str,
    query: &str,
    terms: &[String],
    analyzer: &TextAnalyzer,
) -> Result<f64, RelevanceError> {
    if terms.is_empty() {
        return Ok(0.0);
    }

    let title_lower = title.to_lowercase();
    let title_words: Vec<String> = tokenize(title)
        .into_iter()
        .filter(|w| !analyzer.lexicon().is_stop_word(w))
        .collect();
    let title_stems: HashSet<String> = analyzer.stemmed_tokens(title).into_iter().collect();

    let mut hits = 0.0;
    for term in terms {
        if title_lower.contains(term.as_str()) {
            hits += EXACT_HIT;
        } else if title_words.iter().any(|w| is_partial_match(w, term)) {
            hits += PARTIAL_HIT;
        }
    }

    let similarity =
        strsim::jaro_winkler(title_lower.trim(), query.to_lowercase().trim()) * SIMILARITY_WEIGHT;

    let overlapping = terms.iter().filter(|t| title_stems.contains(*t)).count();
    let overlap = overlapping as f64 / terms.len() as f64 * STEM_OVERLAP_WEIGHT;

    Ok((hits + similarity + overlap) / terms.len() as f64)
}

fn is_partial_match(word: &str, term: &str) -> bool {
    if word.len() >= 3 && term.contains(word) {
        return true;
    }
    let shared = word
        .chars()
        .zip(term.chars())
        .take_while(|(a, b)| a == b)
        .count();
    shared >= PARTIAL_PREFIX_LEN
}

/// Raw occurrences, corpus-relative importance and concept overlap,
/// normalized by body length and query size
pub(crate) fn content_match(
    body: &str,
    terms: &[String],
    analyzer: &TextAnalyzer,
    corpus: &Corpus,
) -> Result<f64, RelevanceError> {
    let word_count = words(body).len();
    if terms.is_empty() || word_count == 0 {
        return Ok(0.0);
    }

    let body_lower = body.to_lowercase();
    let occurrences: usize = terms
        .iter()
        .map(|t| body_lower.matches(t.as_str()).count())
        .sum();

    let document = analyzer.document(body);
    let importance =
        corpus.tf_idf(terms, &document) * word_count as f64 * IMPORTANCE_LENGTH_SCALE;

    let concepts = analyzer.concepts(body);
    let shared = terms.iter().filter(|t| concepts.contains(*t)).count();
    let concept_overlap = shared as f64 / terms.len() as f64 * CONCEPT_WEIGHT;

    let raw = (occurrences as f64 + importance + concept_overlap)
        / (word_count as f64 * terms.len() as f64)
        * CONTENT_SCALE;

    if !raw.is_finite() {
        return Err(RelevanceError::NonFinite("content_match"));
    }
    Ok(raw)
}

/// Prior for the source tag, boosted when the caller prefers the source
pub(crate) fn source_reliability(
    source: ContentSource,
    preferred: &[ContentSource],
    config: &ScorerConfig,
) -> Result<f64, RelevanceError> {
    let prior = config.source_priors.prior(source);
    if preferred.contains(&source) {
        return Ok((prior * config.preferred_source_multiplier).min(1.0));
    }
    Ok(prior)
}

/// Step function on content age; missing or unparseable dates are neutral
pub(crate) fn recency(
    published_at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<f64, RelevanceError> {
    let Some(raw) = published_at else {
        return Ok(NEUTRAL);
    };
    let Some(published) = parse_published(raw) else {
        debug!("Unparseable publish date '{}', using neutral recency", raw);
        return Ok(NEUTRAL);
    };

    // Future dates count as brand new
    let age_days = ((now - published).num_seconds() as f64 / SECONDS_PER_DAY).max(0.0);
    let score = if age_days <= 7.0 {
        1.0
    } else if age_days <= 30.0 {
        0.9
    } else if age_days <= 90.0 {
        0.8
    } else if age_days <= 365.0 {
        0.6
    } else {
        0.4
    };
    Ok(score)
}

/// Parse RFC 3339, `YYYY-MM-DD`, or unix seconds
pub(crate) fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// First available of views, score, comments; neutral when none is present
pub(crate) fn popularity(metadata: &CandidateMetadata) -> Result<f64, RelevanceError> {
    if let Some(views) = metadata.view_count {
        let views = non_negative("view_count", views)?;
        return Ok(clamp_unit(views.max(1.0).log10() / VIEW_LOG_DIVISOR));
    }
    if let Some(score) = metadata.score {
        if !score.is_finite() {
            return Err(RelevanceError::InvalidMetadata {
                field: "score",
                reason: format!("{} is not finite", score),
            });
        }
        return Ok(clamp_unit(score / SCORE_DIVISOR));
    }
    if let Some(comments) = metadata.comment_count {
        let comments = non_negative("comment_count", comments)?;
        return Ok(clamp_unit(comments / COMMENT_DIVISOR));
    }
    Ok(NEUTRAL)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, RelevanceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RelevanceError::InvalidMetadata {
            field,
            reason: format!("{} is not a non-negative count", value),
        });
    }
    Ok(value)
}

/// Structural and linguistic quality signals on top of a neutral base
pub(crate) fn content_quality(
    candidate: &ContentCandidate,
    analyzer: &TextAnalyzer,
    config: &ScorerConfig,
) -> Result<f64, RelevanceError> {
    let mut quality = NEUTRAL;

    let body_words = words(&candidate.body).len();
    if (100..=2000).contains(&body_words) {
        quality += 0.2;
    } else if body_words > 2000 && body_words <= 5000 {
        quality += 0.1;
    }

    if (3..=15).contains(&words(&candidate.title).len()) {
        quality += 0.1;
    }

    let metadata = &candidate.metadata;
    if metadata.tags.iter().any(|t| !t.trim().is_empty()) {
        quality += 0.1;
    }
    if metadata.url.as_deref().is_some_and(|u| !u.trim().is_empty()) {
        quality += 0.1;
    }

    let sentiment = analyzer.sentiment(&candidate.body).comparative;
    if sentiment > config.positive_sentiment_threshold {
        quality += 0.1;
    } else if sentiment < config.negative_sentiment_threshold {
        quality -= 0.1;
    }

    let sentence_count = sentences(&candidate.body).len();
    if sentence_count > 0 {
        let average = body_words as f64 / sentence_count as f64;
        if (10.0..=25.0).contains(&average) {
            quality += 0.1;
        }
    }

    if body_words > 0 {
        let density = analyzer.entities(&candidate.body).len() as f64 / body_words as f64;
        if density > 0.02 && density < 0.1 {
            quality += 0.1;
        }
    }

    Ok(quality.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::default()
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_exact_match_saturates() {
        let score = title_match(
            "React Server Components Tutorial",
            "React Server Components",
            &terms(&["react", "server", "component"]),
            &analyzer(),
        )
        .unwrap();
        assert!(score >= 1.0);
    }

    #[test]
    fn test_title_partial_match() {
        let optimize = terms(&["optimize"]);
        let full = title_match("Optimal caching", "optimize", &optimize, &analyzer()).unwrap();
        let none = title_match("Gardening tips", "optimize", &optimize, &analyzer()).unwrap();
        assert!(full > none);
        assert!(is_partial_match("optimal", "optimize"));
        assert!(is_partial_match("java", "javascript"));
        assert!(!is_partial_match("go", "golang"));
    }

    #[test]
    fn test_title_stop_words_do_not_partially_match() {
        // "and" is a substring of "android" but carries no meaning
        let score =
            title_match("Cats and dogs", "android", &terms(&["android"]), &analyzer()).unwrap();
        assert!(score < 0.75, "score was {score}");
        assert!(score > 0.0);
    }

    #[test]
    fn test_title_without_terms() {
        assert_eq!(title_match("Anything", "", &[], &analyzer()).unwrap(), 0.0);
    }

    #[test]
    fn test_content_match_no_hits() {
        let score = content_match(
            "Gardening is relaxing and rewarding.",
            &terms(&["python"]),
            &analyzer(),
            &Corpus::new(),
        )
        .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_content_match_hits() {
        let score = content_match(
            "Python makes data work pleasant. Python scripts glue systems together.",
            &terms(&["python"]),
            &analyzer(),
            &Corpus::new(),
        )
        .unwrap();
        assert!(score > 0.0);
    }

    #[test]
    fn test_content_match_empty_body() {
        let score = content_match("", &terms(&["python"]), &analyzer(), &Corpus::new()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_source_reliability_preferred() {
        let config = ScorerConfig::default();
        let plain = source_reliability(ContentSource::Blog, &[], &config).unwrap();
        let preferred =
            source_reliability(ContentSource::Blog, &[ContentSource::Blog], &config).unwrap();
        assert!((plain - 0.65).abs() < 1e-9);
        assert!((preferred - 0.78).abs() < 1e-9);

        let capped = source_reliability(
            ContentSource::Documentation,
            &[ContentSource::Documentation],
            &config,
        )
        .unwrap();
        assert_eq!(capped, 1.0);
    }

    #[test]
    fn test_recency_steps() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let at = |days: i64| (now - Duration::days(days)).to_rfc3339();

        assert_eq!(recency(Some(&at(0)), now).unwrap(), 1.0);
        assert_eq!(recency(Some(&at(7)), now).unwrap(), 1.0);
        assert_eq!(recency(Some(&at(8)), now).unwrap(), 0.9);
        assert_eq!(recency(Some(&at(30)), now).unwrap(), 0.9);
        assert_eq!(recency(Some(&at(90)), now).unwrap(), 0.8);
        assert_eq!(recency(Some(&at(365)), now).unwrap(), 0.6);
        assert_eq!(recency(Some(&at(366)), now).unwrap(), 0.4);
    }

    #[test]
    fn test_recency_uses_fractional_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let at = |days: i64, hours: i64| {
            (now - Duration::days(days) - Duration::hours(hours)).to_rfc3339()
        };

        assert_eq!(recency(Some(&at(7, 20)), now).unwrap(), 0.9);
        assert_eq!(recency(Some(&at(30, 1)), now).unwrap(), 0.8);
        assert_eq!(recency(Some(&at(365, 23)), now).unwrap(), 0.4);
        assert_eq!(recency(Some(&at(-2, 0)), now).unwrap(), 1.0);
    }

    #[test]
    fn test_recency_defaults() {
        let now = Utc::now();
        assert_eq!(recency(None, now).unwrap(), 0.5);
        assert_eq!(recency(Some("last tuesday"), now).unwrap(), 0.5);
        assert_eq!(recency(Some(""), now).unwrap(), 0.5);
    }

    #[test]
    fn test_parse_published_formats() {
        assert!(parse_published("2024-05-30T10:00:00Z").is_some());
        assert!(parse_published("2024-05-30").is_some());
        assert_eq!(
            parse_published("1717243200"),
            Utc.timestamp_opt(1_717_243_200, 0).single()
        );
        assert!(parse_published("30/05/2024").is_none());
    }

    #[test]
    fn test_popularity_paths() {
        let views = CandidateMetadata {
            view_count: Some(1_000.0),
            score: Some(100.0),
            ..Default::default()
        };
        assert!((popularity(&views).unwrap() - 0.5).abs() < 1e-9);

        let score = CandidateMetadata {
            score: Some(42.0),
            comment_count: Some(50.0),
            ..Default::default()
        };
        assert!((popularity(&score).unwrap() - 0.42).abs() < 1e-9);

        let comments = CandidateMetadata {
            comment_count: Some(25.0),
            ..Default::default()
        };
        assert!((popularity(&comments).unwrap() - 0.5).abs() < 1e-9);

        assert_eq!(popularity(&CandidateMetadata::default()).unwrap(), 0.5);
    }

    #[test]
    fn test_popularity_saturates() {
        let metadata = CandidateMetadata {
            view_count: Some(1_000_000.0),
            ..Default::default()
        };
        assert_eq!(popularity(&metadata).unwrap(), 1.0);

        let metadata = CandidateMetadata {
            view_count: Some(50_000_000.0),
            ..Default::default()
        };
        assert_eq!(popularity(&metadata).unwrap(), 1.0);
    }

    #[test]
    fn test_popularity_rejects_malformed() {
        let negative = CandidateMetadata {
            view_count: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            popularity(&negative),
            Err(RelevanceError::InvalidMetadata { field: "view_count", .. })
        ));

        let nan = CandidateMetadata {
            score: Some(f64::NAN),
            ..Default::default()
        };
        assert!(popularity(&nan).is_err());
    }

    #[test]
    fn test_quality_base() {
        let candidate = ContentCandidate::new("Hi", "", ContentSource::Web);
        let quality = content_quality(&candidate, &analyzer(), &ScorerConfig::default()).unwrap();
        assert!((quality - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_quality_metadata_bonuses() {
        let mut candidate =
            ContentCandidate::new("A reasonable title here", "", ContentSource::Web);
        candidate.metadata.tags = vec!["rust".to_string()];
        candidate.metadata.url = Some("https://example.com".to_string());

        let quality = content_quality(&candidate, &analyzer(), &ScorerConfig::default()).unwrap();
        assert!((quality - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_quality_negative_sentiment() {
        let candidate = ContentCandidate::new("x", "terrible awful bad", ContentSource::Web);
        let quality = content_quality(&candidate, &analyzer(), &ScorerConfig::default()).unwrap();
        assert!((quality - 0.4).abs() < 1e-9);
    }
}
