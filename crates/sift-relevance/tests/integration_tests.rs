//! Integration tests for sift-relevance
//!
//! These tests drive the public scorer API end to end.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use sift_domain::{CandidateMetadata, ContentCandidate, ContentSource, Factor, ScoringWeights};
use sift_nlp::{Corpus, Lexicon, TextAnalyzer};
use sift_relevance::{RelevanceScorer, ScorerConfig, ScoringOptions};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sift_relevance=debug")
        .with_test_writer()
        .try_init();
}

fn rsc_candidate(source: ContentSource) -> ContentCandidate {
    ContentCandidate::new(
        "React Server Components Tutorial",
        "React Server Components run on the server.",
        source,
    )
}

#[test]
fn test_matching_title_scores_high() {
    init_tracing();
    let scorer = RelevanceScorer::default();
    let candidate = rsc_candidate(ContentSource::Tutorial);

    let score = scorer.score(&candidate, "React Server Components", &ScoringOptions::default());
    assert!(score > 0.7, "expected > 0.7, got {}", score);
}

#[test]
fn test_unrelated_query_scores_low_but_positive() {
    init_tracing();
    let scorer = RelevanceScorer::default();
    let candidate = rsc_candidate(ContentSource::Tutorial);

    let score = scorer.score(
        &candidate,
        "Python machine learning algorithms",
        &ScoringOptions::default(),
    );
    assert!(score > 0.0 && score < 0.7, "expected (0, 0.7), got {}", score);
}

#[test]
fn test_documentation_beats_forum() {
    let scorer = RelevanceScorer::default();
    let options = ScoringOptions::default();
    let query = "React Server Components";

    let docs = scorer.score(&rsc_candidate(ContentSource::Documentation), query, &options);
    let forum = scorer.score(&rsc_candidate(ContentSource::Forum), query, &options);
    assert!(docs > forum, "docs {} should exceed forum {}", docs, forum);
}

#[test]
fn test_unknown_source_tag_scores_as_web() {
    let scorer = RelevanceScorer::default();
    let options = ScoringOptions::default();
    let query = "React Server Components";

    let unknown = rsc_candidate(ContentSource::parse_or_web("carrier-pigeon"));
    let web = rsc_candidate(ContentSource::Web);
    assert_eq!(
        scorer.score(&unknown, query, &options),
        scorer.score(&web, query, &options)
    );
}

#[test]
fn test_recent_content_beats_old_content() {
    let scorer = RelevanceScorer::default();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let options = ScoringOptions::default().at(now);

    let mut fresh = rsc_candidate(ContentSource::Blog);
    fresh.metadata.published_at = Some((now - Duration::days(2)).to_rfc3339());
    let mut stale = rsc_candidate(ContentSource::Blog);
    stale.metadata.published_at = Some("2019-01-01".to_string());

    let fresh_explained = scorer.explain(&fresh, "react", &options);
    let stale_explained = scorer.explain(&stale, "react", &options);
    assert_eq!(fresh_explained.factors.recency, 1.0);
    assert_eq!(stale_explained.factors.recency, 0.4);
    assert!(fresh_explained.score > stale_explained.score);
}

#[test]
fn test_custom_weights_isolate_a_factor() {
    let scorer = RelevanceScorer::default();
    let weights = ScoringWeights {
        title_match: 0.0,
        content_match: 0.0,
        source_reliability: 1.0,
        recency: 0.0,
        popularity: 0.0,
        content_quality: 0.0,
    };
    let options = ScoringOptions::default().with_weights(weights);

    let score = scorer.score(&rsc_candidate(ContentSource::GitHub), "anything", &options);
    assert!((score - 0.85).abs() < 1e-9);
}

#[test]
fn test_rank_orders_and_filters() {
    init_tracing();
    let scorer = RelevanceScorer::default();
    let candidates = vec![
        ContentCandidate::new(
            "Sourdough starters",
            "Flour, water and patience.",
            ContentSource::Forum,
        ),
        rsc_candidate(ContentSource::Documentation),
        rsc_candidate(ContentSource::Blog),
    ];

    let ranked = scorer.score_and_rank(
        &candidates,
        "React Server Components",
        &ScoringOptions::default(),
    );
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].index, 1);
    assert_eq!(ranked[1].index, 2);
    assert_eq!(ranked[2].index, 0);

    let cutoff = ranked[1].score;
    let filtered = scorer.score_and_rank(
        &candidates,
        "React Server Components",
        &ScoringOptions::default().with_min_score(cutoff),
    );
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.score >= cutoff));
}

#[test]
fn test_rank_empty_input() {
    let scorer = RelevanceScorer::default();
    let ranked = scorer.score_and_rank(&[], "react", &ScoringOptions::default());
    assert!(ranked.is_empty());
}

#[test]
fn test_scorer_from_toml_config() {
    let config = ScorerConfig::from_toml(
        r#"
        preferred_source_multiplier = 1.5

        [source_priors]
        forum = 0.9
        "#,
    )
    .unwrap();
    let scorer = RelevanceScorer::new(Arc::new(Lexicon::default()), config).unwrap();

    let explanation = scorer.explain(
        &rsc_candidate(ContentSource::Forum),
        "react",
        &ScoringOptions::default(),
    );
    assert_eq!(explanation.factors.source_reliability, 0.9);
}

#[test]
fn test_background_corpus_is_not_mutated() {
    let analyzer = TextAnalyzer::default();
    let corpus = Arc::new(
        Corpus::new()
            .with_document(&analyzer.document("Vue templates and directives"))
            .with_document(&analyzer.document("Angular modules and services")),
    );
    let scorer = RelevanceScorer::default().with_corpus(Arc::clone(&corpus));

    let candidate = rsc_candidate(ContentSource::Blog);
    let first = scorer.score(&candidate, "react server", &ScoringOptions::default());
    let second = scorer.score(&candidate, "react server", &ScoringOptions::default());

    assert_eq!(first, second);
    assert_eq!(corpus.len(), 2);
}

#[test]
fn test_shared_scorer_across_threads() {
    let scorer = Arc::new(RelevanceScorer::default());
    let candidate = rsc_candidate(ContentSource::Documentation);
    let expected = scorer.score(&candidate, "react", &ScoringOptions::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            let candidate = candidate.clone();
            std::thread::spawn(move || {
                scorer.score(&candidate, "react", &ScoringOptions::default())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn arb_count() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        Just(Some(-1.0)),
        (0.0f64..1e9).prop_map(Some),
    ]
}

fn arb_source() -> impl Strategy<Value = ContentSource> {
    (0usize..ContentSource::ALL.len()).prop_map(|i| ContentSource::ALL[i])
}

fn arb_candidate() -> impl Strategy<Value = ContentCandidate> {
    (
        ".{0,40}",
        ".{0,200}",
        arb_source(),
        arb_count(),
        arb_count(),
        arb_count(),
        proptest::option::of(".{0,30}"),
    )
        .prop_map(|(title, body, source, views, score, comments, published_at)| {
            ContentCandidate::new(title, body, source).with_metadata(CandidateMetadata {
                published_at,
                view_count: views,
                score,
                comment_count: comments,
                ..Default::default()
            })
        })
}

proptest! {
    #[test]
    fn prop_score_always_in_unit_range(candidate in arb_candidate(), query in ".{0,40}") {
        let scorer = RelevanceScorer::default();
        let options = ScoringOptions::default();
        let score = scorer.score(&candidate, &query, &options);
        prop_assert!((0.0..=1.0).contains(&score));

        let explanation = scorer.explain(&candidate, &query, &options);
        prop_assert!((0.0..=1.0).contains(&explanation.score));
        for factor in Factor::ALL {
            let value = explanation.factors.get(factor);
            prop_assert!((0.0..=1.0).contains(&value), "{:?} = {}", factor, value);
        }
    }

    #[test]
    fn prop_views_are_monotonic(a in 0.0f64..1e8, b in 0.0f64..1e8) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let scorer = RelevanceScorer::default();
        let options = ScoringOptions::default();

        let mut candidate = rsc_candidate(ContentSource::Web);
        candidate.metadata.view_count = Some(low);
        let low_pop = scorer.explain(&candidate, "react", &options).factors.popularity;
        candidate.metadata.view_count = Some(high);
        let high_pop = scorer.explain(&candidate, "react", &options).factors.popularity;

        prop_assert!(low_pop <= high_pop);
    }

    #[test]
    fn prop_rank_is_sorted_and_stable(
        candidates in proptest::collection::vec(arb_candidate(), 0..12),
        query in "[a-z ]{0,30}",
    ) {
        let scorer = RelevanceScorer::default();
        let ranked = scorer.score_and_rank(&candidates, &query, &ScoringOptions::default());

        prop_assert_eq!(ranked.len(), candidates.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }
}
