//! Sift NLP Toolkit
//!
//! Deterministic, rule-based text processing shared by the relevance scorer
//! and the term taxonomy.
//!
//! # Components
//!
//! - [`Lexicon`]: immutable word lists (stop-words, sentiment, technical
//!   categories) built once from a [`LexiconConfig`] and shared by `Arc`
//! - [`TextAnalyzer`]: tokenization, stemming, query-term extraction,
//!   sentiment, concept and entity extraction on top of a lexicon
//! - [`Corpus`]: document frequencies for TF-IDF; scoring an ephemeral
//!   document against it never mutates it
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use sift_nlp::{stem, Lexicon, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new(Arc::new(Lexicon::default()));
//! let terms = analyzer.query_terms("Building the React components");
//! assert_eq!(terms, vec!["build".to_string(), "react".into(), stem("component")]);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod lexicon;
mod sentiment;
mod stem;
mod text;
mod tfidf;

pub use analyzer::TextAnalyzer;
pub use error::NlpError;
pub use lexicon::{CategoryPatterns, Lexicon, LexiconConfig, TermCategory};
pub use sentiment::Sentiment;
pub use stem::stem;
pub use text::{sanitize, sentences, tokenize, words};
pub use tfidf::{Corpus, Document};
