//! Text analysis on top of a shared lexicon

use crate::sentiment::Sentiment;
use crate::stem::stem;
use crate::text::{sentences, tokenize, words};
use crate::tfidf::Document;
use crate::Lexicon;
use std::collections::HashSet;
use std::sync::Arc;

/// Minimum length of a query term after stemming
const MIN_TERM_LEN: usize = 3;

/// Stateless text analyzer
///
/// Cheap to clone; every clone shares the same lexicon.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl TextAnalyzer {
    /// Create an analyzer over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract query terms: tokenize, drop stop-words, stem, drop terms
    /// shorter than three characters, deduplicate keeping first occurrence
    pub fn query_terms(&self, query: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        tokenize(query)
            .into_iter()
            .filter(|t| !self.lexicon.is_stop_word(t))
            .map(|t| stem(&t))
            .filter(|t| t.chars().count() >= MIN_TERM_LEN)
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    /// Stems of every non-stop-word token, in order
    pub fn stemmed_tokens(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| !self.lexicon.is_stop_word(t))
            .map(|t| stem(&t))
            .collect()
    }

    /// Build an ephemeral TF-IDF document from text
    pub fn document(&self, text: &str) -> Document {
        Document::from_terms(self.stemmed_tokens(text))
    }

    /// Lexicon sentiment of the text
    pub fn sentiment(&self, text: &str) -> Sentiment {
        Sentiment::analyze(&tokenize(text), &self.lexicon)
    }

    /// Stemmed noun-like concepts mentioned in the text
    ///
    /// A word counts as a concept when it is technical vocabulary, carries a
    /// noun-forming suffix, or is capitalized mid-sentence.
    pub fn concepts(&self, text: &str) -> HashSet<String> {
        let mut concepts = HashSet::new();
        for sentence in sentences(text) {
            for (index, word) in words(sentence).into_iter().enumerate() {
                let lower = word.to_lowercase();
                if lower.chars().count() < MIN_TERM_LEN || self.lexicon.is_stop_word(&lower) {
                    continue;
                }
                let capitalized = index > 0 && word.chars().next().is_some_and(char::is_uppercase);
                if capitalized
                    || self.lexicon.is_technical(&lower)
                    || self.lexicon.has_noun_suffix(&lower)
                {
                    concepts.insert(stem(&lower));
                }
            }
        }
        concepts
    }

    /// Named entities: capitalized words that do not open a sentence, plus
    /// acronyms anywhere
    pub fn entities(&self, text: &str) -> Vec<String> {
        let mut entities = Vec::new();
        for sentence in sentences(text) {
            for (index, word) in words(sentence).into_iter().enumerate() {
                if self.lexicon.is_stop_word(&word.to_lowercase()) {
                    continue;
                }
                let capitalized = index > 0 && word.chars().next().is_some_and(char::is_uppercase);
                if capitalized || is_acronym(word) {
                    entities.push(word.to_string());
                }
            }
        }
        entities
    }
}

fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}
