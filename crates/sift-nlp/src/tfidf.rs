//! Corpus-relative term importance (TF-IDF)
//!
//! [`Corpus`] holds document frequencies and is never touched by scoring.
//! A [`Document`] is an ephemeral bag of terms; [`Corpus::tf_idf`] scores it
//! as if it had been added to the corpus, without adding it.

use std::collections::{HashMap, HashSet};

/// Term counts for a single document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    counts: HashMap<String, usize>,
    len: usize,
}

impl Document {
    /// Build a document from already-normalized terms
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        let mut len = 0;
        for term in terms {
            *counts.entry(term.into()).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Occurrences of a term
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Whether the document contains a term
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Total number of terms
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the document has no terms
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn distinct_terms(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }
}

/// Document frequencies over a background corpus
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: usize,
    document_frequency: HashMap<String, usize>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a document to the corpus
    pub fn with_document(mut self, document: &Document) -> Self {
        self.add_document(document);
        self
    }

    /// Add a document to the corpus
    pub fn add_document(&mut self, document: &Document) {
        self.documents += 1;
        let distinct: HashSet<&String> = document.distinct_terms().collect();
        for term in distinct {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.documents
    }

    /// Whether the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents == 0
    }

    /// Inverse document frequency of a term, counting `document` as a member
    /// of the corpus
    ///
    /// `idf = 1 + ln(N / (1 + df))`
    pub fn idf_with(&self, term: &str, document: &Document) -> f64 {
        let n = (self.documents + 1) as f64;
        let df = self.document_frequency.get(term).copied().unwrap_or(0)
            + usize::from(document.contains(term));
        1.0 + (n / (1.0 + df as f64)).ln()
    }

    /// Summed TF-IDF of `terms` in `document`, with `document` treated as an
    /// ephemeral corpus member
    pub fn tf_idf<S: AsRef<str>>(&self, terms: &[S], document: &Document) -> f64 {
        terms
            .iter()
            .map(|t| {
                let term = t.as_ref();
                let tf = document.count(term);
                if tf == 0 {
                    0.0
                } else {
                    tf as f64 * self.idf_with(term, document)
                }
            })
            .sum()
    }
}
