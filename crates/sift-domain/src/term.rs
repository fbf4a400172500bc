//! Taxonomy terms and their lifecycle source

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Where a term came from
///
/// Transitions:
/// - `Static` is terminal
/// - `Learned` → `Validated` through a successful validation
/// - `External` is reserved; nothing in the learning path produces it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermSource {
    /// Seeded at initialization, confidence fixed at 1.0
    Static,
    /// Inferred from content
    Learned,
    /// Supplied by an external provider (reserved)
    External,
    /// Learned and then confirmed by a validator
    Validated,
}

impl TermSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TermSource::Static => "static",
            TermSource::Learned => "learned",
            TermSource::External => "external",
            TermSource::Validated => "validated",
        }
    }

    /// Parse a source from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "static" => Some(TermSource::Static),
            "learned" => Some(TermSource::Learned),
            "external" => Some(TermSource::External),
            "validated" => Some(TermSource::Validated),
            _ => None,
        }
    }

    /// Whether terms of this source live in the static bucket
    pub fn is_static(&self) -> bool {
        matches!(self, TermSource::Static)
    }
}

impl std::str::FromStr for TermSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid term source: {}", s))
    }
}

/// A vocabulary entry in the taxonomy
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyTerm {
    /// The term itself, lower-cased
    pub term: String,

    /// Owning domain name
    pub domain: String,

    /// Category within the domain (e.g. "language", "framework")
    pub category: String,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// Lifecycle source
    pub source: TermSource,

    /// How many times the term has been observed
    pub frequency: u64,

    /// When the term was last observed (seconds since Unix epoch)
    pub last_seen: u64,

    /// Related terms
    pub related_terms: Vec<String>,

    /// Alternative spellings
    pub aliases: Vec<String>,

    /// Source identifiers the term was seen in
    pub contexts: Vec<String>,

    /// Observation count per platform
    pub platform_usage: BTreeMap<String, u64>,
}

impl TaxonomyTerm {
    /// Create a new term observed once, now
    pub fn new(
        term: impl Into<String>,
        domain: impl Into<String>,
        category: impl Into<String>,
        confidence: f64,
        source: TermSource,
    ) -> Self {
        Self {
            term: Self::normalize(&term.into()),
            domain: domain.into(),
            category: category.into(),
            confidence,
            source,
            frequency: 1,
            last_seen: current_timestamp(),
            related_terms: Vec::new(),
            aliases: Vec::new(),
            contexts: Vec::new(),
            platform_usage: BTreeMap::new(),
        }
    }

    /// Create a static term with confidence 1.0
    pub fn seeded(
        term: impl Into<String>,
        domain: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(term, domain, category, 1.0, TermSource::Static)
    }

    /// Normalize a term string into its lookup key
    pub fn normalize(term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// Builder: attach aliases
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: attach related terms
    pub fn with_related(mut self, related: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.related_terms = related.into_iter().map(Into::into).collect();
        self
    }
}
