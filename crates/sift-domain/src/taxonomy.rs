//! Taxonomy domains - named buckets that own terms

/// A named category bucket (e.g. "programming")
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyDomain {
    /// Unique domain name
    pub name: String,

    /// Human readable description
    pub description: String,

    /// Categories terms of this domain are filed under
    pub categories: Vec<String>,

    /// Keyword patterns characteristic of the domain (lower-case substrings)
    pub keywords: Vec<String>,

    /// Minimum confidence for a term to count as belonging here
    pub confidence_threshold: f64,

    /// Optional parent domain name
    pub parent: Option<String>,
}

impl TaxonomyDomain {
    /// Create a domain with no categories, keywords, or parent
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            categories: Vec::new(),
            keywords: Vec::new(),
            confidence_threshold: 0.5,
            parent: None,
        }
    }

    /// Whether any keyword pattern occurs in the given term
    pub fn matches_keyword(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && term.contains(&k.to_lowercase()))
    }

    /// Whether the domain declares the given category
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}
