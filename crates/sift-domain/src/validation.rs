//! Validation verdicts from external validators

/// Verdict on whether a term belongs to a domain
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validator confirmed the term
    pub is_valid: bool,

    /// Validator confidence in [0, 1]
    pub confidence: f64,

    /// Name of the validator that produced the verdict
    pub source: String,

    /// Suggested corrections or canonical spellings
    pub suggestions: Vec<String>,

    /// Terms the validator considers related
    pub related_terms: Vec<String>,
}

impl ValidationResult {
    /// A positive verdict
    pub fn valid(source: impl Into<String>, confidence: f64) -> Self {
        Self {
            is_valid: true,
            confidence,
            source: source.into(),
            suggestions: Vec::new(),
            related_terms: Vec::new(),
        }
    }

    /// A negative verdict with zero confidence
    pub fn invalid(source: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            source: source.into(),
            suggestions: Vec::new(),
            related_terms: Vec::new(),
        }
    }
}
