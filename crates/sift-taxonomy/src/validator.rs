//! External term validators
//!
//! A validator is an asynchronous capability that confirms whether a term
//! belongs to a domain. The taxonomy consults registered validators in
//! registration order and takes the first positive verdict.

use crate::ValidatorError;
use async_trait::async_trait;
use sift_domain::{TaxonomyDomain, ValidationResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Confirms term/domain membership against some external source
#[async_trait]
pub trait TermValidator: Send + Sync {
    /// Validator name, recorded as the source of its verdicts
    fn name(&self) -> &str;

    /// Judge whether `term` belongs to `domain`
    async fn validate(&self, term: &str, domain: &str) -> Result<ValidationResult, ValidatorError>;

    /// Whether the validator can currently be consulted
    async fn is_available(&self) -> bool {
        true
    }

    /// Free-form capability tags
    fn capabilities(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone)]
enum MockResponse {
    Verdict(bool),
    Error,
}

/// Deterministic validator for testing
///
/// Returns pre-configured verdicts per term without any I/O.
///
/// # Examples
///
/// ```
/// use sift_taxonomy::{MockValidator, TermValidator};
///
/// let mut validator = MockValidator::new(false);
/// validator.accept("rust");
/// assert_eq!(validator.name(), "mock");
/// assert_eq!(validator.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockValidator {
    name: String,
    default_verdict: bool,
    confidence: f64,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    available: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockValidator {
    /// Create a mock that answers `default_verdict` for every term
    pub fn new(default_verdict: bool) -> Self {
        Self {
            name: "mock".to_string(),
            default_verdict,
            confidence: 0.9,
            responses: Arc::new(Mutex::new(HashMap::new())),
            available: Arc::new(Mutex::new(true)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Builder: rename the validator
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Confirm a specific term
    pub fn accept(&mut self, term: impl Into<String>) {
        lock(&self.responses).insert(term.into(), MockResponse::Verdict(true));
    }

    /// Reject a specific term
    pub fn reject(&mut self, term: impl Into<String>) {
        lock(&self.responses).insert(term.into(), MockResponse::Verdict(false));
    }

    /// Configure to return an error for a specific term
    pub fn add_error(&mut self, term: impl Into<String>) {
        lock(&self.responses).insert(term.into(), MockResponse::Error);
    }

    /// Toggle availability; clones share the flag
    pub fn set_available(&self, available: bool) {
        *lock(&self.available) = available;
    }

    /// Get the number of times validate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }
}

impl Default for MockValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl TermValidator for MockValidator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(
        &self,
        term: &str,
        _domain: &str,
    ) -> Result<ValidationResult, ValidatorError> {
        *lock(&self.call_count) += 1;

        let response = lock(&self.responses).get(term).cloned();
        let verdict = match response {
            Some(MockResponse::Error) => {
                return Err(ValidatorError::Other(format!("Mock error for '{}'", term)));
            }
            Some(MockResponse::Verdict(v)) => v,
            None => self.default_verdict,
        };

        if verdict {
            Ok(ValidationResult::valid(self.name.clone(), self.confidence))
        } else {
            Ok(ValidationResult::invalid(self.name.clone()))
        }
    }

    async fn is_available(&self) -> bool {
        *lock(&self.available)
    }

    fn capabilities(&self) -> Vec<String> {
        vec!["deterministic".to_string()]
    }
}

/// Confirms a term when the target domain's keyword patterns occur in it
#[derive(Debug, Clone)]
pub struct KeywordValidator {
    domains: HashMap<String, TaxonomyDomain>,
    confidence: f64,
}

impl KeywordValidator {
    /// Create a validator over a set of domains
    pub fn new(domains: impl IntoIterator<Item = TaxonomyDomain>) -> Self {
        Self {
            domains: domains.into_iter().map(|d| (d.name.clone(), d)).collect(),
            confidence: 0.7,
        }
    }

    /// Builder: confidence reported on a match
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

#[async_trait]
impl TermValidator for KeywordValidator {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn validate(&self, term: &str, domain: &str) -> Result<ValidationResult, ValidatorError> {
        let Some(target) = self.domains.get(domain) else {
            return Ok(ValidationResult::invalid(self.name()));
        };
        if target.matches_keyword(term) {
            let mut result = ValidationResult::valid(self.name(), self.confidence);
            result.related_terms = target
                .keywords
                .iter()
                .filter(|k| term.contains(k.as_str()))
                .cloned()
                .collect();
            Ok(result)
        } else {
            Ok(ValidationResult::invalid(self.name()))
        }
    }

    fn capabilities(&self) -> Vec<String> {
        vec!["offline".to_string(), "keyword-patterns".to_string()]
    }
}
