//! Configuration for the TermTaxonomy

use crate::seed;
use crate::TaxonomyError;
use serde::{Deserialize, Serialize};
use sift_domain::TaxonomyDomain;
use std::collections::HashSet;

/// A domain as it appears in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Unique domain name
    pub name: String,

    /// Human readable description
    #[serde(default)]
    pub description: String,

    /// Categories terms of this domain are filed under
    #[serde(default)]
    pub categories: Vec<String>,

    /// Keyword patterns characteristic of the domain
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Minimum confidence for a term to count as belonging here
    #[serde(default = "default_domain_threshold")]
    pub confidence_threshold: f64,

    /// Optional parent domain name
    #[serde(default)]
    pub parent: Option<String>,
}

fn default_domain_threshold() -> f64 {
    0.5
}

impl From<DomainConfig> for TaxonomyDomain {
    fn from(c: DomainConfig) -> Self {
        Self {
            name: c.name,
            description: c.description,
            categories: c.categories,
            keywords: c.keywords,
            confidence_threshold: c.confidence_threshold,
            parent: c.parent,
        }
    }
}

impl From<&TaxonomyDomain> for DomainConfig {
    fn from(d: &TaxonomyDomain) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone(),
            categories: d.categories.clone(),
            keywords: d.keywords.clone(),
            confidence_threshold: d.confidence_threshold,
            parent: d.parent.clone(),
        }
    }
}

/// Configuration for the TermTaxonomy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Minimum heuristic confidence for a learned term to be stored
    pub min_learning_confidence: f64,

    /// Whether learned terms are sent to registered validators
    pub enable_external_validation: bool,

    /// Additive confidence bump applied on successful validation
    pub validation_boost: f64,

    /// Shortest token considered for learning (characters)
    pub min_term_length: usize,

    /// Longest token considered for learning (characters)
    pub max_term_length: usize,

    /// Ceiling for heuristic confidence of a learned term
    pub max_learned_confidence: f64,

    /// Domain registry
    pub domains: Vec<DomainConfig>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            min_learning_confidence: 0.5,
            enable_external_validation: true,
            validation_boost: 0.2,
            min_term_length: 3,
            max_term_length: 25,
            max_learned_confidence: 0.95,
            domains: seed::default_domains(),
        }
    }
}

impl TaxonomyConfig {
    /// Only learn terms the heuristic is fairly sure about
    pub fn strict() -> Self {
        Self {
            min_learning_confidence: 0.7,
            validation_boost: 0.1,
            ..Default::default()
        }
    }

    /// Learn aggressively and trust validators more
    pub fn lenient() -> Self {
        Self {
            min_learning_confidence: 0.3,
            validation_boost: 0.3,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        if !(0.0..=1.0).contains(&self.min_learning_confidence) {
            return Err(TaxonomyError::Config(
                "min_learning_confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.validation_boost) {
            return Err(TaxonomyError::Config(
                "validation_boost must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(self.max_learned_confidence > 0.0 && self.max_learned_confidence < 1.0) {
            return Err(TaxonomyError::Config(
                "max_learned_confidence must be in (0.0, 1.0)".to_string(),
            ));
        }
        if self.min_term_length == 0 || self.min_term_length > self.max_term_length {
            return Err(TaxonomyError::Config(format!(
                "term length bounds {}..={} are invalid",
                self.min_term_length, self.max_term_length
            )));
        }

        let mut seen = HashSet::new();
        for domain in &self.domains {
            validate_domain(&domain.name, domain.confidence_threshold)?;
            if !seen.insert(domain.name.as_str()) {
                return Err(TaxonomyError::InvalidDomain {
                    name: domain.name.clone(),
                    reason: "declared more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, TaxonomyError> {
        toml::from_str(toml_str)
            .map_err(|e| TaxonomyError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, TaxonomyError> {
        toml::to_string_pretty(self)
            .map_err(|e| TaxonomyError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Apply a partial update, validating the result before committing it
    pub fn apply(&mut self, update: &TaxonomyConfigUpdate) -> Result<(), TaxonomyError> {
        let mut next = self.clone();
        if let Some(v) = update.min_learning_confidence {
            next.min_learning_confidence = v;
        }
        if let Some(v) = update.enable_external_validation {
            next.enable_external_validation = v;
        }
        if let Some(v) = update.validation_boost {
            next.validation_boost = v;
        }
        if let Some(v) = update.min_term_length {
            next.min_term_length = v;
        }
        if let Some(v) = update.max_term_length {
            next.max_term_length = v;
        }
        if let Some(v) = update.max_learned_confidence {
            next.max_learned_confidence = v;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Partial configuration update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfigUpdate {
    /// New minimum learning confidence
    pub min_learning_confidence: Option<f64>,
    /// Toggle external validation
    pub enable_external_validation: Option<bool>,
    /// New validation boost
    pub validation_boost: Option<f64>,
    /// New minimum token length
    pub min_term_length: Option<usize>,
    /// New maximum token length
    pub max_term_length: Option<usize>,
    /// New learned-confidence ceiling
    pub max_learned_confidence: Option<f64>,
}

pub(crate) fn validate_domain(name: &str, threshold: f64) -> Result<(), TaxonomyError> {
    if name.trim().is_empty() {
        return Err(TaxonomyError::InvalidDomain {
            name: name.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(TaxonomyError::InvalidDomain {
            name: name.to_string(),
            reason: format!("confidence_threshold {} outside [0, 1]", threshold),
        });
    }
    Ok(())
}
