//! Core TermTaxonomy implementation

use crate::config::validate_domain;
use crate::learning::{candidate_tokens, heuristic_confidence};
use crate::seed;
use crate::{TaxonomyConfig, TaxonomyConfigUpdate, TaxonomyError, TaxonomyMetrics, TermValidator};
use sift_domain::{
    current_timestamp, ContentType, LearningContext, Platform, TaxonomyDomain, TaxonomyTerm,
    TermSource, ValidationResult,
};
use sift_nlp::{sanitize, Lexicon};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What `add_term` did with a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTermOutcome {
    /// The term was new and has been stored
    Inserted,
    /// The term was already learned; its observation data was merged
    Merged,
    /// A static term with this name already exists
    Unchanged,
    /// The term was empty, malformed, or would shadow a static term
    Rejected,
}

/// One domain with all of its terms
#[derive(Debug, Clone, PartialEq)]
pub struct DomainExport {
    /// Domain definition
    pub domain: TaxonomyDomain,
    /// Static and learned terms filed under the domain, sorted by name
    pub terms: Vec<TaxonomyTerm>,
}

/// Full dump of a taxonomy, keyed by domain name
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyExport {
    /// Unix seconds at export time
    pub exported_at: u64,
    /// Domains with their terms
    pub domains: BTreeMap<String, DomainExport>,
}

impl TaxonomyExport {
    /// Number of terms across all domains
    pub fn term_count(&self) -> usize {
        self.domains.values().map(|d| d.terms.len()).sum()
    }
}

/// Domain vocabulary with static, learned and validated terms
///
/// Mutation takes `&mut self`; wrap the taxonomy in a lock to share it.
/// The only suspension points are calls into registered validators.
///
/// # Examples
///
/// ```
/// use sift_taxonomy::{TaxonomyConfig, TermTaxonomy};
///
/// let mut taxonomy = TermTaxonomy::default();
/// taxonomy.initialize(TaxonomyConfig::default()).unwrap();
///
/// let ranked = taxonomy.classify_content("Deploying a React app with Docker");
/// assert_eq!(ranked.len(), 2);
/// assert!(taxonomy.get_term("react").is_some());
/// ```
pub struct TermTaxonomy {
    lexicon: Arc<Lexicon>,
    config: TaxonomyConfig,
    domains: BTreeMap<String, TaxonomyDomain>,
    static_terms: HashMap<String, TaxonomyTerm>,
    learned_terms: HashMap<String, TaxonomyTerm>,
    validators: Vec<Box<dyn TermValidator>>,
    metrics: TaxonomyMetrics,
    initialized: bool,
}

impl fmt::Debug for TermTaxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let validators: Vec<&str> = self.validators.iter().map(|v| v.name()).collect();
        f.debug_struct("TermTaxonomy")
            .field("config", &self.config)
            .field("domains", &self.domains.len())
            .field("static_terms", &self.static_terms.len())
            .field("learned_terms", &self.learned_terms.len())
            .field("validators", &validators)
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Default for TermTaxonomy {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl TermTaxonomy {
    /// Create an empty, uninitialized taxonomy over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            config: TaxonomyConfig::default(),
            domains: BTreeMap::new(),
            static_terms: HashMap::new(),
            learned_terms: HashMap::new(),
            validators: Vec::new(),
            metrics: TaxonomyMetrics::new(),
            initialized: false,
        }
    }

    /// Seed static terms and register the configured domains
    ///
    /// Calling this again merges: domains are added or replaced, static
    /// terms are only inserted when absent, learned terms are kept.
    pub fn initialize(&mut self, config: TaxonomyConfig) -> Result<(), TaxonomyError> {
        config.validate()?;

        for domain in &config.domains {
            self.domains
                .insert(domain.name.clone(), TaxonomyDomain::from(domain.clone()));
        }
        for term in seed::static_terms() {
            self.ensure_domain(&term.domain);
            self.static_terms.entry(term.term.clone()).or_insert(term);
        }

        self.config = config;
        self.initialized = true;
        self.refresh_metrics();

        info!(
            "Taxonomy initialized: {} domains, {} static terms",
            self.domains.len(),
            self.static_terms.len()
        );
        Ok(())
    }

    /// Whether `initialize` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current configuration
    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }

    /// Store a term in the bucket its source selects
    ///
    /// A learned term that is already known has its observation data merged.
    /// With a context and external validation enabled, a learned term is
    /// sent to the validators; a positive verdict bumps its confidence and
    /// marks it validated.
    pub async fn add_term(
        &mut self,
        term: TaxonomyTerm,
        context: Option<&LearningContext>,
    ) -> AddTermOutcome {
        self.store(term, context, true).await
    }

    /// `add_term` with control over whether the context is recorded on the
    /// term; restored terms already carry their observation history
    async fn store(
        &mut self,
        mut term: TaxonomyTerm,
        context: Option<&LearningContext>,
        record_observation: bool,
    ) -> AddTermOutcome {
        term.term = TaxonomyTerm::normalize(&term.term);
        if term.term.is_empty() || !term.confidence.is_finite() {
            warn!("Rejecting malformed term '{}'", term.term);
            return AddTermOutcome::Rejected;
        }
        term.confidence = term.confidence.clamp(0.0, 1.0);
        if term.source == TermSource::Learned {
            term.confidence = term.confidence.min(self.config.max_learned_confidence);
        }
        self.ensure_domain(&term.domain);

        if term.source.is_static() {
            let outcome = if self.static_terms.contains_key(&term.term) {
                AddTermOutcome::Unchanged
            } else {
                term.confidence = 1.0;
                self.static_terms.insert(term.term.clone(), term);
                AddTermOutcome::Inserted
            };
            self.refresh_metrics();
            return outcome;
        }

        if self.static_terms.contains_key(&term.term) {
            warn!("Term '{}' is static; ignoring {} copy", term.term, term.source.as_str());
            return AddTermOutcome::Rejected;
        }

        if let Some(context) = context.filter(|_| record_observation) {
            observe(&mut term, context);
        }

        let key = term.term.clone();
        let outcome = match self.learned_terms.get_mut(&key) {
            Some(existing) => {
                merge(existing, term);
                AddTermOutcome::Merged
            }
            None => {
                self.learned_terms.insert(key.clone(), term);
                AddTermOutcome::Inserted
            }
        };

        if context.is_some() && self.config.enable_external_validation {
            self.try_promote(&key).await;
        }

        self.refresh_metrics();
        outcome
    }

    /// Extract new terms from text and store those the heuristic trusts
    ///
    /// Returns the terms that were stored, after any validation.
    pub async fn learn_from_content(
        &mut self,
        text: &str,
        context: &LearningContext,
    ) -> Vec<TaxonomyTerm> {
        let tokens = candidate_tokens(text, &self.lexicon, &self.config);
        let mut learned = Vec::new();

        for token in tokens {
            if self.is_known(&token) {
                continue;
            }
            let category = self.lexicon.categorize(&token);
            let confidence = heuristic_confidence(category, context, &self.config);
            if confidence < self.config.min_learning_confidence {
                debug!(
                    "Skipping '{}': confidence {:.2} below {:.2}",
                    token, confidence, self.config.min_learning_confidence
                );
                continue;
            }

            let (domain, category) = seed::placement(category);
            let term = TaxonomyTerm::new(
                token.as_str(),
                domain,
                category,
                confidence,
                TermSource::Learned,
            );
            if self.add_term(term, Some(context)).await == AddTermOutcome::Inserted {
                if let Some(stored) = self.learned_terms.get(&token) {
                    learned.push(stored.clone());
                }
            }
        }

        self.metrics.record_learned(learned.len());
        info!(
            "Learned {} terms from '{}' ({})",
            learned.len(),
            context.source_id,
            context.content_type.as_str()
        );
        learned
    }

    /// Ask registered validators whether a term belongs to a domain
    ///
    /// Validators run in registration order and the first positive verdict
    /// wins. Unavailable validators are skipped; a validator error counts as
    /// a negative verdict.
    pub async fn validate_term(&mut self, term: &str, domain: &str) -> ValidationResult {
        let term = TaxonomyTerm::normalize(term);
        let mut last: Option<ValidationResult> = None;

        for validator in &self.validators {
            if !validator.is_available().await {
                debug!("Validator '{}' unavailable, skipping", validator.name());
                continue;
            }
            match validator.validate(&term, domain).await {
                Ok(result) if result.is_valid => {
                    debug!("Validator '{}' confirmed '{}' in {}", validator.name(), term, domain);
                    self.metrics.record_validation(true);
                    return result;
                }
                Ok(result) => last = Some(result),
                Err(e) => {
                    warn!("Validator '{}' failed on '{}': {}", validator.name(), term, e);
                    last = Some(ValidationResult::invalid(validator.name()));
                }
            }
        }

        match last {
            Some(result) => {
                self.metrics.record_validation(false);
                result
            }
            None => ValidationResult::invalid("none"),
        }
    }

    /// Static and learned terms of a domain, most confident first
    pub fn get_terms_for_domain(&self, domain: &str) -> Vec<&TaxonomyTerm> {
        let mut terms: Vec<&TaxonomyTerm> = self
            .all_terms()
            .filter(|t| t.domain == domain)
            .collect();
        terms.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        terms
    }

    /// Look up a term; static terms take precedence
    pub fn get_term(&self, term: &str) -> Option<&TaxonomyTerm> {
        let key = TaxonomyTerm::normalize(term);
        self.static_terms
            .get(&key)
            .or_else(|| self.learned_terms.get(&key))
    }

    /// Probability of each domain given the known terms in the text
    ///
    /// Each known token adds its confidence to its domain; the totals are
    /// normalized over the domains that were hit and sorted descending,
    /// ties broken by name. Text without known terms yields an empty list.
    pub fn classify_content(&self, text: &str) -> Vec<(String, f64)> {
        let sanitized = sanitize(text);
        let mut weights: HashMap<&str, f64> = HashMap::new();
        for token in sanitized.split_whitespace() {
            if let Some(term) = self.lookup(token.trim_matches('-')) {
                *weights.entry(term.domain.as_str()).or_insert(0.0) += term.confidence;
            }
        }

        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut ranked: Vec<(String, f64)> = weights
            .into_iter()
            .map(|(domain, weight)| (domain.to_string(), weight / total))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }

    /// Dump every domain with its terms
    pub fn export_taxonomy(&self) -> TaxonomyExport {
        let mut domains: BTreeMap<String, DomainExport> = self
            .domains
            .values()
            .map(|d| {
                (
                    d.name.clone(),
                    DomainExport {
                        domain: d.clone(),
                        terms: Vec::new(),
                    },
                )
            })
            .collect();

        for term in self.all_terms() {
            if let Some(export) = domains.get_mut(&term.domain) {
                export.terms.push(term.clone());
            }
        }
        for export in domains.values_mut() {
            export.terms.sort_by(|a, b| a.term.cmp(&b.term));
        }

        TaxonomyExport {
            exported_at: current_timestamp(),
            domains,
        }
    }

    /// Restore a dump, re-applying every term through `add_term`
    ///
    /// Imported terms keep their recorded contexts and platform usage; the
    /// import itself is not recorded as an observation. Returns the number
    /// of terms inserted or merged.
    pub async fn import_taxonomy(&mut self, data: TaxonomyExport) -> usize {
        let context = LearningContext::new(
            "import",
            ContentType::Other("import".to_string()),
            Platform::Local,
        );
        let mut applied = 0;

        for (name, export) in data.domains {
            if !self.domains.contains_key(&name) {
                self.domains.insert(name.clone(), export.domain);
            }
            for term in export.terms {
                match self.store(term, Some(&context), false).await {
                    AddTermOutcome::Inserted | AddTermOutcome::Merged => applied += 1,
                    AddTermOutcome::Unchanged | AddTermOutcome::Rejected => {}
                }
            }
        }

        self.refresh_metrics();
        info!("Imported {} terms", applied);
        applied
    }

    /// Append a validator; validators are consulted in registration order
    pub fn register_validator(&mut self, validator: impl TermValidator + 'static) {
        info!("Registered validator '{}'", validator.name());
        self.validators.push(Box::new(validator));
    }

    /// Apply a partial configuration update
    pub fn update_config(&mut self, update: TaxonomyConfigUpdate) -> Result<(), TaxonomyError> {
        self.config.apply(&update)?;
        debug!("Taxonomy configuration updated: {:?}", update);
        Ok(())
    }

    /// Registered domains, sorted by name
    pub fn get_domains(&self) -> Vec<&TaxonomyDomain> {
        self.domains.values().collect()
    }

    /// Add or replace a domain
    pub fn add_domain(&mut self, domain: TaxonomyDomain) -> Result<(), TaxonomyError> {
        validate_domain(&domain.name, domain.confidence_threshold)?;

        let config_entry = crate::DomainConfig::from(&domain);
        match self.config.domains.iter_mut().find(|d| d.name == domain.name) {
            Some(existing) => *existing = config_entry,
            None => self.config.domains.push(config_entry),
        }

        self.domains.insert(domain.name.clone(), domain);
        self.refresh_metrics();
        Ok(())
    }

    /// Current metrics
    pub fn get_metrics(&self) -> &TaxonomyMetrics {
        &self.metrics
    }

    fn all_terms(&self) -> impl Iterator<Item = &TaxonomyTerm> {
        self.static_terms.values().chain(self.learned_terms.values())
    }

    fn lookup(&self, token: &str) -> Option<&TaxonomyTerm> {
        self.static_terms
            .get(token)
            .or_else(|| self.learned_terms.get(token))
    }

    fn is_known(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    fn ensure_domain(&mut self, name: &str) {
        if !self.domains.contains_key(name) {
            debug!("Registering domain '{}' on first use", name);
            self.domains
                .insert(name.to_string(), TaxonomyDomain::new(name, ""));
        }
    }

    async fn try_promote(&mut self, key: &str) {
        let (domain, pending) = match self.learned_terms.get(key) {
            Some(term) => (term.domain.clone(), term.source == TermSource::Learned),
            None => return,
        };
        if !pending || self.validators.is_empty() {
            return;
        }

        let result = self.validate_term(key, &domain).await;
        if !result.is_valid {
            return;
        }

        let boost = self.config.validation_boost;
        if let Some(term) = self.learned_terms.get_mut(key) {
            term.confidence = (term.confidence + boost).min(1.0);
            term.source = TermSource::Validated;
            extend_unique(&mut term.related_terms, result.related_terms);
            info!(
                "Term '{}' validated by '{}' (confidence {:.2})",
                key, result.source, term.confidence
            );
        }
    }

    fn refresh_metrics(&mut self) {
        let domain_count = self.domains.len();
        let terms = self.static_terms.values().chain(self.learned_terms.values());
        self.metrics.recount(terms, domain_count, current_timestamp());
    }
}

/// Record where a term was seen
fn observe(term: &mut TaxonomyTerm, context: &LearningContext) {
    if !term.contexts.contains(&context.source_id) {
        term.contexts.push(context.source_id.clone());
    }
    *term
        .platform_usage
        .entry(context.platform.as_str().to_string())
        .or_insert(0) += 1;
}

/// Fold a re-observed term into the stored one
fn merge(existing: &mut TaxonomyTerm, incoming: TaxonomyTerm) {
    existing.frequency = existing.frequency.saturating_add(1);
    existing.last_seen = current_timestamp().max(incoming.last_seen);
    existing.confidence = existing.confidence.max(incoming.confidence);
    if incoming.source == TermSource::Validated {
        existing.source = TermSource::Validated;
    }
    extend_unique(&mut existing.contexts, incoming.contexts);
    extend_unique(&mut existing.aliases, incoming.aliases);
    extend_unique(&mut existing.related_terms, incoming.related_terms);
    for (platform, count) in incoming.platform_usage {
        *existing.platform_usage.entry(platform).or_insert(0) += count;
    }
}

fn extend_unique(target: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockValidator;

    fn taxonomy() -> TermTaxonomy {
        let mut taxonomy = TermTaxonomy::default();
        taxonomy.initialize(TaxonomyConfig::default()).unwrap();
        taxonomy
    }

    fn code_context() -> LearningContext {
        LearningContext::new("repo/readme", ContentType::Code, Platform::GitHub)
    }

    #[test]
    fn test_initialize_seeds_static_terms() {
        let taxonomy = taxonomy();
        let rust = taxonomy.get_term("Rust").unwrap();
        assert_eq!(rust.source, TermSource::Static);
        assert_eq!(rust.confidence, 1.0);
        assert!(taxonomy.get_metrics().static_terms > 0);
        assert_eq!(taxonomy.get_metrics().learned_terms, 0);
    }

    #[test]
    fn test_initialize_is_reentrant() {
        let mut taxonomy = taxonomy();
        let before = taxonomy.get_metrics().total_terms();
        taxonomy.initialize(TaxonomyConfig::strict()).unwrap();
        assert_eq!(taxonomy.get_metrics().total_terms(), before);
        assert_eq!(taxonomy.config().min_learning_confidence, 0.7);
    }

    #[tokio::test]
    async fn test_static_term_is_never_replaced() {
        let mut taxonomy = taxonomy();
        let shadow = TaxonomyTerm::new("react", "general", "general", 0.4, TermSource::Learned);
        assert_eq!(taxonomy.add_term(shadow, None).await, AddTermOutcome::Rejected);

        let reseed = TaxonomyTerm::seeded("react", "other", "other");
        assert_eq!(taxonomy.add_term(reseed, None).await, AddTermOutcome::Unchanged);
        assert_eq!(taxonomy.get_term("react").unwrap().domain, "web");
    }

    #[tokio::test]
    async fn test_reobserved_term_is_merged() {
        let mut taxonomy = taxonomy();
        let first = TaxonomyTerm::new("tokio", "programming", "tool", 0.6, TermSource::Learned);
        let second = TaxonomyTerm::new("tokio", "programming", "tool", 0.8, TermSource::Learned);

        let web = LearningContext::new("post", ContentType::Article, Platform::Web);
        assert_eq!(taxonomy.add_term(first, Some(&web)).await, AddTermOutcome::Inserted);
        assert_eq!(
            taxonomy.add_term(second, Some(&code_context())).await,
            AddTermOutcome::Merged
        );

        let stored = taxonomy.get_term("tokio").unwrap();
        assert_eq!(stored.frequency, 2);
        assert_eq!(stored.confidence, 0.8);
        assert_eq!(stored.contexts, vec!["post", "repo/readme"]);
        assert_eq!(stored.platform_usage.get("web"), Some(&1));
        assert_eq!(stored.platform_usage.get("github"), Some(&1));
    }

    #[tokio::test]
    async fn test_validation_promotes_learned_term() {
        let mut taxonomy = taxonomy();
        let validator = MockValidator::new(true);
        taxonomy.register_validator(validator.clone());

        let term = TaxonomyTerm::new("tokio", "programming", "tool", 0.6, TermSource::Learned);
        taxonomy.add_term(term, Some(&code_context())).await;

        let stored = taxonomy.get_term("tokio").unwrap();
        assert_eq!(stored.source, TermSource::Validated);
        assert!((stored.confidence - 0.8).abs() < 1e-9);
        assert_eq!(validator.call_count(), 1);
        assert_eq!(taxonomy.get_metrics().validated_terms, 1);
    }

    #[tokio::test]
    async fn test_validation_boost_is_capped() {
        let mut taxonomy = taxonomy();
        taxonomy.register_validator(MockValidator::new(true));

        let term = TaxonomyTerm::new("tokio", "programming", "tool", 0.9, TermSource::Learned);
        taxonomy.add_term(term, Some(&code_context())).await;
        assert_eq!(taxonomy.get_term("tokio").unwrap().confidence, 1.0);
    }

    #[tokio::test]
    async fn test_learned_confidence_is_capped() {
        let mut taxonomy = taxonomy();
        let term = TaxonomyTerm::new("tokio", "programming", "tool", 1.0, TermSource::Learned);
        taxonomy.add_term(term, None).await;

        let stored = taxonomy.get_term("tokio").unwrap();
        assert_eq!(stored.source, TermSource::Learned);
        assert_eq!(stored.confidence, 0.95);

        let validated = TaxonomyTerm::new("axum", "web", "framework", 1.0, TermSource::Validated);
        taxonomy.add_term(validated, None).await;
        assert_eq!(taxonomy.get_term("axum").unwrap().confidence, 1.0);
    }

    #[tokio::test]
    async fn test_import_keeps_observation_history() {
        let mut source = taxonomy();
        let context = LearningContext::new("repo", ContentType::Code, Platform::GitHub);
        let term = TaxonomyTerm::new("tokio", "programming", "tool", 0.6, TermSource::Learned);
        source.add_term(term, Some(&context)).await;

        let mut restored = taxonomy();
        assert_eq!(restored.import_taxonomy(source.export_taxonomy()).await, 1);

        let stored = restored.get_term("tokio").unwrap();
        assert_eq!(stored.contexts, vec!["repo"]);
        assert_eq!(stored.platform_usage.len(), 1);
        assert_eq!(stored.platform_usage.get("github"), Some(&1));
        assert_eq!(stored.frequency, 1);
    }

    #[tokio::test]
    async fn test_no_validation_without_context_or_when_disabled() {
        let mut taxonomy = taxonomy();
        let validator = MockValidator::new(true);
        taxonomy.register_validator(validator.clone());

        let term = TaxonomyTerm::new("tokio", "programming", "tool", 0.6, TermSource::Learned);
        taxonomy.add_term(term, None).await;
        assert_eq!(taxonomy.get_term("tokio").unwrap().source, TermSource::Learned);

        taxonomy
            .update_config(TaxonomyConfigUpdate {
                enable_external_validation: Some(false),
                ..Default::default()
            })
            .unwrap();
        let term = TaxonomyTerm::new("axum", "web", "framework", 0.6, TermSource::Learned);
        taxonomy.add_term(term, Some(&code_context())).await;
        assert_eq!(taxonomy.get_term("axum").unwrap().source, TermSource::Learned);
        assert_eq!(validator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validate_term_without_validators() {
        let mut taxonomy = taxonomy();
        let result = taxonomy.validate_term("anything", "web").await;
        assert!(!result.is_valid);
        assert_eq!(result.source, "none");
        assert_eq!(taxonomy.get_metrics().validation_attempts, 0);
    }

    #[tokio::test]
    async fn test_first_positive_validator_wins() {
        let mut taxonomy = taxonomy();
        let mut failing = MockValidator::new(false).named("failing");
        failing.add_error("tokio");
        let rejecting = MockValidator::new(false).named("rejecting");
        let accepting = MockValidator::new(true).named("accepting");
        let never = MockValidator::new(true).named("never");

        taxonomy.register_validator(failing.clone());
        taxonomy.register_validator(rejecting.clone());
        taxonomy.register_validator(accepting.clone());
        taxonomy.register_validator(never.clone());

        let result = taxonomy.validate_term("tokio", "programming").await;
        assert!(result.is_valid);
        assert_eq!(result.source, "accepting");
        assert_eq!(failing.call_count(), 1);
        assert_eq!(rejecting.call_count(), 1);
        assert_eq!(never.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_validator_is_skipped() {
        let mut taxonomy = taxonomy();
        let offline = MockValidator::new(true).named("offline");
        offline.set_available(false);
        taxonomy.register_validator(offline.clone());

        let result = taxonomy.validate_term("tokio", "programming").await;
        assert_eq!(result.source, "none");
        assert_eq!(offline.call_count(), 0);
    }

    #[test]
    fn test_terms_for_domain_sorted() {
        let taxonomy = taxonomy();
        let terms = taxonomy.get_terms_for_domain("web");
        assert!(!terms.is_empty());
        assert!(terms.iter().all(|t| t.domain == "web"));
        assert!(taxonomy.get_terms_for_domain("missing").is_empty());
    }

    #[test]
    fn test_classify_content() {
        let taxonomy = taxonomy();
        let ranked = taxonomy.classify_content("React hooks with Vue and a Docker image");
        assert_eq!(ranked[0].0, "web");
        assert!((ranked[0].1 - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(ranked[1].0, "devops");

        let sum: f64 = ranked.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_ties_break_by_name() {
        let taxonomy = taxonomy();
        let ranked = taxonomy.classify_content("docker react");
        assert_eq!(ranked, vec![("devops".to_string(), 0.5), ("web".to_string(), 0.5)]);
    }

    #[test]
    fn test_add_domain() {
        let mut taxonomy = taxonomy();
        let mut domain = TaxonomyDomain::new("gamedev", "Game development");
        domain.keywords = vec!["shader".to_string()];
        taxonomy.add_domain(domain).unwrap();

        assert!(taxonomy.get_domains().iter().any(|d| d.name == "gamedev"));
        assert!(taxonomy.config().domains.iter().any(|d| d.name == "gamedev"));
        assert!(taxonomy.add_domain(TaxonomyDomain::new(" ", "")).is_err());
    }
}
