//! Configuration for the RelevanceScorer

use crate::RelevanceError;
use serde::{Deserialize, Serialize};
use sift_domain::{ContentSource, ScoringWeights};

/// Factor weights as they appear in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Title match weight
    pub title_match: f64,
    /// Content match weight
    pub content_match: f64,
    /// Source reliability weight
    pub source_reliability: f64,
    /// Recency weight
    pub recency: f64,
    /// Popularity weight
    pub popularity: f64,
    /// Content quality weight
    pub content_quality: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        ScoringWeights::default().into()
    }
}

impl From<ScoringWeights> for WeightsConfig {
    fn from(w: ScoringWeights) -> Self {
        Self {
            title_match: w.title_match,
            content_match: w.content_match,
            source_reliability: w.source_reliability,
            recency: w.recency,
            popularity: w.popularity,
            content_quality: w.content_quality,
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(w: WeightsConfig) -> Self {
        Self {
            title_match: w.title_match,
            content_match: w.content_match,
            source_reliability: w.source_reliability,
            recency: w.recency,
            popularity: w.popularity,
            content_quality: w.content_quality,
        }
    }
}

/// Prior reliability per source tag, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePriors {
    /// Official documentation
    pub documentation: f64,
    /// Academic publications
    pub academic: f64,
    /// GitHub
    pub github: f64,
    /// Stack Overflow
    pub stackoverflow: f64,
    /// Tutorials
    pub tutorial: f64,
    /// Local files
    pub local: f64,
    /// Blogs
    pub blog: f64,
    /// Video platforms
    pub video: f64,
    /// Forums
    pub forum: f64,
    /// Generic web
    pub web: f64,
}

impl Default for SourcePriors {
    fn default() -> Self {
        Self {
            documentation: 0.95,
            academic: 0.90,
            github: 0.85,
            stackoverflow: 0.80,
            tutorial: 0.75,
            local: 0.70,
            blog: 0.65,
            video: 0.60,
            forum: 0.55,
            web: 0.50,
        }
    }
}

impl SourcePriors {
    /// Prior for a source tag
    pub fn prior(&self, source: ContentSource) -> f64 {
        match source {
            ContentSource::Documentation => self.documentation,
            ContentSource::Academic => self.academic,
            ContentSource::GitHub => self.github,
            ContentSource::StackOverflow => self.stackoverflow,
            ContentSource::Tutorial => self.tutorial,
            ContentSource::Local => self.local,
            ContentSource::Blog => self.blog,
            ContentSource::Video => self.video,
            ContentSource::Forum => self.forum,
            ContentSource::Web => self.web,
        }
    }
}

/// Configuration for the RelevanceScorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Multiplier applied to the prior of a caller-preferred source
    pub preferred_source_multiplier: f64,

    /// Score returned when the weighted combination fails
    pub degraded_score: f64,

    /// Comparative sentiment above which content counts as clearly positive
    pub positive_sentiment_threshold: f64,

    /// Comparative sentiment below which content counts as strongly negative
    pub negative_sentiment_threshold: f64,

    /// Default factor weights
    pub weights: WeightsConfig,

    /// Prior reliability per source tag
    pub source_priors: SourcePriors,
}

impl Default for ScorerConfig {
    /// Default configuration with balanced weights
    fn default() -> Self {
        Self {
            preferred_source_multiplier: 1.2,
            degraded_score: 0.1,
            positive_sentiment_threshold: 0.05,
            negative_sentiment_threshold: -0.1,
            weights: WeightsConfig::default(),
            source_priors: SourcePriors::default(),
        }
    }
}

impl ScorerConfig {
    /// Default weights as domain weights
    pub fn default_weights(&self) -> ScoringWeights {
        self.weights.into()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), RelevanceError> {
        if !self.default_weights().is_valid() {
            return Err(RelevanceError::Config(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        for source in ContentSource::ALL {
            let prior = self.source_priors.prior(source);
            if !(0.0..=1.0).contains(&prior) {
                return Err(RelevanceError::Config(format!(
                    "source prior for {} must be in [0, 1], got {}",
                    source, prior
                )));
            }
        }
        if !self.preferred_source_multiplier.is_finite() || self.preferred_source_multiplier < 1.0 {
            return Err(RelevanceError::Config(
                "preferred_source_multiplier must be finite and >= 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.degraded_score) {
            return Err(RelevanceError::Config(
                "degraded_score must be in [0, 1]".to_string(),
            ));
        }
        if self.negative_sentiment_threshold >= self.positive_sentiment_threshold {
            return Err(RelevanceError::Config(
                "negative_sentiment_threshold must be below positive_sentiment_threshold"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, RelevanceError> {
        toml::from_str(toml_str)
            .map_err(|e| RelevanceError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, RelevanceError> {
        toml::to_string_pretty(self)
            .map_err(|e| RelevanceError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
