//! Scoring weights and the six relevance factors

/// Clamp a value into [0, 1]
///
/// Non-finite input (NaN) collapses to 0.0 so that a single bad sub-score
/// can never poison a weighted total.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The six relevance factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Query terms found in the title
    TitleMatch,
    /// Query terms found in the body
    ContentMatch,
    /// Prior trust in the source tag
    SourceReliability,
    /// Age of the content
    Recency,
    /// Views, votes or comments
    Popularity,
    /// Structural and linguistic quality signals
    ContentQuality,
}

impl Factor {
    /// All factors, in weighting order
    pub const ALL: [Factor; 6] = [
        Factor::TitleMatch,
        Factor::ContentMatch,
        Factor::SourceReliability,
        Factor::Recency,
        Factor::Popularity,
        Factor::ContentQuality,
    ];

    /// Get the factor name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::TitleMatch => "title_match",
            Factor::ContentMatch => "content_match",
            Factor::SourceReliability => "source_reliability",
            Factor::Recency => "recency",
            Factor::Popularity => "popularity",
            Factor::ContentQuality => "content_quality",
        }
    }
}

/// Coefficients applied to each factor
///
/// The weights are not required to sum to 1; the combined score is clamped
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of [`Factor::TitleMatch`]
    pub title_match: f64,
    /// Weight of [`Factor::ContentMatch`]
    pub content_match: f64,
    /// Weight of [`Factor::SourceReliability`]
    pub source_reliability: f64,
    /// Weight of [`Factor::Recency`]
    pub recency: f64,
    /// Weight of [`Factor::Popularity`]
    pub popularity: f64,
    /// Weight of [`Factor::ContentQuality`]
    pub content_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_match: 0.30,
            content_match: 0.25,
            source_reliability: 0.15,
            recency: 0.10,
            popularity: 0.10,
            content_quality: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Get the weight for a factor
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TitleMatch => self.title_match,
            Factor::ContentMatch => self.content_match,
            Factor::SourceReliability => self.source_reliability,
            Factor::Recency => self.recency,
            Factor::Popularity => self.popularity,
            Factor::ContentQuality => self.content_quality,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Whether every weight is finite and non-negative
    pub fn is_valid(&self) -> bool {
        Factor::ALL
            .iter()
            .map(|f| self.get(*f))
            .all(|w| w.is_finite() && w >= 0.0)
    }
}

/// The six computed sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelevanceFactors {
    /// Title match sub-score
    pub title_match: f64,
    /// Content match sub-score
    pub content_match: f64,
    /// Source reliability sub-score
    pub source_reliability: f64,
    /// Recency sub-score
    pub recency: f64,
    /// Popularity sub-score
    pub popularity: f64,
    /// Content quality sub-score
    pub content_quality: f64,
}

impl RelevanceFactors {
    /// Get the sub-score for a factor
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TitleMatch => self.title_match,
            Factor::ContentMatch => self.content_match,
            Factor::SourceReliability => self.source_reliability,
            Factor::Recency => self.recency,
            Factor::Popularity => self.popularity,
            Factor::ContentQuality => self.content_quality,
        }
    }

    /// Weighted sum of the sub-scores (not clamped)
    pub fn weighted_sum(&self, weights: &ScoringWeights) -> f64 {
        Factor::ALL
            .iter()
            .map(|f| self.get(*f) * weights.get(*f))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(weights.is_valid());
    }

    #[test]
    fn test_invalid_weights() {
        let weights = ScoringWeights {
            recency: -0.1,
            ..Default::default()
        };
        assert!(!weights.is_valid());

        let weights = ScoringWeights {
            popularity: f64::NAN,
            ..Default::default()
        };
        assert!(!weights.is_valid());
    }

    #[test]
    fn test_weighted_sum() {
        let factors = RelevanceFactors {
            title_match: 1.0,
            content_match: 1.0,
            ..Default::default()
        };
        let sum = factors.weighted_sum(&ScoringWeights::default());
        assert!((sum - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_unit_nan() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(0.42), 0.42);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: clamp_unit always lands in [0, 1]
        #[test]
        fn test_clamp_unit_bounded(value in proptest::num::f64::ANY) {
            let clamped = clamp_unit(value);
            prop_assert!((0.0..=1.0).contains(&clamped));
        }
    }
}
