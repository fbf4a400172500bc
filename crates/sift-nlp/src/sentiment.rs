//! Lexicon-based sentiment scoring

use crate::Lexicon;

/// Sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// Sum of word scores
    pub score: i32,

    /// Score divided by token count (0.0 for empty input)
    pub comparative: f64,

    /// Number of tokens scored
    pub tokens: usize,
}

impl Sentiment {
    /// Score already-tokenized, lower-case text
    pub fn analyze(tokens: &[String], lexicon: &Lexicon) -> Self {
        if tokens.is_empty() {
            return Self::default();
        }

        let score: i32 = tokens.iter().map(|t| lexicon.sentiment_of(t)).sum();
        Self {
            score,
            comparative: score as f64 / tokens.len() as f64,
            tokens: tokens.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn test_positive_text() {
        let lexicon = Lexicon::default();
        let sentiment = Sentiment::analyze(&tokenize("A great and easy guide"), &lexicon);
        assert_eq!(sentiment.score, 5);
        assert!((sentiment.comparative - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_text() {
        let lexicon = Lexicon::default();
        let sentiment = Sentiment::analyze(&tokenize("terrible, slow and wrong"), &lexicon);
        assert_eq!(sentiment.score, -7);
        assert!(sentiment.comparative < 0.0);
    }

    #[test]
    fn test_empty_text() {
        let sentiment = Sentiment::analyze(&[], &Lexicon::default());
        assert_eq!(sentiment, Sentiment::default());
    }
}
