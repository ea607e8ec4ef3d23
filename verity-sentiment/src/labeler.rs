//! Threshold classification with crisis override
//!
//! Two-stage decision, order matters:
//! 1. Threshold on the polarity score: > 0.1 Positive, < -0.1 Negative,
//!    otherwise Neutral (boundaries are Neutral).
//! 2. Crisis override: a lexicon match forces Negative unconditionally,
//!    even over a Positive base label. There is no reverse override.
//!
//! Stateless: each call is independent, and identical inputs always yield
//! the same label.

use verity_core::SentimentLabel;

use crate::lexicon::{CrisisMatcher, SubstringMatcher};

/// Score above which the base label is Positive (strict inequality)
const POSITIVE_THRESHOLD: f64 = 0.1;
/// Score below which the base label is Negative (strict inequality)
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment labeler with a pluggable crisis matcher.
pub struct SentimentLabeler {
    matcher: Box<dyn CrisisMatcher>,
}

impl SentimentLabeler {
    /// Labeler with the default substring crisis matcher.
    pub fn new() -> Self {
        Self::with_matcher(Box::new(SubstringMatcher))
    }

    /// Labeler with a custom crisis-detection strategy.
    pub fn with_matcher(matcher: Box<dyn CrisisMatcher>) -> Self {
        Self { matcher }
    }

    /// Classify a (score, text) pair.
    pub fn label(&self, score: f64, text: &str) -> SentimentLabel {
        let base = if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        if self.matcher.matches(text) {
            return SentimentLabel::Negative;
        }

        base
    }
}

impl Default for SentimentLabeler {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default substring matcher.
pub fn label(score: f64, text: &str) -> SentimentLabel {
    SentimentLabeler::new().label(score, text)
}
