//! Sentiment label and aggregate count types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way sentiment classification of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        };
        write!(f, "{}", s)
    }
}

/// Per-label article counts for the distribution chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Record one labeled article. Every article contributes exactly one
    /// count, so `total()` always equals the number of recorded articles.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_matching_bucket() {
        let mut counts = SentimentCounts::default();
        counts.record(SentimentLabel::Positive);
        counts.record(SentimentLabel::Negative);
        counts.record(SentimentLabel::Negative);
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.neutral, 0);
        assert_eq!(counts.negative, 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
