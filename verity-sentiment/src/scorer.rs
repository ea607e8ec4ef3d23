//! Polarity scoring via the VADER lexicon
//!
//! The scorer is a thin contract over `vader_sentiment`: the actual scoring
//! algorithm is the library's concern. This module only guarantees the
//! interface: a score in [-1.0, 1.0], rounded to 7 decimal places, 0.0 for
//! empty input, never failing.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon-based polarity scorer.
///
/// Read-only after construction; one instance can serve every run.
pub struct PolarityScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score arbitrary text.
    ///
    /// More positive = more favorable sentiment; 0.0 for neutral or
    /// maximally ambiguous text. Whitespace-only input returns 0.0.
    pub fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);

        round7(compound.clamp(-1.0, 1.0))
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 7 decimal places for determinism and display stability.
fn round7(value: f64) -> f64 {
    (value * 1e7).round() / 1e7
}
