//! Sentiment classification for news articles
//!
//! The pipeline has three pieces:
//! - [`PolarityScorer`]: continuous polarity score in [-1, 1] from raw text
//! - [`lexicon::matches_crisis`]: crisis-vocabulary substring matching
//! - [`SentimentLabeler`]: threshold classification plus crisis override
//!
//! Labeling is a pure function of (score, text) and the fixed lexicon:
//! identical inputs always yield identical labels, and no component here
//! ever fails.

pub mod labeler;
pub mod lexicon;
pub mod scorer;

pub use labeler::{label, SentimentLabeler};
pub use lexicon::{matches_crisis, CrisisMatcher, SubstringMatcher, CRISIS_KEYWORDS};
pub use scorer::PolarityScorer;
