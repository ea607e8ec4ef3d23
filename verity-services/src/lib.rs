//! Business logic for the Verity service
//!
//! The [`NewsAnalyzer`] drives one analysis run end to end: fetch from both
//! news sources, label each article once, summarize it, and assemble the
//! report the dashboard renders. The [`Throttle`] spaces out summarization
//! calls to stay under the LLM provider's rate limit.

pub mod analyzer;
pub mod throttle;

pub use analyzer::{AnalyzerConfig, NewsAnalyzer};
pub use throttle::Throttle;
