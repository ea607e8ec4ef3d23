//! Analysis report structures returned to the dashboard

use serde::{Deserialize, Serialize};

use crate::{Article, SentimentCounts, SentimentLabel};

/// An article with its sentiment analysis attached.
///
/// The label is computed exactly once per article and reused for both the
/// detailed rows and the aggregate counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    pub article: Article,
    /// Polarity score in [-1.0, 1.0], rounded to 7 decimal places
    pub polarity: f64,
    pub label: SentimentLabel,
    /// LLM summary, or the fixed placeholder when the call failed
    pub summary: String,
}

/// One detailed row for direct display (capped at a handful per run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub headline: String,
    pub label: SentimentLabel,
    pub summary: String,
    pub link: String,
}

impl From<&AnalyzedArticle> for ArticleDetail {
    fn from(analyzed: &AnalyzedArticle) -> Self {
        Self {
            headline: analyzed.article.title.clone(),
            label: analyzed.label,
            summary: analyzed.summary.clone(),
            link: analyzed.article.url.clone(),
        }
    }
}

/// One point of the polarity bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityPoint {
    /// Article index in ingest order
    pub index: usize,
    pub polarity: f64,
}

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Topic the run was executed for
    pub topic: String,
    /// Detailed rows for display (at most the display cap)
    pub details: Vec<ArticleDetail>,
    /// (index, polarity) for every ingested article
    pub polarity_series: Vec<PolarityPoint>,
    /// Per-label counts over every ingested article
    pub counts: SentimentCounts,
    /// Fake-news check and wellness narrative for the whole batch
    pub narrative: String,
    /// Total number of ingested articles across both sources
    pub total_articles: usize,
}
