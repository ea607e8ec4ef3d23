//! Aggregation & summary driver
//!
//! Sequences one analysis run: fetch from both sources, label each article
//! exactly once, summarize each article, aggregate label counts and
//! polarity points for the charts, and generate the batch narrative. The
//! run never fails: source errors degrade to empty lists and LLM errors
//! degrade to fixed placeholder strings.

use std::time::Duration;

use tracing::{info, instrument, warn};

use verity_core::{
    AnalysisReport, AnalyzedArticle, Article, ArticleDetail, PolarityPoint, SentimentCounts,
    VerityConfig,
};
use verity_llm::GroqClient;
use verity_news::{NewsApiClient, PolygonClient};
use verity_sentiment::{PolarityScorer, SentimentLabeler};

use crate::throttle::Throttle;

/// Substituted when a per-article summary call fails
const SUMMARY_PLACEHOLDER: &str = "(Summary not available due to rate limit or API error.)";

/// Substituted when the batch narrative call fails
const NARRATIVE_PLACEHOLDER: &str = "(Unable to generate summary due to rate limit or API error.)";

/// Configuration for the analysis driver
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Articles ingested from each source at most
    pub per_source_cap: usize,
    /// Articles rendered in detail at most
    pub detail_cap: usize,
    /// Minimum spacing between summarization calls
    pub summary_interval: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            per_source_cap: 15,
            detail_cap: 7,
            summary_interval: Duration::from_millis(700),
        }
    }
}

/// Drives one analysis run end to end.
pub struct NewsAnalyzer {
    newsapi: NewsApiClient,
    polygon: PolygonClient,
    groq: GroqClient,
    scorer: PolarityScorer,
    labeler: SentimentLabeler,
    throttle: Throttle,
    config: AnalyzerConfig,
}

impl NewsAnalyzer {
    /// Build the analyzer and its clients from the process configuration.
    pub fn new(config: &VerityConfig) -> Self {
        Self::with_config(config, AnalyzerConfig::default())
    }

    pub fn with_config(config: &VerityConfig, analyzer_config: AnalyzerConfig) -> Self {
        Self {
            newsapi: NewsApiClient::new(config.news_api_key.clone()),
            polygon: PolygonClient::new(config.polygon_api_key.clone()),
            groq: GroqClient::new(config.groq_api_key.clone(), config.groq_model.clone()),
            scorer: PolarityScorer::new(),
            labeler: SentimentLabeler::new(),
            throttle: Throttle::new(analyzer_config.summary_interval),
            config: analyzer_config,
        }
    }

    /// Run one analysis for a topic over a lookback window in days.
    ///
    /// Never fails: every external-call failure degrades locally and the
    /// run completes with whatever the collaborators yielded.
    #[instrument(skip(self))]
    pub async fn analyze(&self, topic: &str, days: u32) -> AnalysisReport {
        let newsapi_articles = match self.newsapi.fetch_articles(topic, days).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("NewsAPI fetch failed, continuing without it: {}", e);
                Vec::new()
            }
        };

        let polygon_articles = match self.polygon.fetch_articles(topic, days).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Polygon fetch failed, continuing without it: {}", e);
                Vec::new()
            }
        };

        let articles =
            combine_sources(newsapi_articles, polygon_articles, self.config.per_source_cap);
        info!("Ingested {} articles for topic '{}'", articles.len(), topic);

        let mut analyzed = Vec::with_capacity(articles.len());
        for article in articles {
            analyzed.push(self.analyze_article(article).await);
        }

        let narrative = self.narrative(&analyzed).await;

        build_report(topic, analyzed, narrative, self.config.detail_cap)
    }

    /// Score, label and summarize one article. The label is computed once
    /// here and reused for both display and aggregation.
    async fn analyze_article(&self, article: Article) -> AnalyzedArticle {
        let full_text = article.full_text();
        let polarity = self.scorer.score(&full_text);
        let label = self.labeler.label(polarity, &full_text);

        self.throttle.acquire().await;
        let summary = match self.groq.summarize(&full_text).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary failed for '{}': {}", article.title, e);
                SUMMARY_PLACEHOLDER.to_string()
            }
        };

        AnalyzedArticle {
            article,
            polarity,
            label,
            summary,
        }
    }

    /// Generate the batch fake-news + wellness narrative.
    async fn narrative(&self, analyzed: &[AnalyzedArticle]) -> String {
        let headlines = analyzed
            .iter()
            .map(|a| a.article.title.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        match self.groq.fact_check(&headlines).await {
            // Some models echo a heading; drop it
            Ok(response) => response.replace("**Analysis:**", "").trim().to_string(),
            Err(e) => {
                warn!("Narrative generation failed: {}", e);
                NARRATIVE_PLACEHOLDER.to_string()
            }
        }
    }
}

/// Combine the two source lists in fetch order, ingesting at most `cap`
/// articles from each. An empty list from a failed source simply
/// contributes nothing.
fn combine_sources(newsapi: Vec<Article>, polygon: Vec<Article>, cap: usize) -> Vec<Article> {
    newsapi
        .into_iter()
        .take(cap)
        .chain(polygon.into_iter().take(cap))
        .collect()
}

/// Assemble the report from analyzed articles.
///
/// Only the first `detail_cap` articles get detailed rows; every ingested
/// article contributes one polarity point and one label count.
fn build_report(
    topic: &str,
    analyzed: Vec<AnalyzedArticle>,
    narrative: String,
    detail_cap: usize,
) -> AnalysisReport {
    let details: Vec<ArticleDetail> = analyzed.iter().take(detail_cap).map(Into::into).collect();

    let mut counts = SentimentCounts::default();
    let polarity_series: Vec<PolarityPoint> = analyzed
        .iter()
        .enumerate()
        .map(|(index, a)| {
            counts.record(a.label);
            PolarityPoint {
                index,
                polarity: a.polarity,
            }
        })
        .collect();

    AnalysisReport {
        topic: topic.to_string(),
        total_articles: analyzed.len(),
        details,
        polarity_series,
        counts,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::SentimentLabel;

    fn article(n: usize) -> Article {
        Article::new(
            format!("Headline {}", n),
            format!("Description {}", n),
            format!("https://example.com/{}", n),
        )
    }

    fn analyzed(n: usize, polarity: f64, label: SentimentLabel) -> AnalyzedArticle {
        AnalyzedArticle {
            article: article(n),
            polarity,
            label,
            summary: format!("Summary {}", n),
        }
    }

    #[test]
    fn test_combine_sources_caps_each_side() {
        let a: Vec<Article> = (0..20).map(article).collect();
        let b: Vec<Article> = (20..40).map(article).collect();

        let combined = combine_sources(a, b, 15);
        assert_eq!(combined.len(), 30);
        // source A first, then source B
        assert_eq!(combined[0].title, "Headline 0");
        assert_eq!(combined[15].title, "Headline 20");
    }

    #[test]
    fn test_combine_sources_with_one_failed_source() {
        let b: Vec<Article> = (0..4).map(article).collect();

        let combined = combine_sources(Vec::new(), b, 15);
        assert_eq!(combined.len(), 4);

        let combined = combine_sources(Vec::new(), Vec::new(), 15);
        assert!(combined.is_empty());
    }

    #[test]
    fn test_display_cap_and_full_aggregates() {
        // 22 combined articles: 7 detailed, all 22 in series and counts
        let analyzed: Vec<AnalyzedArticle> = (0..22)
            .map(|n| analyzed(n, 0.0, SentimentLabel::Neutral))
            .collect();

        let report = build_report("topic", analyzed, "narrative".to_string(), 7);
        assert_eq!(report.details.len(), 7);
        assert_eq!(report.polarity_series.len(), 22);
        assert_eq!(report.counts.total(), 22);
        assert_eq!(report.total_articles, 22);
    }

    #[test]
    fn test_counts_sum_to_article_total() {
        let analyzed = vec![
            analyzed(0, 0.5, SentimentLabel::Positive),
            analyzed(1, 0.0, SentimentLabel::Neutral),
            analyzed(2, -0.4, SentimentLabel::Negative),
            analyzed(3, 0.9, SentimentLabel::Negative),
            analyzed(4, 0.2, SentimentLabel::Positive),
        ];

        let report = build_report("topic", analyzed, String::new(), 7);
        assert_eq!(report.counts.positive, 2);
        assert_eq!(report.counts.neutral, 1);
        assert_eq!(report.counts.negative, 2);
        assert_eq!(report.counts.total(), report.total_articles);
    }

    #[test]
    fn test_polarity_series_preserves_ingest_order() {
        let analyzed = vec![
            analyzed(0, 0.3, SentimentLabel::Positive),
            analyzed(1, -0.7, SentimentLabel::Negative),
        ];

        let report = build_report("topic", analyzed, String::new(), 7);
        assert_eq!(report.polarity_series[0].index, 0);
        assert_eq!(report.polarity_series[0].polarity, 0.3);
        assert_eq!(report.polarity_series[1].index, 1);
        assert_eq!(report.polarity_series[1].polarity, -0.7);
    }

    #[test]
    fn test_empty_run_builds_empty_report() {
        let report = build_report("topic", Vec::new(), NARRATIVE_PLACEHOLDER.to_string(), 7);
        assert!(report.details.is_empty());
        assert!(report.polarity_series.is_empty());
        assert_eq!(report.counts.total(), 0);
        assert_eq!(report.narrative, NARRATIVE_PLACEHOLDER);
    }

    #[test]
    fn test_detail_rows_reuse_stored_label() {
        let analyzed = vec![analyzed(0, 0.9, SentimentLabel::Negative)];
        let report = build_report("topic", analyzed, String::new(), 7);
        assert_eq!(report.details[0].label, SentimentLabel::Negative);
        assert_eq!(report.details[0].headline, "Headline 0");
        assert_eq!(report.details[0].link, "https://example.com/0");
    }
}
