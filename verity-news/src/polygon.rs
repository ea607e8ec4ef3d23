//! Polygon.io news client (source B)

use chrono::{Duration, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use verity_core::Article;

use crate::error::NewsError;
use crate::types::PolygonNewsResponse;

/// Articles requested per fetch
const RESULT_LIMIT: usize = 50;

/// Polygon.io news API client
pub struct PolygonClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PolygonClient {
    /// Create a new Polygon.io client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.polygon.io/v2".to_string(),
        }
    }

    /// Fetch articles for `topic` (used as a ticker-style token, uppercased)
    /// published within the last `days` days, most recent first.
    #[instrument(skip(self))]
    pub async fn fetch_articles(&self, topic: &str, days: u32) -> Result<Vec<Article>, NewsError> {
        let start_date = (Utc::now() - Duration::days(days as i64))
            .format("%Y-%m-%d")
            .to_string();
        let ticker = topic.to_uppercase();
        let limit = RESULT_LIMIT.to_string();

        let response = self
            .client
            .get(format!("{}/reference/news", self.base_url))
            .query(&[
                ("ticker", ticker.as_str()),
                ("published_utc.gte", start_date.as_str()),
                ("sort", "published_utc"),
                ("order", "desc"),
                ("limit", limit.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let news_response: PolygonNewsResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        let articles: Vec<Article> = news_response
            .results
            .into_iter()
            .map(Article::from)
            .collect();

        info!("Received {} articles from Polygon", articles.len());

        Ok(articles)
    }
}
