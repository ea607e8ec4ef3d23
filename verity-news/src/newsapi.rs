//! NewsAPI.org client (source A)

use chrono::{Duration, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use verity_core::Article;

use crate::error::NewsError;
use crate::types::NewsApiResponse;

/// Articles requested per fetch
const PAGE_SIZE: usize = 30;

/// NewsAPI.org API client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI.org client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://newsapi.org/v2".to_string(),
        }
    }

    /// Fetch English articles matching `topic` published within the last
    /// `days` days, most recent first.
    #[instrument(skip(self))]
    pub async fn fetch_articles(&self, topic: &str, days: u32) -> Result<Vec<Article>, NewsError> {
        let from_date = (Utc::now() - Duration::days(days as i64))
            .format("%Y-%m-%d")
            .to_string();
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", topic),
                ("from", from_date.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
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

        let news_response: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        let articles: Vec<Article> = news_response
            .articles
            .into_iter()
            .map(Article::from)
            .collect();

        info!("Received {} articles from NewsAPI", articles.len());

        Ok(articles)
    }
}
