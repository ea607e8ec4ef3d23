//! Wire types for the two news providers
//!
//! Both providers return nullable fields; the clients normalize `null` to
//! empty strings when converting to [`verity_core::Article`].

use serde::Deserialize;

use verity_core::Article;

// ============================================================================
// NewsAPI.org Types
// ============================================================================

/// NewsAPI.org `/v2/everything` response
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// Matching articles, most recent first
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// A single NewsAPI.org article
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl From<NewsApiArticle> for Article {
    fn from(raw: NewsApiArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Polygon.io Types
// ============================================================================

/// Polygon.io `/v2/reference/news` response
#[derive(Debug, Deserialize)]
pub struct PolygonNewsResponse {
    /// Matching articles, most recent first
    #[serde(default)]
    pub results: Vec<PolygonArticle>,
}

/// A single Polygon.io article
///
/// Polygon names the article link `article_url`; conversion normalizes it
/// to the common `url` field.
#[derive(Debug, Deserialize)]
pub struct PolygonArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub article_url: Option<String>,
}

impl From<PolygonArticle> for Article {
    fn from(raw: PolygonArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.article_url.unwrap_or_default(),
        }
    }
}
