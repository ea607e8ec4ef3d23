//! Article records fetched from the news providers

use serde::{Deserialize, Serialize};

/// A news article as normalized from either provider.
///
/// All fields may be empty: both providers return nullable title,
/// description and link fields, and the clients normalize `null` to the
/// empty string. Articles are immutable once fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    pub title: String,
    /// Short description or excerpt
    pub description: String,
    /// Link to the full article
    pub url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Combined text used for scoring and summarization.
    ///
    /// Derived as `"{title} {description}"`; recomputed wherever needed
    /// rather than stored.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_joins_title_and_description() {
        let article = Article::new("Title", "Description", "https://example.com");
        assert_eq!(article.full_text(), "Title Description");
    }

    #[test]
    fn test_full_text_with_empty_fields() {
        let article = Article::default();
        assert_eq!(article.full_text(), " ");
    }
}
