//! Core types for the Verity news sentiment service
//!
//! This crate defines the shared data structures used across the service:
//! article records, sentiment labels, analysis reports, the workspace-wide
//! error type, and the process configuration object.

pub mod article;
pub mod config;
pub mod error;
pub mod report;
pub mod sentiment;

pub use article::Article;
pub use config::VerityConfig;
pub use error::{VerityError, VerityResult};
pub use report::{AnalysisReport, AnalyzedArticle, ArticleDetail, PolarityPoint};
pub use sentiment::{SentimentCounts, SentimentLabel};
