//! News source clients
//!
//! This crate provides clients for fetching recent articles from:
//! - NewsAPI.org: keyword search over general news (source A)
//! - Polygon.io: ticker-style news reference endpoint (source B)
//!
//! Both clients are best-effort at the call site above them: they return a
//! `Result`, and the driver decides to degrade failures to an empty list.

pub mod error;
pub mod newsapi;
pub mod polygon;
pub mod types;

pub use error::NewsError;
pub use newsapi::NewsApiClient;
pub use polygon::PolygonClient;
