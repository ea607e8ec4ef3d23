//! Process configuration
//!
//! All credentials and tunables are read once at startup into an explicit
//! configuration object and passed into the clients that need them. Nothing
//! reads the environment after startup.

use crate::error::{VerityError, VerityResult};

/// Default Groq model, overridable via `GROQ_MODEL`
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration assembled from environment variables at process start.
#[derive(Debug, Clone)]
pub struct VerityConfig {
    /// NewsAPI.org API key
    pub news_api_key: String,
    /// Polygon.io API key
    pub polygon_api_key: String,
    /// Groq API key
    pub groq_api_key: String,
    /// Groq chat model (single source of truth for both LLM calls)
    pub groq_model: String,
    /// HTTP server port
    pub server_port: u16,
}

impl VerityConfig {
    /// Read configuration from the environment.
    ///
    /// The three API keys are required; missing keys fail process startup
    /// rather than individual requests.
    pub fn from_env() -> VerityResult<Self> {
        Ok(Self {
            news_api_key: require_env("NEWS_API_KEY")?,
            polygon_api_key: require_env("POLYGON_API_KEY")?,
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        })
    }
}

fn require_env(key: &str) -> VerityResult<String> {
    std::env::var(key)
        .map_err(|_| VerityError::config(format!("{} is not set", key)))
}
