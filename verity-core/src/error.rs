//! Error types for the service

use thiserror::Error;

/// Service-wide error type
#[derive(Error, Debug)]
pub enum VerityError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VerityError {
    pub fn api(msg: impl Into<String>) -> Self {
        VerityError::Api(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        VerityError::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        VerityError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        VerityError::Internal(msg.into())
    }
}

/// Result type alias for service operations
pub type VerityResult<T> = Result<T, VerityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors_format_message() {
        assert_eq!(
            VerityError::api("Groq API error").to_string(),
            "API error: Groq API error"
        );
        assert_eq!(
            VerityError::parse("No response").to_string(),
            "Parse error: No response"
        );
        assert_eq!(
            VerityError::config("NEWS_API_KEY is not set").to_string(),
            "Configuration error: NEWS_API_KEY is not set"
        );
        assert_eq!(
            VerityError::internal("builder failed").to_string(),
            "Internal error: builder failed"
        );
    }
}
