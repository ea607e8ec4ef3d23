//! Groq API client (OpenAI-compatible chat completions)

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use tracing::instrument;

use verity_core::VerityError;

/// Groq's OpenAI-compatible endpoint
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Prompt for the batch fake-news check and wellness narrative
const FACT_CHECK_PROMPT: &str = "\
You are an AI truth checker and wellness advisor. Analyze the following news headlines.
- Detect any that seem fake or manipulative.
- Summarize the overall trend.
- Provide mental wellness tips if sentiment is negative.

News:
";

/// Groq chat client
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqClient {
    /// Create a client for the given API key and chat model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.into())
            .with_api_base(GROQ_API_BASE);

        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    /// Summarize one article's text in a short paragraph.
    #[instrument(skip(self, full_text))]
    pub async fn summarize(&self, full_text: &str) -> Result<String, VerityError> {
        let prompt = format!("Summarize this news in one short paragraph: {}", full_text);
        self.chat(&prompt).await
    }

    /// Run the fake-news check and wellness narrative over the batch of
    /// newline-joined headlines.
    #[instrument(skip(self, headlines))]
    pub async fn fact_check(&self, headlines: &str) -> Result<String, VerityError> {
        let prompt = format!("{}{}", FACT_CHECK_PROMPT, headlines);
        self.chat(&prompt).await
    }

    /// Send a single user message and return the trimmed response text.
    async fn chat(&self, prompt: &str) -> Result<String, VerityError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| VerityError::internal(e.to_string()))?
                .into()])
            .build()
            .map_err(|e| VerityError::internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| VerityError::api(format!("Groq API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| VerityError::parse("No response from Groq"))?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builds() {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content("Summarize this news in one short paragraph: test")
            .build()
            .unwrap();
        let request = CreateChatCompletionRequestArgs::default()
            .model("llama-3.1-8b-instant")
            .messages([message.into()])
            .build()
            .unwrap();
        assert_eq!(request.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_client_points_at_groq() {
        let client = GroqClient::new("key", "model");
        assert_eq!(client.model, "model");
    }
}
