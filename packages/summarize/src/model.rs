//! Chat model adapter.
//!
//! Wraps [`llm_client::ChatClient`] with the fixed request shape the
//! summarizer uses: a system instruction reinforcing strict JSON, low
//! temperature, a bounded completion length, and JSON response format.

use async_trait::async_trait;
use llm_client::{ChatClient, ChatRequest, LlmError, Message, ResponseFormat};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::traits::ChatModel;

/// System instruction sent with every summarization request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that generates structured JSON output.";

/// Sampling temperature. Kept low for consistent JSON output.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Completion token cap. Summaries are short; this bounds runaway output.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// [`ChatModel`] backed by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct ModelClient {
    client: ChatClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ModelClient {
    /// Create a model client with default sampling knobs.
    pub fn new(client: ChatClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Build a model client from pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut client =
            ChatClient::new(config.api_key.expose()).with_timeout(config.model_timeout);
        if let Some(base_url) = &config.base_url {
            client = client.with_base_url(base_url.as_str());
        }

        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl ChatModel for ModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest::new(self.model.as_str())
            .message(Message::system(SYSTEM_INSTRUCTION))
            .message(Message::user(prompt))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .response_format(ResponseFormat::json_object());

        let response = self.client.chat_completion(request).await?;

        if response.content.trim().is_empty() {
            return Err(LlmError::Api("empty completion content".to_string()));
        }

        debug!(
            model = %self.model,
            chars = response.content.len(),
            "completion received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_knobs() {
        let client = ModelClient::new(ChatClient::new("sk-key"), "gemini-2.5-flash");
        assert_eq!(client.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(client.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(client.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_from_config_wires_the_knobs() {
        let config = PipelineConfig::new("sk-key")
            .with_model("custom-model")
            .with_temperature(0.1)
            .with_max_tokens(256);

        let client = ModelClient::from_config(&config);
        assert_eq!(client.model, "custom-model");
        assert_eq!(client.temperature, 0.1);
        assert_eq!(client.max_tokens, 256);
    }

    #[test]
    fn test_builders_override_knobs() {
        let client = ModelClient::new(ChatClient::new("sk-key"), "m")
            .with_temperature(0.0)
            .with_max_tokens(64);

        assert_eq!(client.temperature, 0.0);
        assert_eq!(client.max_tokens, 64);
    }
}
