//! Minimal chat-completions client for OpenAI-compatible APIs.
//!
//! Speaks the `/chat/completions` wire format used by OpenAI and by
//! compatibility endpoints such as Google's Generative Language API (the
//! default base URL). No domain logic: callers build a [`ChatRequest`],
//! the client returns the first choice's text.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_client::{ChatClient, ChatRequest, Message, ResponseFormat};
//!
//! let client = ChatClient::from_env()?;
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new("gemini-2.5-flash")
//!             .message(Message::system("Reply with a JSON object only."))
//!             .message(Message::user("Summarize: ..."))
//!             .temperature(0.5)
//!             .max_tokens(1000)
//!             .response_format(ResponseFormat::json_object()),
//!     )
//!     .await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{LlmError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default base URL: Google's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat-completions API client.
#[derive(Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ChatClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| LlmError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request and return the first choice.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                LlmError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "chat completion API error");
            return Err(LlmError::Api(format!(
                "chat completion returned status {}: {}",
                status, error_text
            )));
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Api("no completion choices in response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = ChatClient::new("test-key")
            .with_base_url("https://custom.endpoint/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "https://custom.endpoint/v1");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_base_url_is_openai_compatible() {
        let client = ChatClient::new("test-key");
        assert!(client.base_url().ends_with("/openai"));
    }
}
