//! Pipeline configuration and credential handling.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the API key.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretBox};
use thiserror::Error;

use crate::model::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// User agent sent with page and transcript fetches.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RecallMind/1.0)";

/// Timeout for page and transcript fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for the model call.
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration failure while assembling a pipeline.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),
}

/// A secret string that won't be logged or displayed.
///
/// Uses `secrecy::SecretBox` to ensure the API key is never accidentally
/// exposed in logs, debug output, or error messages.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this when actually using the secret (e.g., in an API request).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Everything the pipeline needs to build its production collaborators.
#[derive(Clone)]
pub struct PipelineConfig {
    /// API key for the model endpoint (secret)
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// Model endpoint base URL override (optional)
    pub base_url: Option<String>,

    /// User agent for page and transcript fetches
    pub user_agent: String,

    /// Timeout for page and transcript fetches
    pub fetch_timeout: Duration,

    /// Timeout for the model call
    pub model_timeout: Duration,

    /// Sampling temperature for the model call
    pub temperature: f32,

    /// Completion token cap for the model call
    pub max_tokens: u32,
}

impl PipelineConfig {
    /// Create a configuration with default knobs.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: llm_client::DEFAULT_MODEL.to_string(),
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            model_timeout: DEFAULT_MODEL_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required. `SUMMARIZE_MODEL` and
    /// `SUMMARIZE_BASE_URL` override the defaults when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnv("GEMINI_API_KEY"))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("SUMMARIZE_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("SUMMARIZE_BASE_URL") {
            config.base_url = Some(base_url);
        }

        Ok(config)
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the model endpoint base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the fetch user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the page and transcript fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the model call timeout.
    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
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

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("model_timeout", &self.model_timeout)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_not_in_debug() {
        let secret = SecretString::new("sk-super-secret-key");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("sk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_secret_not_in_display() {
        let secret = SecretString::new("sk-super-secret-key");
        let display = format!("{}", secret);
        assert!(!display.contains("sk-super"));
        assert!(display.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_works() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(secret.expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::new("sk-key");
        assert_eq!(config.model, llm_client::DEFAULT_MODEL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.model_timeout, Duration::from_secs(60));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = PipelineConfig::new("sk-key").with_model("other-model");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-key"));
        assert!(debug.contains("other-model"));
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::new("sk-key")
            .with_base_url("https://proxy.internal/v1")
            .with_user_agent("TestBot/1.0")
            .with_temperature(0.0)
            .with_max_tokens(128);

        assert_eq!(config.base_url.as_deref(), Some("https://proxy.internal/v1"));
        assert_eq!(config.user_agent, "TestBot/1.0");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_tokens, 128);
    }
}
