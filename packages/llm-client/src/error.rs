//! Error types for the chat client.

use thiserror::Error;

/// Result type for chat client operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Chat client errors.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Configuration error (missing API key, bad endpoint settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, request timed out)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx status, empty choice list, rate limit)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (response body was not the expected JSON shape)
    #[error("Parse error: {0}")]
    Parse(String),
}
