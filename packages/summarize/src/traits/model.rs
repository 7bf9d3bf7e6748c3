//! Chat completion capability.

use async_trait::async_trait;
use llm_client::LlmError;

/// Sends a prompt to a chat model and returns the raw completion text.
///
/// The single point of contact with the model provider. Implementations do
/// not retry; retry policy belongs to the caller.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
