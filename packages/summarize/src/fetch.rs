//! HTTP page fetching.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;

/// [`PageFetcher`] backed by a shared reqwest client.
///
/// Sends a descriptive user agent with every request and bounds each request
/// with the configured timeout.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a fetcher with an explicit user agent and request timeout.
    pub fn with_settings(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: user_agent.into(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "page fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "page fetch failed");
                FetchError::Network {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_custom_user_agent() {
        let fetcher = HttpFetcher::new().with_user_agent("TestBot/1.0");
        assert_eq!(fetcher.user_agent, "TestBot/1.0");
    }
}
