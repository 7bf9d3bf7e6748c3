//! Page retrieval capability.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetches a URL and returns the response body as text.
///
/// Used for article markup and video watch pages. Implementations must send
/// a descriptive user agent and bound every request with a timeout.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
