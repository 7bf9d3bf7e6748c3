//! Video transcript retrieval capability.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::CaptionFragment;

/// Returns the ordered caption fragments for a video id.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> FetchResult<Vec<CaptionFragment>>;
}
