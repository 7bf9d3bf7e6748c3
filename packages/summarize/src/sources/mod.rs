//! Source extraction strategies.
//!
//! Each [`SourceType`] has its own strategy module; [`SourceNormalizer`]
//! dispatches to the right one. All strategies produce the same
//! [`ExtractedContent`] shape: a never-empty title and a markup-free body.

mod article;
mod readability;
mod text;
mod video;

pub use readability::{extract_article, ReadableArticle};
pub use video::extract_video_id;

use crate::error::Result;
use crate::traits::{PageFetcher, TranscriptSource};
use crate::types::{ExtractedContent, SourceType};

/// Converts any supported input into [`ExtractedContent`].
pub struct SourceNormalizer<F, T> {
    fetcher: F,
    transcripts: T,
}

impl<F, T> SourceNormalizer<F, T>
where
    F: PageFetcher,
    T: TranscriptSource,
{
    pub fn new(fetcher: F, transcripts: T) -> Self {
        Self {
            fetcher,
            transcripts,
        }
    }

    /// Run the extraction strategy for `source_type` over `input`.
    ///
    /// `title` is honored only by the raw text strategy; video and article
    /// sources take their titles from the fetched page.
    pub async fn normalize(
        &self,
        source_type: SourceType,
        input: &str,
        title: Option<&str>,
    ) -> Result<ExtractedContent> {
        match source_type {
            SourceType::Video => video::normalize(&self.fetcher, &self.transcripts, input).await,
            SourceType::Article => article::normalize(&self.fetcher, input).await,
            SourceType::RawText => text::normalize(input, title),
        }
    }
}
