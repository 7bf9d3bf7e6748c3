//! Video extraction strategy.
//!
//! Resolves the video id from the URL, then fetches the transcript and the
//! watch-page title concurrently. The transcript is required; the title is
//! best effort and falls back to a generated placeholder.

use regex::Regex;
use scraper::Html;
use tracing::{debug, warn};

use crate::error::{FetchResult, PipelineError, Result};
use crate::sources::readability;
use crate::traits::{PageFetcher, TranscriptSource};
use crate::types::{ExtractedContent, SourceType};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Pull an 11-character video id out of the common URL shapes: watch URLs,
/// short links, embeds, and bare `v/` paths.
pub fn extract_video_id(url: &str) -> Option<String> {
    let id_pattern = Regex::new(r"(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)").unwrap();

    // The last match wins so `&v=` beats an earlier path segment.
    let id = id_pattern
        .captures_iter(url)
        .last()
        .and_then(|cap| cap.get(2))
        .map(|m| m.as_str().to_string())?;

    if id.chars().count() == 11 {
        Some(id)
    } else {
        None
    }
}

pub(crate) async fn normalize<F, T>(
    fetcher: &F,
    transcripts: &T,
    url: &str,
) -> Result<ExtractedContent>
where
    F: PageFetcher,
    T: TranscriptSource,
{
    let video_id = extract_video_id(url).ok_or_else(|| {
        PipelineError::invalid_input(
            SourceType::Video,
            format!("could not extract a video id from {}", url),
        )
    })?;

    let watch_url = format!("{}{}", WATCH_URL, video_id);

    // Transcript failure is fatal; title failure only costs us the title.
    let (transcript, title) = tokio::join!(
        transcripts.fetch_transcript(&video_id),
        fetch_title(fetcher, &watch_url),
    );

    let fragments =
        transcript.map_err(|e| PipelineError::fetch_failed(SourceType::Video, e.to_string()))?;

    let title = match title {
        Ok(Some(title)) => title,
        Ok(None) => {
            debug!(video_id = %video_id, "watch page has no og:title, using fallback");
            format!("Video: {}", video_id)
        }
        Err(e) => {
            warn!(video_id = %video_id, error = %e, "title fetch failed, using fallback");
            format!("Video: {}", video_id)
        }
    };

    let body = fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        video_id = %video_id,
        fragments = fragments.len(),
        transcript_chars = body.chars().count(),
        "video content extracted"
    );

    Ok(ExtractedContent::new(SourceType::Video, title, body))
}

async fn fetch_title<F: PageFetcher>(fetcher: &F, watch_url: &str) -> FetchResult<Option<String>> {
    let html = fetcher.fetch(watch_url).await?;
    let document = Html::parse_document(&html);
    Ok(readability::og_title(&document))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_extracts_id_from_watch_url() {
        let url = format!("https://www.youtube.com/watch?v={}", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_extracts_id_from_short_url() {
        let url = format!("https://youtu.be/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_extracts_id_from_embed_url() {
        let url = format!("https://www.youtube.com/embed/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_extracts_id_from_bare_v_path() {
        let url = format!("https://www.youtube.com/v/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_extra_query_parameters_are_ignored() {
        let url = format!("https://www.youtube.com/watch?v={}&t=42s", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));

        let url = format!("https://youtu.be/{}?si=abcdef", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_v_parameter_after_other_parameters() {
        let url = format!("https://www.youtube.com/watch?list=PL123&v={}", ID);
        assert_eq!(extract_video_id(&url), Some(ID.to_string()));
    }

    #[test]
    fn test_rejects_wrong_length_ids() {
        assert_eq!(extract_video_id("https://youtu.be/shortid"), None);
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQextra"),
            None
        );
    }

    #[test]
    fn test_rejects_non_video_url() {
        assert_eq!(extract_video_id("https://example.com/article"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
    }
}
