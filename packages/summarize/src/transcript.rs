//! YouTube transcript retrieval.
//!
//! YouTube exposes caption tracks through the watch page's embedded player
//! response. The first track's URL serves timed-text XML, which is parsed
//! into caption fragments. No official API is involved, so both steps go
//! through ordinary HTTP fetches.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{FetchError, FetchResult};
use crate::traits::TranscriptSource;
use crate::types::CaptionFragment;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// [`TranscriptSource`] that reads caption tracks from watch pages.
#[derive(Clone)]
pub struct YoutubeTranscriptClient {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for YoutubeTranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YoutubeTranscriptClient {
    /// Create a transcript client with default settings.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a transcript client with an explicit user agent and timeout.
    pub fn with_settings(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: user_agent.into(),
        }
    }

    async fn get_text(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                reason: e.to_string(),
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

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn fetch_transcript(&self, video_id: &str) -> FetchResult<Vec<CaptionFragment>> {
        let watch_url = format!("{}{}", WATCH_URL, video_id);
        let html = self.get_text(&watch_url).await?;

        let track_url = find_caption_url(&html).ok_or_else(|| FetchError::NoTranscript {
            video_id: video_id.to_string(),
        })?;

        debug!(video_id = %video_id, "found caption track");

        let xml = self.get_text(&track_url).await?;
        let fragments = parse_fragments(&xml);

        debug!(video_id = %video_id, fragments = fragments.len(), "transcript fetched");

        Ok(fragments)
    }
}

/// Locate the first caption track URL in watch-page markup.
///
/// The URL sits inside a JSON blob, so its ampersands arrive JSON-escaped.
fn find_caption_url(html: &str) -> Option<String> {
    let track_pattern = Regex::new(r#""captionTracks":\[\{"baseUrl":"([^"]+)""#).unwrap();

    track_pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().replace("\\u0026", "&"))
}

/// Parse timed-text XML into caption fragments, dropping empty ones.
fn parse_fragments(xml: &str) -> Vec<CaptionFragment> {
    let text_pattern = Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap();
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();

    text_pattern
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        .map(|m| {
            let stripped = tag_pattern.replace_all(m.as_str(), " ");
            let decoded = decode_entities(&stripped);
            decoded.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|text| !text.is_empty())
        .map(CaptionFragment::new)
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_caption_track_url_and_unescapes_ampersands() {
        let html = r#"<html><script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc123\u0026lang=en","name":{"simpleText":"English"}}]}}};</script></html>"#;

        let url = find_caption_url(html).unwrap();
        assert_eq!(url, "https://www.youtube.com/api/timedtext?v=abc123&lang=en");
    }

    #[test]
    fn test_page_without_captions_yields_none() {
        assert!(find_caption_url("<html><body>no player data</body></html>").is_none());
    }

    #[test]
    fn test_parses_fragments_and_decodes_entities() {
        let xml = r#"<?xml version="1.0"?><transcript><text start="0.0" dur="1.2">Hello &amp; welcome</text><text start="1.2" dur="0.8">to <i>the</i> show</text><text start="2.0" dur="0.5">   </text></transcript>"#;

        let fragments = parse_fragments(xml);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "Hello & welcome");
        assert_eq!(fragments[1].text, "to the show");
    }

    #[test]
    fn test_entity_decode_covers_common_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("1 &lt; 2 &gt; 0"), "1 < 2 > 0");
    }
}
