//! Mock collaborators for pipeline tests.
//!
//! Each mock records its calls so tests can assert what was (or was not)
//! requested. All state sits behind `Arc<RwLock<..>>`, so clones share it
//! and a test can keep a handle while the pipeline owns the other.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use llm_client::LlmError;

use crate::error::{FetchError, FetchResult};
use crate::traits::{ChatModel, PageFetcher, TranscriptSource};
use crate::types::CaptionFragment;

/// Canned model output matching the prompt's declared JSON shape.
pub fn canned_summary() -> String {
    r#"{
  "tldr": "A short takeaway.",
  "bulletPoints": ["First point", "Second point", "Third point", "Fourth point", "Fifth point"],
  "summary": "A longer narrative summary of the content in several connected sentences.",
  "tags": ["testing", "summaries"]
}"#
    .to_string()
}

/// Minimal watch-page markup carrying an og:title meta tag.
pub fn watch_page_html(title: &str) -> String {
    format!(
        r#"<html><head><meta property="og:title" content="{}"><title>ignored</title></head><body></body></html>"#,
        title
    )
}

/// [`PageFetcher`] serving canned pages. Unknown URLs return HTTP 404.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    statuses: Arc<RwLock<HashMap<String, u16>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), body.into());
        self
    }

    /// Respond to `url` with an HTTP error status.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.statuses.write().unwrap().insert(url.into(), status);
        self
    }

    /// URLs fetched so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(status) = self.statuses.read().unwrap().get(url) {
            return Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            });
        }

        match self.pages.read().unwrap().get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// [`TranscriptSource`] serving canned transcripts. Unknown video ids behave
/// like videos without caption tracks.
#[derive(Clone, Default)]
pub struct MockTranscripts {
    transcripts: Arc<RwLock<HashMap<String, Vec<CaptionFragment>>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockTranscripts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `fragments` for `video_id`.
    pub fn with_transcript(self, video_id: impl Into<String>, fragments: &[&str]) -> Self {
        let fragments: Vec<CaptionFragment> =
            fragments.iter().map(|text| CaptionFragment::new(*text)).collect();
        self.transcripts
            .write()
            .unwrap()
            .insert(video_id.into(), fragments);
        self
    }

    /// Video ids requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptSource for MockTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> FetchResult<Vec<CaptionFragment>> {
        self.calls.write().unwrap().push(video_id.to_string());

        match self.transcripts.read().unwrap().get(video_id) {
            Some(fragments) => Ok(fragments.clone()),
            None => Err(FetchError::NoTranscript {
                video_id: video_id.to_string(),
            }),
        }
    }
}

/// [`ChatModel`] returning a canned response or a canned error.
///
/// Defaults to [`canned_summary`] so the happy path needs no setup.
#[derive(Clone)]
pub struct MockModel {
    response: Arc<RwLock<Result<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(canned_summary()))),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Respond with `response` instead of the canned summary.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Ok(response.into());
        self
    }

    /// Fail every completion with an API error carrying `message`.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Err(message.into());
        self
    }

    /// Prompts received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.write().unwrap().push(prompt.to_string());

        match &*self.response.read().unwrap() {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(LlmError::Api(message.clone())),
        }
    }
}
