//! Core data types shared across the pipeline.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Which extraction strategy handles the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// A video URL; the body is the joined caption transcript.
    Video,
    /// A web page URL; the body is readability-extracted article text.
    Article,
    /// Caller-supplied plain text.
    #[serde(rename = "text")]
    RawText,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Video => write!(f, "video"),
            SourceType::Article => write!(f, "article"),
            SourceType::RawText => write!(f, "text"),
        }
    }
}

/// One caption fragment of a video transcript, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionFragment {
    pub text: String,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Normalized plain-text content produced by the source normalizer.
///
/// `title` is never empty (strategies substitute a placeholder) and `body`
/// never contains markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    pub title: String,
    pub body: String,
    pub source_type: SourceType,
}

impl ExtractedContent {
    pub fn new(
        source_type: SourceType,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            source_type,
        }
    }
}

/// The pipeline's externally visible output.
///
/// `bullet_points` and `tags` are always present; absence is an empty
/// collection, never a null. Serializes with camelCase keys to match the
/// model's declared output shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub tldr: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub tags: IndexSet<String>,
    pub source_type: SourceType,
    pub original_title: String,
}

impl SummaryResult {
    /// Fixed fallback produced when the model call or response parse fails.
    ///
    /// Extraction already succeeded at this point, so the caller still gets a
    /// renderable result. `summary` carries the underlying error message so
    /// the failure can be diagnosed from the result alone.
    pub fn degraded(content: &ExtractedContent, error: &PipelineError) -> Self {
        Self {
            tldr: "Failed to generate summary".to_string(),
            bullet_points: vec!["An error occurred while generating the summary".to_string()],
            summary: error.to_string(),
            tags: ["error".to_string()].into_iter().collect(),
            source_type: content.source_type,
            original_title: content.title.clone(),
        }
    }

    /// True when this result is the fallback from [`SummaryResult::degraded`].
    pub fn is_degraded(&self) -> bool {
        self.tldr == "Failed to generate summary" && self.tags.contains("error")
    }
}
