//! Error types for the summarization pipeline.
//!
//! [`PipelineError`] covers the pipeline's own failure taxonomy. Hard
//! failures (input, fetch, extraction) surface to the caller; soft failures
//! (model, parse) are absorbed into a degraded result by the orchestrator.
//! [`FetchError`] is the lower-level taxonomy shared by the page fetcher and
//! the transcript client.

use thiserror::Error;

use crate::types::SourceType;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Failure raised while turning a source into a summary.
///
/// Every variant carries the source type it happened for and a
/// human-readable cause.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The caller-supplied input could not be understood for this source type.
    #[error("invalid {source_type} input: {reason}")]
    InvalidInput {
        source_type: SourceType,
        reason: String,
    },

    /// A required network fetch failed.
    #[error("fetch failed for {source_type} source: {reason}")]
    FetchFailed {
        source_type: SourceType,
        reason: String,
    },

    /// The fetched markup contained nothing extractable.
    #[error("no extractable content for {source_type} source: {reason}")]
    ExtractionFailed {
        source_type: SourceType,
        reason: String,
    },

    /// The model endpoint errored, timed out, or returned no content.
    #[error("model unavailable for {source_type} source: {reason}")]
    ModelUnavailable {
        source_type: SourceType,
        reason: String,
    },

    /// The model responded, but no JSON object could be read from it.
    #[error("unparseable model response for {source_type} source: {reason}")]
    ResponseUnparseable {
        source_type: SourceType,
        reason: String,
    },
}

impl PipelineError {
    pub fn invalid_input(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            source_type,
            reason: reason.into(),
        }
    }

    pub fn fetch_failed(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            source_type,
            reason: reason.into(),
        }
    }

    pub fn extraction_failed(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            source_type,
            reason: reason.into(),
        }
    }

    pub fn model_unavailable(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            source_type,
            reason: reason.into(),
        }
    }

    pub fn response_unparseable(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::ResponseUnparseable {
            source_type,
            reason: reason.into(),
        }
    }

    /// The source type this failure happened for.
    pub fn source_type(&self) -> SourceType {
        match self {
            Self::InvalidInput { source_type, .. }
            | Self::FetchFailed { source_type, .. }
            | Self::ExtractionFailed { source_type, .. }
            | Self::ModelUnavailable { source_type, .. }
            | Self::ResponseUnparseable { source_type, .. } => *source_type,
        }
    }

    /// The human-readable cause.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason, .. }
            | Self::FetchFailed { reason, .. }
            | Self::ExtractionFailed { reason, .. }
            | Self::ModelUnavailable { reason, .. }
            | Self::ResponseUnparseable { reason, .. } => reason,
        }
    }

    /// Hard failures mean no usable content was obtained; they propagate to
    /// the caller.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::FetchFailed { .. } | Self::ExtractionFailed { .. }
        )
    }

    /// Soft failures happen after extraction succeeded; the orchestrator
    /// absorbs them into a degraded [`SummaryResult`](crate::types::SummaryResult).
    pub fn is_soft(&self) -> bool {
        !self.is_hard()
    }
}

/// Failure raised by the HTTP fetcher or the transcript client.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// Connection, timeout, or body-read failure.
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// The watch page exists but advertises no caption tracks.
    #[error("no caption tracks for video {video_id}")]
    NoTranscript { video_id: String },
}
