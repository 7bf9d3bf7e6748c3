//! Content Extraction and Summarization Pipeline
//!
//! Turns heterogeneous sources (video transcripts, web articles, raw text)
//! into normalized plain text, sends it to a chat model with a constrained
//! JSON prompt, and returns a [`SummaryResult`] with a stable shape even
//! when the model misbehaves.
//!
//! # Failure policy
//!
//! Failures before content exists (bad input, failed fetch, nothing
//! extractable) propagate as [`PipelineError`]. Failures after extraction
//! (model down, unparseable response) never do: the pipeline returns a
//! degraded [`SummaryResult`] carrying the error text, so a caller that
//! must render something always can.
//!
//! # Usage
//!
//! ```rust,ignore
//! use summarize::{Pipeline, PipelineConfig, SourceType};
//!
//! let config = PipelineConfig::from_env()?;
//! let pipeline = Pipeline::from_config(&config);
//!
//! let summary = pipeline
//!     .process(SourceType::Article, "https://example.com/story", None)
//!     .await?;
//!
//! println!("{}: {}", summary.original_title, summary.tldr);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability traits (PageFetcher, TranscriptSource, ChatModel)
//! - [`types`] - Pipeline data types
//! - [`sources`] - Extraction strategies and the source normalizer
//! - [`prompt`] - Prompt construction
//! - [`parse`] - Defensive response parsing
//! - [`pipeline`] - The orchestrator
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod transcript;
pub mod types;

// Re-export core types at crate root
pub use config::{ConfigError, PipelineConfig, SecretString};
pub use error::{FetchError, FetchResult, PipelineError, Result};
pub use types::{CaptionFragment, ExtractedContent, SourceType, SummaryResult};

// Re-export the pipeline and its production collaborators
pub use fetch::HttpFetcher;
pub use model::ModelClient;
pub use parse::{parse_summary, ParseError, SummaryDraft};
pub use pipeline::Pipeline;
pub use prompt::{build_prompt, MAX_CONTENT_CHARS};
pub use sources::{extract_article, extract_video_id, ReadableArticle, SourceNormalizer};
pub use transcript::YoutubeTranscriptClient;

// Re-export capability traits
pub use traits::{ChatModel, PageFetcher, TranscriptSource};

// Re-export testing utilities
pub use testing::{MockFetcher, MockModel, MockTranscripts};
