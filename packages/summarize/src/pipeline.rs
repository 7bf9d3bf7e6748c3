//! Pipeline orchestration.
//!
//! [`Pipeline::process`] is the single entry point. It runs one pass of
//! normalize, build prompt, call model, parse response. Input, fetch, and
//! extraction failures surface as [`PipelineError`]; once extraction has
//! succeeded, model and parse failures are logged and absorbed into a
//! degraded [`SummaryResult`] so the caller always gets something renderable.

use tracing::{debug, error, info, warn};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::fetch::HttpFetcher;
use crate::model::ModelClient;
use crate::parse::parse_summary;
use crate::prompt::build_prompt;
use crate::sources::SourceNormalizer;
use crate::traits::{ChatModel, PageFetcher, TranscriptSource};
use crate::transcript::YoutubeTranscriptClient;
use crate::types::{ExtractedContent, SourceType, SummaryResult};

/// Error text carried into logs and degraded results is capped at this many
/// characters.
const LOG_ERROR_CHARS: usize = 500;

/// Extraction and summarization in one pass.
///
/// Stateless between invocations; concurrent calls share nothing mutable.
pub struct Pipeline<F, T, M> {
    normalizer: SourceNormalizer<F, T>,
    model: M,
}

impl Pipeline<HttpFetcher, YoutubeTranscriptClient, ModelClient> {
    /// Build a pipeline with the production fetcher, transcript client, and
    /// model client.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let fetcher = HttpFetcher::with_settings(&config.user_agent, config.fetch_timeout);
        let transcripts =
            YoutubeTranscriptClient::with_settings(&config.user_agent, config.fetch_timeout);
        let model = ModelClient::from_config(config);

        Self::new(fetcher, transcripts, model)
    }
}

impl<F, T, M> Pipeline<F, T, M>
where
    F: PageFetcher,
    T: TranscriptSource,
    M: ChatModel,
{
    pub fn new(fetcher: F, transcripts: T, model: M) -> Self {
        Self {
            normalizer: SourceNormalizer::new(fetcher, transcripts),
            model,
        }
    }

    /// Extract content from `input` and summarize it.
    ///
    /// Returns an error only when extraction fails. A failing model call or
    /// an unparseable response yields [`SummaryResult::degraded`] instead,
    /// with the extracted source type and title preserved.
    pub async fn process(
        &self,
        source_type: SourceType,
        input: &str,
        title: Option<&str>,
    ) -> Result<SummaryResult> {
        info!(source_type = %source_type, "processing source");

        let content = self.normalizer.normalize(source_type, input, title).await?;

        debug!(
            source_type = %content.source_type,
            title = %content.title,
            content_chars = content.body.chars().count(),
            "content extracted"
        );

        Ok(self.summarize(&content).await)
    }

    async fn summarize(&self, content: &ExtractedContent) -> SummaryResult {
        let prompt = build_prompt(&content.body, &content.title);

        let raw = match self.model.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                let cause = PipelineError::model_unavailable(
                    content.source_type,
                    truncate_chars(&e.to_string(), LOG_ERROR_CHARS),
                );
                warn!(
                    source_type = %content.source_type,
                    title = %content.title,
                    content_chars = content.body.chars().count(),
                    error = %cause,
                    "model call failed, returning degraded summary"
                );
                return SummaryResult::degraded(content, &cause);
            }
        };

        match parse_summary(&raw) {
            Ok(draft) => draft.into_result(content),
            Err(e) => {
                let cause = PipelineError::response_unparseable(
                    content.source_type,
                    truncate_chars(&e.to_string(), LOG_ERROR_CHARS),
                );
                error!(
                    source_type = %content.source_type,
                    title = %content.title,
                    content_chars = content.body.chars().count(),
                    error = %cause,
                    "model response unparseable, returning degraded summary"
                );
                SummaryResult::degraded(content, &cause)
            }
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFetcher, MockModel, MockTranscripts};

    #[tokio::test]
    async fn test_raw_text_happy_path() {
        let pipeline = Pipeline::new(MockFetcher::new(), MockTranscripts::new(), MockModel::new());

        let result = pipeline
            .process(SourceType::RawText, "Some text worth keeping.", Some("Note"))
            .await
            .unwrap();

        assert_eq!(result.original_title, "Note");
        assert_eq!(result.source_type, SourceType::RawText);
        assert!(!result.is_degraded());
    }

    #[tokio::test]
    async fn test_model_failure_becomes_degraded_result() {
        let model = MockModel::new().with_error("boom");
        let pipeline = Pipeline::new(MockFetcher::new(), MockTranscripts::new(), model);

        let result = pipeline
            .process(SourceType::RawText, "Some text.", Some("Note"))
            .await
            .unwrap();

        assert!(result.is_degraded());
        assert!(result.summary.contains("boom"));
        assert_eq!(result.original_title, "Note");
    }

    #[tokio::test]
    async fn test_extraction_failure_propagates() {
        let pipeline = Pipeline::new(MockFetcher::new(), MockTranscripts::new(), MockModel::new());

        let err = pipeline
            .process(SourceType::RawText, "   ", None)
            .await
            .unwrap_err();

        assert!(err.is_hard());
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 10), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}
