//! Article extraction strategy.

use tracing::debug;
use url::Url;

use crate::error::{PipelineError, Result};
use crate::sources::readability::{self, ReadableArticle};
use crate::traits::PageFetcher;
use crate::types::{ExtractedContent, SourceType};

const FALLBACK_TITLE: &str = "Untitled Article";

pub(crate) async fn normalize<F: PageFetcher>(fetcher: &F, url: &str) -> Result<ExtractedContent> {
    validate_url(url)?;

    let html = fetcher
        .fetch(url)
        .await
        .map_err(|e| PipelineError::fetch_failed(SourceType::Article, e.to_string()))?;

    let ReadableArticle { title, text } = readability::extract_article(&html).ok_or_else(|| {
        PipelineError::extraction_failed(
            SourceType::Article,
            format!("no extractable article content at {}", url),
        )
    })?;

    let title = if title.trim().is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    };

    debug!(
        url = %url,
        title = %title,
        article_chars = text.chars().count(),
        "article content extracted"
    );

    Ok(ExtractedContent::new(SourceType::Article, title, text))
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| {
        PipelineError::invalid_input(SourceType::Article, format!("invalid URL {}: {}", url, e))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(PipelineError::invalid_input(
            SourceType::Article,
            format!("unsupported URL scheme {}", scheme),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://example.com/story").is_ok());
        assert!(validate_url("http://example.com/story").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com/story"),
            Err(PipelineError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(PipelineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(matches!(
            validate_url("not a url"),
            Err(PipelineError::InvalidInput { .. })
        ));
    }
}
