//! Raw text strategy.

use chrono::Local;

use crate::error::{PipelineError, Result};
use crate::types::{ExtractedContent, SourceType};

pub(crate) fn normalize(text: &str, title: Option<&str>) -> Result<ExtractedContent> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::invalid_input(
            SourceType::RawText,
            "text content is required",
        ));
    }

    let title = match title {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => format!("Text Note: {}", Local::now().format("%Y-%m-%d")),
    };

    Ok(ExtractedContent::new(SourceType::RawText, title, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let content = normalize("  Hello world. This is a test.  \n", None).unwrap();
        assert_eq!(content.body, "Hello world. This is a test.");
        assert_eq!(content.source_type, SourceType::RawText);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(
            normalize("", None),
            Err(PipelineError::InvalidInput { .. })
        ));
        assert!(matches!(
            normalize("   \n\t  ", None),
            Err(PipelineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_caller_title_is_kept() {
        let content = normalize("body text", Some("My Note")).unwrap();
        assert_eq!(content.title, "My Note");
    }

    #[test]
    fn test_blank_title_falls_back_to_date_placeholder() {
        let content = normalize("body text", Some("   ")).unwrap();
        assert!(content.title.starts_with("Text Note: "));
    }

    #[test]
    fn test_missing_title_gets_date_placeholder() {
        let content = normalize("body text", None).unwrap();
        assert!(content.title.starts_with("Text Note: "));
    }
}
