//! Defensive parsing of model output.
//!
//! The model is instructed to return bare JSON but routinely wraps it in
//! markdown fences or surrounds it with prose. Parsing goes through a
//! loosely typed [`serde_json::Value`] first and coerces each field
//! explicitly; a missing or wrong-typed field becomes an empty value rather
//! than a rejection. Only the complete absence of a JSON object fails.

use indexmap::IndexSet;
use serde_json::Value;
use thiserror::Error;

use crate::types::{ExtractedContent, SummaryResult};

const SNIPPET_CHARS: usize = 200;

/// The model response contained no readable JSON object.
#[derive(Error, Debug)]
#[error("{message} (response starts: {snippet:?})")]
pub struct ParseError {
    message: String,
    snippet: String,
}

impl ParseError {
    fn new(message: impl Into<String>, raw: &str) -> Self {
        Self {
            message: message.into(),
            snippet: raw.chars().take(SNIPPET_CHARS).collect(),
        }
    }

    /// The first characters of the offending response, for diagnostics.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}

/// Summary fields as the model reported them, before source metadata is
/// attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryDraft {
    pub tldr: String,
    pub bullet_points: Vec<String>,
    pub summary: String,
    pub tags: IndexSet<String>,
}

impl SummaryDraft {
    /// Attach source metadata to produce the final result.
    pub fn into_result(self, content: &ExtractedContent) -> SummaryResult {
        SummaryResult {
            tldr: self.tldr,
            bullet_points: self.bullet_points,
            summary: self.summary,
            tags: self.tags,
            source_type: content.source_type,
            original_title: content.title.clone(),
        }
    }
}

/// Parse raw model output into a [`SummaryDraft`].
pub fn parse_summary(raw: &str) -> Result<SummaryDraft, ParseError> {
    let payload = extract_payload(raw);

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ParseError::new(format!("invalid summary JSON: {}", e), raw))?;

    let object = value
        .as_object()
        .ok_or_else(|| ParseError::new("expected a JSON object at the top level", raw))?;

    Ok(SummaryDraft {
        tldr: string_field(object, "tldr"),
        bullet_points: string_array(object, "bulletPoints"),
        summary: string_field(object, "summary"),
        tags: string_array(object, "tags").into_iter().collect(),
    })
}

/// Strip a surrounding markdown code fence, if present.
///
/// A fence only counts at the start of the text or at the start of a line,
/// so backtick runs inside the payload are left alone.
fn extract_payload(raw: &str) -> &str {
    let trimmed = raw.trim();

    let fence_start = if trimmed.starts_with("```") {
        Some(0)
    } else {
        trimmed.find("\n```").map(|i| i + 1)
    };

    let start = match fence_start {
        Some(start) => start,
        None => return trimmed,
    };

    // Skip the fence and an optional language tag like `json`.
    let body = trimmed[start + 3..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());

    let body = match body.find("\n```") {
        Some(end) => &body[..end],
        None => body,
    };

    body.trim().trim_end_matches("```").trim()
}

fn string_field(object: &serde_json::Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_array(object: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceType;

    const WELL_FORMED: &str = r#"{"tldr":"short","bulletPoints":["a","b"],"summary":"long form","tags":["x","y"]}"#;

    #[test]
    fn test_parses_bare_json() {
        let draft = parse_summary(WELL_FORMED).unwrap();
        assert_eq!(draft.tldr, "short");
        assert_eq!(draft.bullet_points, vec!["a", "b"]);
        assert_eq!(draft.summary, "long form");
        assert_eq!(draft.tags.len(), 2);
    }

    #[test]
    fn test_fenced_and_bare_parse_identically() {
        let bare = parse_summary(WELL_FORMED).unwrap();

        let fenced = parse_summary(&format!("```json\n{}\n```", WELL_FORMED)).unwrap();
        assert_eq!(bare, fenced);

        let plain_fence = parse_summary(&format!("```\n{}\n```", WELL_FORMED)).unwrap();
        assert_eq!(bare, plain_fence);
    }

    #[test]
    fn test_fence_with_surrounding_prose() {
        let raw = format!(
            "Sure, here is the summary:\n```json\n{}\n```\nLet me know if you need more.",
            WELL_FORMED
        );
        let draft = parse_summary(&raw).unwrap();
        assert_eq!(draft.tldr, "short");
    }

    #[test]
    fn test_unclosed_fence_still_parses() {
        let draft = parse_summary(&format!("```json\n{}", WELL_FORMED)).unwrap();
        assert_eq!(draft.tldr, "short");
    }

    #[test]
    fn test_backticks_inside_strings_are_not_fences() {
        let raw = r#"{"tldr":"use ``` to fence code","summary":"s"}"#;
        let draft = parse_summary(raw).unwrap();
        assert_eq!(draft.tldr, "use ``` to fence code");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let draft = parse_summary(r#"{"tldr":"only this"}"#).unwrap();
        assert_eq!(draft.tldr, "only this");
        assert!(draft.bullet_points.is_empty());
        assert!(draft.summary.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_default_to_empty() {
        let raw = r#"{"tldr":42,"bulletPoints":"not a list","summary":null,"tags":{"nested":true}}"#;
        let draft = parse_summary(raw).unwrap();
        assert!(draft.tldr.is_empty());
        assert!(draft.bullet_points.is_empty());
        assert!(draft.summary.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_non_string_array_elements_are_dropped() {
        let draft = parse_summary(r#"{"bulletPoints":["keep",1,null,"also keep"]}"#).unwrap();
        assert_eq!(draft.bullet_points, vec!["keep", "also keep"]);
    }

    #[test]
    fn test_duplicate_tags_deduplicate_in_order() {
        let draft = parse_summary(r#"{"tags":["rust","ai","rust","ml"]}"#).unwrap();
        let tags: Vec<&str> = draft.tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["rust", "ai", "ml"]);
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let err = parse_summary("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_garbage_is_rejected_with_snippet() {
        let err = parse_summary("I could not produce a summary today.").unwrap_err();
        assert!(err.to_string().contains("invalid summary JSON"));
        assert!(err.snippet().starts_with("I could not"));
    }

    #[test]
    fn test_into_result_attaches_source_metadata() {
        let content = ExtractedContent::new(SourceType::Video, "A Talk", "transcript words");
        let result = parse_summary(WELL_FORMED).unwrap().into_result(&content);

        assert_eq!(result.source_type, SourceType::Video);
        assert_eq!(result.original_title, "A Talk");
        assert_eq!(result.tldr, "short");
    }
}
