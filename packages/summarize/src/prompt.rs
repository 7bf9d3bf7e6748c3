//! Prompt construction for summarization.
//!
//! The prompt declares the exact JSON shape the model must return; the
//! parser in [`crate::parse`] reads the same keys back.

/// Body text is cut to this many characters before it is embedded in the
/// prompt. The cut is a hard character cut with no word-boundary adjustment.
pub const MAX_CONTENT_CHARS: usize = 4_000;

/// Prompt template for structured summarization.
const SUMMARIZE_PROMPT: &str = r#"You are an expert summarizer. Read the following content carefully and produce a high-quality summary that captures the core ideas.

Requirements:
1. **TL;DR (max 2 sentences, under 150 characters)** → must reflect the main insight, not generic fluff.
2. **Key Takeaways (5 bullet points)** → highlight the most important facts, insights, or arguments. Avoid repetition.
3. **Detailed Summary (5–6 sentences)** → a clear narrative that lets someone who never read the original text fully understand its main ideas.
4. **Tags (3–5 keywords)** → capture topics/themes for categorization.

Title: {title}
Content (first 4000 chars shown):
{content}...

Return only valid JSON in this format:
{
  "tldr": "short tl;dr",
  "bulletPoints": ["point 1", "point 2", "point 3", "point 4", "point 5"],
  "summary": "detailed multi-sentence summary",
  "tags": ["tag1", "tag2", "tag3"]
}"#;

/// Render the summarization prompt for extracted content.
///
/// Deterministic and side-effect free. `body` beyond [`MAX_CONTENT_CHARS`]
/// is dropped; the trailing ellipsis marker is always present.
pub fn build_prompt(body: &str, title: &str) -> String {
    let shown: String = body.chars().take(MAX_CONTENT_CHARS).collect();

    SUMMARIZE_PROMPT
        .replace("{title}", title)
        .replace("{content}", &shown)
}
