//! Readability-style article extraction.
//!
//! A small scoring pass over the parsed DOM rather than a full readability
//! port. Known content containers are scored by paragraph text length and
//! penalized by link density; paragraphs living inside navigation or other
//! boilerplate elements are excluded. When no container wins, a body-wide
//! paragraph sweep is the fallback.

use scraper::{ElementRef, Html, Selector};

/// Elements that usually hold the main article body, tried in order.
const CANDIDATE_SELECTORS: &[&str] = &[
    "article",
    "main",
    r#"[role="main"]"#,
    "#content",
    "#main-content",
    ".post-content",
    ".article-body",
    ".entry-content",
    ".story-body",
];

/// Paragraphs inside these elements never count as article text.
const BOILERPLATE_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "form", "script", "style", "noscript",
];

/// A page with less extracted text than this has no article.
const MIN_CONTENT_CHARS: usize = 140;

/// Paragraphs shorter than this are ignored; they are usually captions,
/// bylines, or link labels.
const MIN_PARAGRAPH_CHARS: usize = 25;

/// The readable part of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadableArticle {
    /// Best available title; empty when the page declares none.
    pub title: String,
    /// Main text as paragraphs joined by blank lines.
    pub text: String,
}

/// Extract the readable article from page markup.
///
/// Returns `None` when the page has no extractable article content.
pub fn extract_article(html: &str) -> Option<ReadableArticle> {
    let document = Html::parse_document(html);

    let text = best_candidate_text(&document).or_else(|| paragraph_fallback(&document))?;
    let title = page_title(&document).unwrap_or_default();

    Some(ReadableArticle { title, text })
}

/// Score every known content container and keep the best one's text.
fn best_candidate_text(document: &Html) -> Option<String> {
    let mut best: Option<(f64, String)> = None;

    for candidate in CANDIDATE_SELECTORS {
        let selector = Selector::parse(candidate).unwrap();

        for element in document.select(&selector) {
            let text = collect_paragraphs(element);
            let chars = text.chars().count();
            if chars < MIN_CONTENT_CHARS {
                continue;
            }

            let score = chars as f64 * (1.0 - link_density(element));
            let better = match &best {
                Some((best_score, _)) => score > *best_score,
                None => true,
            };
            if better {
                best = Some((score, text));
            }
        }
    }

    best.map(|(_, text)| text)
}

/// Body-wide paragraph sweep for pages without a recognizable container.
fn paragraph_fallback(document: &Html) -> Option<String> {
    let text = collect_paragraphs(document.root_element());
    if text.chars().count() < MIN_CONTENT_CHARS {
        return None;
    }
    Some(text)
}

/// Gather paragraph text under `root`, skipping boilerplate ancestors and
/// short paragraphs.
fn collect_paragraphs(root: ElementRef) -> String {
    let paragraph = Selector::parse("p").unwrap();

    root.select(&paragraph)
        .filter(|p| !in_boilerplate(*p))
        .map(|p| normalize_whitespace(&p.text().collect::<String>()))
        .filter(|text| text.chars().count() >= MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn in_boilerplate(element: ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|ancestor| BOILERPLATE_TAGS.contains(&ancestor.name()))
}

/// Share of an element's text that lives inside links, 0.0 to 1.0.
fn link_density(element: ElementRef) -> f64 {
    let total: usize = element.text().map(str::len).sum();
    if total == 0 {
        return 0.0;
    }

    let anchor = Selector::parse("a").unwrap();
    let linked: usize = element
        .select(&anchor)
        .map(|a| a.text().map(str::len).sum::<usize>())
        .sum();

    linked as f64 / total as f64
}

/// Best available page title: `og:title`, then `<title>`, then the first `<h1>`.
fn page_title(document: &Html) -> Option<String> {
    og_title(document)
        .or_else(|| tag_text(document, "title"))
        .or_else(|| tag_text(document, "h1"))
}

/// The `og:title` meta value, when present and non-empty.
pub(crate) fn og_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(normalize_whitespace)
        .filter(|title| !title.is_empty())
}

fn tag_text(document: &Html, tag: &str) -> Option<String> {
    let selector = Selector::parse(tag).unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
