//! Extraction of the story from the model's free-text answer.
//!
//! The text backend cannot return structured output while search grounding is
//! on, so the prompt asks for a `HEADLINE:` line followed by a `SUMMARY:`
//! block. Nothing here ever fails: missing markers fall back to synthesized
//! values.

use once_cell::sync::Lazy;
use regex::Regex;

use super::grounding::GroundingChunk;
use super::story::{Country, Source};

// Only horizontal whitespace: a blank `HEADLINE:` line must not capture the next line.
static HEADLINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)HEADLINE:[ \t]*(.*)").expect("valid headline pattern"));

// `s` lets the summary run to the end of the text.
static SUMMARY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)SUMMARY:\s*(.*)").expect("valid summary pattern"));

/// Headline and summary pulled out of a model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStory {
    pub headline: String,
    pub summary: String,
}

/// Parses the two-marker answer, applying the fallback rules.
///
/// - no `HEADLINE:` line (or an empty one) gives `Latest News from {country}`
/// - no `SUMMARY:` marker (or an empty one) gives the raw text unchanged
pub fn parse_story_text(raw: &str, country: &Country) -> ParsedStory {
    let headline = capture_trimmed(&HEADLINE_PATTERN, raw)
        .unwrap_or_else(|| country.fallback_headline());
    let summary = capture_trimmed(&SUMMARY_PATTERN, raw).unwrap_or_else(|| raw.to_string());

    ParsedStory { headline, summary }
}

fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Converts grounding chunks to sources, keeping order and dropping non-web chunks.
pub fn extract_sources(chunks: &[GroundingChunk]) -> Vec<Source> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Source::from_parts(web.title.as_deref(), web.uri.as_deref()))
        .collect()
}
