//! Story card view.

use crate::domain::news::{NewsResult, JPEG_DATA_URL_PREFIX};

use super::style::{truncate, wrap_text, Style};

const CARD_WIDTH: usize = 72;
const SOURCE_TITLE_WIDTH: usize = 40;

/// Props for the story card.
#[derive(Debug, Clone, Copy)]
pub struct NewsCardProps<'a> {
    pub result: &'a NewsResult,
    /// How many sources to list.
    pub max_sources: usize,
}

pub fn render_news_card(props: &NewsCardProps<'_>, style: &Style) -> String {
    let result = props.result;
    let rule = style.dim(&"─".repeat(CARD_WIDTH));
    let mut out = String::new();

    out.push_str(&format!("\n  {}\n", rule));
    out.push_str(&format!(
        "  {}  {}  ·  {}\n\n",
        style.accent(&format!("⌖ {}", result.country.to_uppercase())),
        style.dim(&result.timestamp),
        style.accent("AI ANALYSIS")
    ));

    for line in wrap_text(&result.headline, CARD_WIDTH) {
        out.push_str(&format!("  {}\n", style.bold(&line)));
    }
    out.push('\n');

    for line in wrap_text(&result.summary, CARD_WIDTH) {
        out.push_str(&format!("  {}\n", line));
    }

    out.push_str(&format!("\n  {} {}\n", style.dim("Image:"), describe_image(&result.image_url)));

    out.push_str(&format!("\n  {}\n", style.dim("SOURCES & GROUNDING")));
    if result.sources.is_empty() {
        out.push_str(&format!("    {}\n", style.dim("Aggregated from web search")));
    } else {
        for source in result.sources.iter().take(props.max_sources) {
            out.push_str(&format!(
                "    ↗ {} <{}>\n",
                truncate(&source.title, SOURCE_TITLE_WIDTH),
                source.url
            ));
        }
    }
    out.push_str(&format!("  {}\n", rule));
    out
}

/// Inline images are far too long to print, so only their size is shown.
fn describe_image(image_url: &str) -> String {
    match image_url.strip_prefix(JPEG_DATA_URL_PREFIX) {
        Some(payload) => format!("inline JPEG illustration ({} bytes)", payload.len() * 3 / 4),
        None => image_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::Source;

    fn result_with_sources(count: usize) -> NewsResult {
        NewsResult {
            country: "Japan".to_string(),
            headline: "Quake hits Tokyo".to_string(),
            summary: "A moderate earthquake...".to_string(),
            image_url: "data:image/jpeg;base64,/9j/4AAQ".to_string(),
            sources: (1..=count)
                .map(|i| Source {
                    title: format!("Outlet {}", i),
                    url: format!("https://news.example/{}", i),
                })
                .collect(),
            timestamp: "3/7/2025".to_string(),
        }
    }

    fn render(result: &NewsResult) -> String {
        render_news_card(
            &NewsCardProps {
                result,
                max_sources: 3,
            },
            &Style::plain(),
        )
    }

    #[test]
    fn card_shows_story_fields() {
        let text = render(&result_with_sources(1));

        assert!(text.contains("⌖ JAPAN"));
        assert!(text.contains("3/7/2025"));
        assert!(text.contains("AI ANALYSIS"));
        assert!(text.contains("Quake hits Tokyo"));
        assert!(text.contains("A moderate earthquake..."));
        assert!(text.contains("↗ Outlet 1 <https://news.example/1>"));
    }

    #[test]
    fn card_lists_at_most_max_sources() {
        let text = render(&result_with_sources(5));

        assert!(text.contains("Outlet 3"));
        assert!(!text.contains("Outlet 4"));
    }

    #[test]
    fn card_without_sources_says_aggregated() {
        let text = render(&result_with_sources(0));
        assert!(text.contains("Aggregated from web search"));
    }

    #[test]
    fn inline_image_is_summarised() {
        let text = render(&result_with_sources(0));
        assert!(text.contains("inline JPEG illustration (6 bytes)"));
        assert!(!text.contains("/9j/4AAQ"));
    }

    #[test]
    fn placeholder_image_url_is_printed() {
        let mut result = result_with_sources(0);
        result.image_url = "https://picsum.photos/800/450?blur=2".to_string();

        assert!(render(&result).contains("https://picsum.photos/800/450?blur=2"));
    }
}
