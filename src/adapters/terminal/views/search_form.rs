//! Search prompt view.

use super::style::Style;

/// Props for the search prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFormProps<'a> {
    /// A request is in flight; the form is disabled.
    pub is_loading: bool,
    /// Show the hero question (idle, nothing on screen yet).
    pub show_hero: bool,
    /// Country of the current query, shown while disabled.
    pub query: Option<&'a str>,
}

pub const PLACEHOLDER: &str = "Enter a country (e.g., Japan, Brazil)...";
pub const TAGLINE: &str = "Discover AI-curated stories from the last 24 hours.";

pub fn render_search_form(props: &SearchFormProps<'_>, style: &Style) -> String {
    let mut out = String::new();

    if props.show_hero {
        out.push_str(&format!("\n  {}\n", style.bold("What's happening in...")));
    }

    let field = match (props.is_loading, props.query) {
        (true, Some(query)) => format!("{}  {}", query, style.dim("[searching…]")),
        (true, None) => style.dim("[searching…]"),
        (false, _) => style.dim(PLACEHOLDER),
    };
    out.push_str(&format!("\n  {} {}\n", style.accent("⌕"), field));
    out.push_str(&format!("  {}\n", style.dim(TAGLINE)));
    out
}
