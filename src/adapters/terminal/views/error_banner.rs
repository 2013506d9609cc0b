use super::style::Style;

/// Banner shown when a search failed.
pub fn render_error_banner(message: &str, style: &Style) -> String {
    format!(
        "\n  {} {}\n    {}\n",
        style.error("✖"),
        style.error(&style.bold("Generation Failed")),
        message
    )
}
