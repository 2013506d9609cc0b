use super::style::Style;

/// Branding line.
pub fn render_header(style: &Style) -> String {
    format!("  {} {}{}\n", style.accent("◉"), style.bold("Global"), style.accent("Pulse"))
}
