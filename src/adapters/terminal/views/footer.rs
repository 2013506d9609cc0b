use super::style::Style;

pub fn render_footer(year: i32, style: &Style) -> String {
    style.dim(&format!(
        "  © {} Global Pulse. Powered by Google Gemini & Imagen.\n",
        year
    ))
}
