//! Styling and text layout shared by the views.
//!
//! Colours and attributes come from `crossterm::style`; word wrapping and
//! truncation are done by rendering a ratatui `Paragraph` into an off-screen
//! buffer and reading the rows back.

use crossterm::style::{style, Attribute, Color, StyledContent, Stylize};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::domain::search::Accent;

/// Colour settings for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub accent: Accent,
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self {
            accent: Accent::default(),
            color: false,
        }
    }

    pub fn colored(accent: Accent) -> Self {
        Self { accent, color: true }
    }

    /// Text in the accent colour.
    pub fn accent(&self, text: &str) -> String {
        let code = self.accent.ansi_code();
        self.paint(text, |content| content.with(Color::AnsiValue(code)))
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |content| content.attribute(Attribute::Bold))
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |content| content.attribute(Attribute::Dim))
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |content| content.with(Color::DarkRed))
    }

    fn paint<'a>(
        &self,
        text: &'a str,
        apply: impl FnOnce(StyledContent<&'a str>) -> StyledContent<&'a str>,
    ) -> String {
        if self.color {
            apply(style(text)).to_string()
        } else {
            text.to_string()
        }
    }
}

// Marks cells the paragraph never wrote: row tails and the shadow of wide glyphs.
const UNWRITTEN: &str = "\u{0}";

/// Word-wraps `text` to `width` columns, keeping blank lines between paragraphs.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = clamp_columns(width);
    // A wrapped row always holds at least one character.
    let rows = text.chars().count() + text.lines().count() + 1;
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .min(u16::MAX / width);

    let mut lines = render_rows(
        Paragraph::new(text).wrap(Wrap { trim: true }),
        Rect::new(0, 0, width, height),
    );
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Shortens `text` to at most `max` columns, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if Line::raw(text).width() <= max {
        return text.to_string();
    }
    let kept = clamp_columns(max).saturating_sub(1);
    let row = render_rows(Paragraph::new(text), Rect::new(0, 0, kept, 1))
        .into_iter()
        .next()
        .unwrap_or_default();
    format!("{}…", row)
}

fn clamp_columns(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX).max(1)
}

fn render_rows(paragraph: Paragraph<'_>, area: Rect) -> Vec<String> {
    let mut blank = Cell::default();
    blank.set_symbol(UNWRITTEN);
    let mut buffer = Buffer::filled(area, &blank);
    paragraph.render(area, &mut buffer);

    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer.get(x, y).symbol())
                .filter(|symbol| *symbol != UNWRITTEN)
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_adds_no_escapes() {
        let style = Style::plain();
        assert_eq!(style.accent("Pulse"), "Pulse");
        assert_eq!(style.bold("x"), "x");
        assert_eq!(style.error("x"), "x");
    }

    #[test]
    fn colored_style_uses_accent_code() {
        let painted = Style::colored(Accent::Teal).accent("Pulse");

        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("38;5;30m"));
        assert!(painted.contains("Pulse"));
        assert!(!painted.ends_with("Pulse"));
    }

    #[test]
    fn colored_bold_sets_attribute() {
        let painted = Style::colored(Accent::Teal).bold("Headline");

        assert!(painted.contains("\x1b[1m"));
        assert!(painted.contains("Headline"));
    }

    #[test]
    fn wrap_text_breaks_on_words() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_text_keeps_paragraph_breaks() {
        let lines = wrap_text("first\n\nsecond", 20);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn wrap_text_short_text_is_one_line() {
        assert_eq!(wrap_text("Quake hits Tokyo", 72), vec!["Quake hits Tokyo"]);
    }

    #[test]
    fn wrap_text_keeps_wide_glyphs_together() {
        assert_eq!(wrap_text("東京 地震", 20), vec!["東京 地震"]);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Example News Network", 8), "Example…");
        assert_eq!(truncate("Short", 8), "Short");
    }
}
