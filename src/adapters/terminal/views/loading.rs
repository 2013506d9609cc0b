//! Loading indicator view.

use crate::domain::search::LoadingState;

use super::style::Style;

/// Phase-specific progress copy; `None` when nothing is loading.
pub fn render_loading(phase: LoadingState, style: &Style) -> Option<String> {
    let (title, detail) = match phase {
        LoadingState::Searching => (
            "Scanning Global Headlines...",
            "Searching reliable sources for the most impactful story of the last 24 hours.",
        ),
        LoadingState::GeneratingImage => (
            "Designing Editorial Artwork...",
            "Using Imagen to generate a unique visual representation of the event.",
        ),
        LoadingState::Idle | LoadingState::Complete | LoadingState::Error => return None,
    };

    Some(format!(
        "\n  {} {}\n  {}\n",
        style.accent("◌"),
        style.bold(title),
        style.dim(detail)
    ))
}
