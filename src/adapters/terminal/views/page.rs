//! Whole-page composition from the search state.

use crate::config::DisplayConfig;
use crate::domain::search::{LoadingState, SearchState};

use super::error_banner::render_error_banner;
use super::footer::render_footer;
use super::header::render_header;
use super::loading::render_loading;
use super::news_card::{render_news_card, NewsCardProps};
use super::search_form::{render_search_form, SearchFormProps};
use super::style::Style;

/// Renders every view the current state calls for.
pub fn render_page(state: &SearchState, display: &DisplayConfig, year: i32) -> String {
    let style = if display.color {
        Style::colored(state.accent())
    } else {
        Style::plain()
    };

    let mut page = render_header(&style);

    page.push_str(&render_search_form(
        &SearchFormProps {
            is_loading: state.is_loading(),
            show_hero: state.phase() == LoadingState::Idle && state.result().is_none(),
            query: state.query().map(|country| country.as_str()),
        },
        &style,
    ));

    if let Some(message) = state.error() {
        page.push_str(&render_error_banner(message, &style));
    }

    if let Some(loading) = render_loading(state.phase(), &style) {
        page.push_str(&loading);
    }

    if let (LoadingState::Complete, Some(result)) = (state.phase(), state.result()) {
        page.push_str(&render_news_card(
            &NewsCardProps {
                result,
                max_sources: display.max_sources,
            },
            &style,
        ));
    }

    page.push('\n');
    page.push_str(&render_footer(year, &style));
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::news::{Country, ImageReference, NewsResult};
    use crate::domain::search::SearchAction;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            color: false,
            ..Default::default()
        }
    }

    fn story() -> NewsResult {
        NewsResult::assemble(
            &Country::new("Japan").unwrap(),
            "Quake hits Tokyo",
            "A moderate earthquake...",
            &ImageReference::placeholder(),
            vec![],
            Timestamp::now(),
        )
    }

    #[test]
    fn idle_page_has_hero_and_no_card() {
        let page = render_page(&SearchState::new(), &plain(), 2025);

        assert!(page.contains("GlobalPulse"));
        assert!(page.contains("What's happening in..."));
        assert!(!page.contains("Scanning Global Headlines"));
        assert!(!page.contains("Generation Failed"));
        assert!(page.contains("© 2025 Global Pulse"));
    }

    #[test]
    fn searching_page_shows_loading() {
        let state = SearchState::new().reduce(SearchAction::Submit("Japan".to_string()));
        let page = render_page(&state, &plain(), 2025);

        assert!(page.contains("Scanning Global Headlines..."));
        assert!(!page.contains("What's happening in..."));
    }

    #[test]
    fn complete_page_shows_card() {
        let state = SearchState::new()
            .reduce(SearchAction::Submit("Japan".to_string()))
            .reduce(SearchAction::StoryReady(story()));
        let page = render_page(&state, &plain(), 2025);

        assert!(page.contains("Quake hits Tokyo"));
        assert!(!page.contains("Scanning Global Headlines"));
    }

    #[test]
    fn error_page_shows_banner_only() {
        let state = SearchState::new()
            .reduce(SearchAction::Submit("Japan".to_string()))
            .reduce(SearchAction::StoryFailed(Some("authentication failed".to_string())));
        let page = render_page(&state, &plain(), 2025);

        assert!(page.contains("Generation Failed"));
        assert!(page.contains("authentication failed"));
        assert!(!page.contains("AI ANALYSIS"));
    }

    #[test]
    fn plain_display_has_no_escapes() {
        let page = render_page(&SearchState::new(), &plain(), 2025);
        assert!(!page.contains('\x1b'));
    }
}
