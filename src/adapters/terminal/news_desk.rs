//! NewsDesk - the root component of the terminal front end.
//!
//! Owns the only [`SearchState`], feeds every event through the reducer and
//! re-renders the page after each accepted transition. The two handler steps
//! are awaited one after the other, with `HeadlineFound` dispatched in between
//! so the page can show the image phase.

use std::io::{self, Write};

use chrono::{Datelike, Local};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::info;

use crate::application::FetchStoryHandler;
use crate::config::DisplayConfig;
use crate::domain::search::{SearchAction, SearchState};

use super::views::render_page;

pub struct NewsDesk {
    handler: FetchStoryHandler,
    display: DisplayConfig,
    state: SearchState,
}

impl NewsDesk {
    pub fn new(handler: FetchStoryHandler, display: DisplayConfig) -> Self {
        Self {
            handler,
            display,
            state: SearchState::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The page for the current state.
    pub fn render(&self) -> String {
        render_page(&self.state, &self.display, Local::now().year())
    }

    /// Handles one form submission end to end.
    ///
    /// Returns `false` if the input was rejected (empty, or a request is
    /// already in flight); nothing is rendered in that case. The search
    /// always runs to `Complete` or `Error`; a failed frame write is
    /// reported only after the final state has been reached.
    pub async fn submit<W: Write>(&mut self, input: &str, out: &mut W) -> io::Result<bool> {
        if !self.apply(SearchAction::Submit(input.to_string())) {
            return Ok(false);
        }
        let mut rendered = self.present(out);

        let Some(country) = self.state.query().map(|c| c.as_str().to_string()) else {
            return rendered.map(|_| true);
        };

        let outcome = match self.handler.search(&country).await {
            Ok(draft) => {
                if self.apply(SearchAction::HeadlineFound) {
                    rendered = rendered.and(self.present(out));
                }
                self.handler.illustrate(draft).await
            }
            Err(err) => Err(err),
        };

        let action = match outcome {
            Ok(result) => SearchAction::StoryReady(result),
            Err(err) => SearchAction::StoryFailed(Some(err.to_string())),
        };
        if self.apply(action) {
            rendered = rendered.and(self.present(out));
        }
        rendered.map(|_| true)
    }

    /// Reduces and stores. Returns whether the state changed.
    fn apply(&mut self, action: SearchAction) -> bool {
        let next = self.state.reduce(action);
        if next == self.state {
            return false;
        }

        info!(from = ?self.state.phase(), to = ?next.phase(), "Search state changed");
        self.state = next;
        true
    }

    /// Writes one frame for the current state.
    fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.display.color {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(out, "{}", self.render())?;
        out.flush()
    }
}
