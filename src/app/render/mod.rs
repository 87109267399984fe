//! Rendering methods for the App.
//!
//! One submodule per screen:
//! - **hero**: title, tagline, search bar, suggestion chips, categories
//! - **loading**: collapsed search bar + animated mascot
//! - **recipe**: checklist column + details column
//! - **error**: collapsed search bar + failure banner
//! - **celebration**: popup overlay on top of the recipe view

mod celebration;
mod error;
mod hero;
mod loading;
mod recipe;

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{App, AppMode};

/// Placeholder shown in the empty search input.
const SEARCH_PLACEHOLDER: &str = "What masterpiece will you create today?";

impl App {
    /// Renders the application UI for the current mode.
    pub fn render(&self, frame: &mut Frame) {
        match self.mode {
            AppMode::Hero => self.render_hero(frame),
            AppMode::Loading => self.render_loading(frame),
            AppMode::Recipe => self.render_recipe(frame),
            AppMode::Error => self.render_error(frame),
            AppMode::Celebration => {
                // Recipe view stays visible behind the popup.
                self.render_recipe(frame);
                self.render_celebration(frame);
            }
        }
    }

    /// Renders the bordered search input into `area`.
    ///
    /// When `editable` is true the terminal cursor is placed at the input
    /// cursor position.
    pub(crate) fn render_search_bar(&self, frame: &mut Frame, area: Rect, editable: bool) {
        let block = Block::default()
            .title(" Search ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);

        let content = if self.search.value().is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, self.theme.placeholder_style()))
        } else {
            Line::from(Span::styled(self.search.value(), self.theme.normal_style()))
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if editable {
            // Measure display columns, not chars, so wide glyphs keep the
            // cursor aligned.
            let prefix: String = self.search.value().chars().take(self.search.cursor()).collect();
            #[allow(clippy::cast_possible_truncation)] // dish names fit in a terminal row
            let cursor_x = inner.x + UnicodeWidthStr::width(prefix.as_str()) as u16;
            frame.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));
        }
    }

    /// Renders a single-line footer with key hints.
    pub(crate) fn render_footer(&self, frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(format!(" [{key}] "), self.theme.highlight_style()));
            spans.push(Span::styled((*action).to_string(), self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
