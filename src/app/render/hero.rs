//! Hero screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::layout::hero_layout;
use crate::suggestions::{self, SUGGESTIONS};

/// Banner shown at the top of the hero screen.
const BANNER: &[&str] = &[
    "",
    "✦ ✦ ✦   R A S O I   ✦ ✦ ✦",
    "─────────────────────────",
    "",
];

impl App {
    /// Renders the idle hero screen.
    pub(crate) fn render_hero(&self, frame: &mut Frame) {
        let layout = hero_layout(frame.area());

        // Title banner
        let title_lines: Vec<Line> = BANNER
            .iter()
            .map(|row| Line::from(Span::styled(*row, self.theme.header_style())))
            .collect();
        frame.render_widget(
            Paragraph::new(title_lines).alignment(Alignment::Center),
            layout.title,
        );

        // Tagline
        let tagline = vec![
            Line::from(Span::styled(
                "Your personal guide to home-style Indian cooking.",
                self.theme.muted_style(),
            )),
            Line::from(Span::styled(
                "What delicious dish will you make today?",
                self.theme.tip_style(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(tagline).alignment(Alignment::Center),
            layout.tagline,
        );

        self.render_search_bar(frame, layout.search, self.hero.highlighted.is_none());
        self.render_picks(frame, layout.picks);

        self.render_footer(
            frame,
            layout.footer,
            &[
                ("Enter", "Generate  "),
                ("↑/↓", "Browse picks  "),
                ("Ctrl+C", "Quit"),
            ],
        );
    }

    /// Renders the suggestion chips and category cards.
    fn render_picks(&self, frame: &mut Frame, area: Rect) {
        let [chips_area, categories_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .areas(area);

        self.render_chips(frame, chips_area);
        self.render_categories(frame, categories_area);
    }

    /// Renders the suggestion chips as one wrapped row.
    fn render_chips(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Or you can try one of these:  ",
            self.theme.muted_style(),
        )];
        for (i, dish) in SUGGESTIONS.iter().enumerate() {
            let style = if self.hero.highlighted == Some(i) {
                self.theme.highlight_style().reversed()
            } else {
                self.theme.normal_style()
            };
            spans.push(Span::styled(format!(" {dish} "), style));
            spans.push(Span::raw(" "));
        }

        let chips = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(chips, area);
    }

    /// Renders the category cards in a 3-wide grid.
    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let categories = suggestions::categories();
        let columns = 3;
        let rows = categories.len().div_ceil(columns);

        let row_constraints: Vec<Constraint> =
            (0..rows).map(|_| Constraint::Length(4)).collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let col_constraints: Vec<Constraint> = (0..columns)
                .map(|_| Constraint::Ratio(1, columns as u32))
                .collect();
            let col_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(col_constraints)
                .split(*row_area);

            for (col_idx, col_area) in col_areas.iter().enumerate() {
                let idx = row_idx * columns + col_idx;
                let Some(category) = categories.get(idx) else {
                    continue;
                };
                let highlighted = self.hero.highlighted == Some(SUGGESTIONS.len() + idx);

                let border_style = if highlighted {
                    self.theme.highlight_style()
                } else {
                    self.theme.border_style()
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);

                let card = Paragraph::new(vec![
                    Line::from(Span::styled(category.name, self.theme.normal_style())),
                    Line::from(Span::styled(category.description, self.theme.muted_style())),
                ])
                .alignment(Alignment::Center)
                .block(block);

                frame.render_widget(card, *col_area);
            }
        }
    }
}
