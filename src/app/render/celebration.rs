//! Celebration popup rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::app::layout::centered_popup;

impl App {
    /// Renders the celebration dialog as a centered overlay.
    pub(crate) fn render_celebration(&self, frame: &mut Frame) {
        let popup_area = centered_popup(56, 11, frame.area());

        // Clear background
        frame.render_widget(Clear, popup_area);

        let content_lines = vec![
            Line::from(""),
            Line::from(Span::styled("✶ Woohoo, Chef! ✶", self.theme.header_style())),
            Line::from(""),
            Line::from(Span::styled(
                "You've successfully created a masterpiece.",
                self.theme.normal_style(),
            )),
            Line::from(Span::styled(
                "Time for the best part - enjoying it!",
                self.theme.normal_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter] ", self.theme.highlight_style()),
                Span::styled("Cook Another Masterpiece", self.theme.success_style()),
            ]),
        ];

        let block = Block::default()
            .title(" Kitchen Closed ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.highlight_style());

        let paragraph = Paragraph::new(content_lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
    }
}
