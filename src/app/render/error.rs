//! Error banner rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::app::layout::results_layout;

impl App {
    /// Renders the failure screen: live search bar plus the error banner.
    pub(crate) fn render_error(&self, frame: &mut Frame) {
        let layout = results_layout(frame.area());

        self.render_search_bar(frame, layout.search, true);

        let message = self.error.as_deref().unwrap_or("Something went wrong.");
        let banner = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Oh no, the tadka didn't take!",
                self.theme.error_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(message, self.theme.normal_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Adjust the dish name and press Enter to try again.",
                self.theme.muted_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.error_style())
                .title(" Error "),
        );
        frame.render_widget(banner, layout.body);

        self.render_footer(
            frame,
            layout.footer,
            &[("Enter", "Retry  "), ("Esc", "Back  "), ("Ctrl+C", "Quit")],
        );
    }
}
