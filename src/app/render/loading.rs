//! Loading screen rendering.

use ratatui::Frame;

use crate::app::App;
use crate::app::layout::results_layout;
use crate::tui::widgets::MascotWidget;

impl App {
    /// Renders the loading screen: collapsed search bar plus the mascot.
    pub(crate) fn render_loading(&self, frame: &mut Frame) {
        let layout = results_layout(frame.area());

        // The input is read-only while the request is in flight.
        self.render_search_bar(frame, layout.search, false);

        let mascot = MascotWidget::new(
            self.loading.tick,
            self.loading.current_message(),
            &self.theme,
        );
        frame.render_widget(mascot, layout.body);

        self.render_footer(frame, layout.footer, &[("Ctrl+C", "Quit")]);
    }
}
