//! Loading mascot widget.
//!
//! While a recipe is being generated the results area shows a small dog
//! butler presenting a covered dish, a spinner, and a rotating status
//! message. The butler has two animation frames (the tail wags).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::Theme;

/// Messages rotated under the mascot while waiting for the model.
pub const LOADING_MESSAGES: &[&str] = &[
    "Stirring up your recipe magic...",
    "Adding a pinch of secret masala...",
    "Your rasoi is heating up...",
    "Smells good already, right?",
    "Just a tad more salt of patience...",
    "Plating your dish with love...",
    "Sprinkling the final garnish...",
    "Almost ready to serve, chef!",
    "Your tasty surprise is seconds away...",
];

/// Spinner frames advanced once per tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The butler with his tail to the left.
const BUTLER_FRAME_A: &[&str] = &[
    r"        __      __       ",
    r"       /  \.--./  \      ",
    r"       \  /'  '\  /      ",
    r"        | (o)(o) |       ",
    r"        |   ..   |  ___  ",
    r"        \  \__/  / (___) ",
    r"      ___'------'___|    ",
    r"  ~  /   | o==o |   \    ",
    r"     |   |  ##  |---'    ",
    r"     |___|______|        ",
    r"        d|    |b         ",
];

/// The butler with his tail to the right.
const BUTLER_FRAME_B: &[&str] = &[
    r"        __      __       ",
    r"       /  \.--./  \      ",
    r"       \  /'  '\  /      ",
    r"        | (o)(o) |       ",
    r"        |   ..   |  ___  ",
    r"        \  \__/  / (___) ",
    r"      ___'------'___|    ",
    r"     /   | o==o |   \  ~ ",
    r"     '---|  ##  |   |    ",
    r"         |______|___|    ",
    r"        d|    |b         ",
];

/// Headline shown above the rotating message.
const HEADLINE: &str = "Your Culinary Butler is on the job";

/// The animated loading mascot.
pub struct MascotWidget<'a> {
    /// Tick counter driving the tail wag and the spinner.
    tick: usize,
    /// Current rotating message.
    message: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> MascotWidget<'a> {
    /// Creates a mascot for the given animation tick and message.
    #[must_use]
    pub const fn new(tick: usize, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            tick,
            message,
            theme,
        }
    }

    /// Returns the art frame for the current tick (tail wags every 4 ticks).
    fn art(&self) -> &'static [&'static str] {
        if (self.tick / 4) % 2 == 0 {
            BUTLER_FRAME_A
        } else {
            BUTLER_FRAME_B
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }
}

impl Widget for MascotWidget<'_> {
    #[allow(clippy::cast_possible_truncation)] // art and messages fit a terminal row
    fn render(self, area: Rect, buf: &mut Buffer) {
        let art = self.art();

        // Vertically center art + blank line + headline + message.
        let content_height = art.len() as u16 + 3;
        let top = area.y + area.height.saturating_sub(content_height) / 2;

        let center = |width: u16| area.x + area.width.saturating_sub(width) / 2;

        for (i, row) in art.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.y + area.height {
                return;
            }
            let line = Line::from(Span::styled(*row, self.theme.tip_style()));
            buf.set_line(center(row.len() as u16), y, &line, area.width);
        }

        let headline_y = top + art.len() as u16 + 1;
        if headline_y < area.y + area.height {
            let headline = Line::from(vec![
                Span::styled(self.spinner(), self.theme.highlight_style()),
                Span::raw(" "),
                Span::styled(HEADLINE, self.theme.header_style()),
            ]);
            let width = (HEADLINE.len() + 2) as u16;
            buf.set_line(center(width), headline_y, &headline, area.width);
        }

        let message_y = headline_y + 1;
        if message_y < area.y + area.height {
            let message = Line::from(Span::styled(self.message, self.theme.normal_style()));
            buf.set_line(center(self.message.len() as u16), message_y, &message, area.width);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(tick: usize, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let widget = MascotWidget::new(tick, LOADING_MESSAGES[0], &theme);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_headline_and_message() {
        let screen = render(0, 60, 20);
        assert!(screen.contains(HEADLINE));
        assert!(screen.contains(LOADING_MESSAGES[0]));
    }

    #[test]
    fn tail_wags_between_frames() {
        // Frame A has the tail marker on the left, frame B on the right.
        let frame_a = render(0, 60, 20);
        let frame_b = render(4, 60, 20);
        assert_ne!(frame_a, frame_b, "animation frames should differ");
    }

    #[test]
    fn survives_a_tiny_area() {
        // Nothing to assert beyond "does not panic".
        let _ = render(0, 10, 3);
    }

    #[test]
    fn message_list_is_non_empty() {
        assert!(!LOADING_MESSAGES.is_empty());
        for message in LOADING_MESSAGES {
            assert!(!message.is_empty());
        }
    }
}
