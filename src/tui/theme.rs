//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with consistent colors and styles.
///
/// The palette leans warm: a saffron accent over neutral text, with the
/// usual semantic colors for success and failure states.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Saffron accent used for titles, highlights and the stepper.
    pub accent: Color,
    /// Softer companion to the accent (tips, badges).
    pub accent_soft: Color,
    /// Success color.
    pub success: Color,
    /// Error color.
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Rgb(0xf9, 0x73, 0x16),
            accent_soft: Color::Rgb(0xfd, 0xba, 0x74),
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl Theme {
    /// Style for titles and section headers.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the currently selected chip, card or list row.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error banners.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for success text (checked items, the celebration).
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for a checked-off ingredient line.
    #[must_use]
    pub fn checked_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for tip callouts and equipment alternatives.
    #[must_use]
    pub fn tip_style(&self) -> Style {
        Style::default().fg(self.accent_soft)
    }

    /// Style for the prep-time badge.
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.accent_soft)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for placeholder text in the search input.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_saffron_accent() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0xf9, 0x73, 0x16));
        assert_eq!(theme.fg, Color::White);
    }

    #[test]
    fn checked_style_crosses_out() {
        let theme = Theme::default();
        assert!(
            theme
                .checked_style()
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn header_style_is_bold_accent() {
        let theme = Theme::default();
        let style = theme.header_style();
        assert_eq!(style.fg, Some(theme.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
