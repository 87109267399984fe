//! Screen layout calculations.
//!
//! Pure functions from a terminal area to named regions, so the render
//! code and the tests agree on where everything goes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the hero screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroLayout {
    /// Banner title block.
    pub title: Rect,
    /// Tagline under the title.
    pub tagline: Rect,
    /// Search input (bordered, 3 rows).
    pub search: Rect,
    /// Suggestion chips + category cards.
    pub picks: Rect,
    /// Key-hint footer.
    pub footer: Rect,
}

/// Regions of the collapsed results screens (loading, error, recipe).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsLayout {
    /// Compact search bar at the top.
    pub search: Rect,
    /// Main results body.
    pub body: Rect,
    /// Key-hint footer.
    pub footer: Rect,
}

/// The two columns of the recipe body.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeColumns {
    /// Ingredient checklist.
    pub ingredients: Rect,
    /// Dish header, equipment, method, notes.
    pub details: Rect,
}

/// Calculates the hero screen layout.
#[must_use]
pub fn hero_layout(area: Rect) -> HeroLayout {
    let [title, tagline, search, picks, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    HeroLayout {
        title,
        tagline,
        search,
        picks,
        footer,
    }
}

/// Calculates the collapsed results layout.
#[must_use]
pub fn results_layout(area: Rect) -> ResultsLayout {
    let [search, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    ResultsLayout {
        search,
        body,
        footer,
    }
}

/// Splits the recipe body into the checklist and details columns.
#[must_use]
pub fn recipe_columns(area: Rect) -> RecipeColumns {
    let [ingredients, details] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .areas(area);

    RecipeColumns {
        ingredients,
        details,
    }
}

/// Calculates a centered popup area, clamped to the screen.
#[must_use]
pub fn centered_popup(width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let x = screen.x + screen.width.saturating_sub(width) / 2;
    let y = screen.y + screen.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
