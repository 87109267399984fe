//! Shared test utilities for the app module.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::app::{App, AppMode, RecipeViewState};
use crate::llm::test_fixtures::sample_recipe;
use crate::llm::{FakeSource, RecipeFetcher, RecipeSource};

/// Creates an app whose fetcher always returns the sample recipe.
pub fn test_app() -> App {
    test_app_with_sources(vec![Box::new(FakeSource::returning(sample_recipe()))])
}

/// Creates an app with explicit recipe sources.
pub fn test_app_with_sources(sources: Vec<Box<dyn RecipeSource>>) -> App {
    App::new(RecipeFetcher::from_sources(sources))
}

/// Creates an app already showing the sample recipe.
///
/// Skips the fetch entirely so synchronous tests can exercise the recipe
/// view without a runtime.
pub fn recipe_app() -> App {
    let mut app = test_app();
    let recipe = sample_recipe();
    app.view = Some(RecipeViewState::new(&recipe));
    app.recipe = Some(recipe);
    app.mode = AppMode::Recipe;
    app
}

/// Creates a [`KeyEvent`] for a plain key press.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a Ctrl+<char> key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Types a string into the app, one key event per character.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Pumps the event loop until the app leaves `Loading` (or gives up).
///
/// The fake sources resolve on their first poll, so a handful of yields is
/// plenty; the bound just keeps a broken test from spinning forever.
pub async fn settle(app: &mut App) {
    for _ in 0..100 {
        tokio::task::yield_now().await;
        app.process_events();
        if !app.mode().is_loading() {
            return;
        }
    }
    panic!("app did not leave Loading within the yield budget");
}

/// Renders the app into a `TestBackend` terminal.
pub fn render_app_to_terminal(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

/// Flattens the terminal buffer into a single string for `contains` checks.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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
