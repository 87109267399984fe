//! Key handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{AppMode, RecipePane};

impl App {
    /// Handles a key event, dispatching on the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Debug logging for key events (enable with RASOI_DEBUG_KEYS=1)
        if std::env::var("RASOI_DEBUG_KEYS").is_ok() {
            eprintln!(
                "[DEBUG KEY] mode={:?} code={:?} modifiers={:?}",
                self.mode, key.code, key.modifiers
            );
        }

        // Global: Ctrl+C quits from every mode.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Hero => self.handle_hero_key(key),
            AppMode::Loading => { /* no cancellation; the request runs to completion */ }
            AppMode::Recipe => self.handle_recipe_key(key),
            AppMode::Error => self.handle_error_key(key),
            AppMode::Celebration => self.handle_celebration_key(key),
        }
    }

    /// Handles key events on the hero screen.
    ///
    /// Key bindings:
    /// - Typing edits the search input (and clears any pick highlight)
    /// - `Down`/`Up` - move the highlight through chips and categories
    /// - `Enter` - search the highlighted pick, or submit the typed input
    /// - `Esc` - clear the highlight
    fn handle_hero_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(term) = self.hero.highlighted_term() {
                    self.search_for(term);
                } else {
                    self.submit_search();
                }
            }
            KeyCode::Down => self.hero.highlight_next(),
            KeyCode::Up => self.hero.highlight_prev(),
            KeyCode::Esc => self.hero.clear_highlight(),
            KeyCode::Backspace => {
                self.hero.clear_highlight();
                self.search.backspace();
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.hero.clear_highlight();
                self.search.insert(c);
            }
            _ => {}
        }
    }

    /// Handles key events in the recipe view.
    ///
    /// `Tab` switches between the ingredient checklist and the method
    /// column; the rest of the bindings depend on which pane has focus.
    fn handle_recipe_key(&mut self, key: KeyEvent) {
        // Back to the search flow, keeping the current term.
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('/')) {
            self.back_to_search();
            return;
        }

        let method_len = self.recipe.as_ref().map_or(0, |r| r.method.len());
        let Some(view) = &mut self.view else {
            return;
        };

        if key.code == KeyCode::Tab {
            view.focus = view.focus.toggled();
            return;
        }

        let mut finished = false;
        match view.focus {
            RecipePane::Ingredients => match key.code {
                KeyCode::Down | KeyCode::Char('j') => view.select_next_ingredient(),
                KeyCode::Up | KeyCode::Char('k') => view.select_prev_ingredient(),
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => view.toggle_selected(),
                _ => {}
            },
            RecipePane::Method => match key.code {
                // The method column starts behind the Start Cooking gate.
                KeyCode::Enter | KeyCode::Char(' ') if !view.cooking => view.start_cooking(),
                // Finish is only reachable from the last step.
                KeyCode::Enter if view.is_last_step(method_len) => finished = true,
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => view.next_step(method_len),
                KeyCode::Left | KeyCode::Char('p') => view.prev_step(),
                KeyCode::Char('t') => view.toggle_tip(),
                KeyCode::Down | KeyCode::Char('j') => view.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => view.scroll_up(),
                _ => {}
            },
        }

        if finished {
            self.finish_cooking();
        }
    }

    /// Handles key events while the error banner is shown.
    ///
    /// The search input stays live so the user can adjust the dish name
    /// and resubmit without leaving the screen.
    fn handle_error_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.back_to_search(),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.search.insert(c);
            }
            _ => {}
        }
    }

    /// Handles key events on the celebration overlay.
    ///
    /// Any of the dismiss keys performs the full reset back to the hero
    /// screen with an empty search term.
    fn handle_celebration_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.reset(),
            _ => {}
        }
    }
}
