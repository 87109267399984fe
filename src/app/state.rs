//! Application state structures.
//!
//! This module contains the state definitions for the different parts of
//! the application:
//!
//! - **`AppMode`**: the top-level state machine
//! - **`AppEvent`**: completion events sent back from the fetch task
//! - **`SearchState`**: single-line dish-name editor
//! - **`HeroState`**: suggestion chip / category highlight on the hero screen
//! - **`LoadingState`**: spinner and rotating-message animation
//! - **`RecipeViewState`**: checklist, stepper and tip state derived from a recipe

use std::time::{Duration, Instant};

use crate::recipe::Recipe;
use crate::suggestions::{self, SUGGESTIONS};
use crate::tui::widgets::LOADING_MESSAGES;

/// How long each loading message stays on screen.
const MESSAGE_ROTATE_INTERVAL: Duration = Duration::from_millis(2500);

/// Top-level application mode.
///
/// The mode is the app's state machine made explicit:
/// `Hero → Loading → {Recipe, Error}`; from `Recipe`, acknowledging the
/// last method step leads to `Celebration`, and dismissing that resets to
/// `Hero`. `Error` and `Recipe` can re-enter `Loading` via a new search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Idle hero screen: title, search bar, suggestions, categories.
    #[default]
    Hero,
    /// A request is in flight; the mascot is shown.
    Loading,
    /// A recipe is on screen.
    Recipe,
    /// The last request failed; the banner is shown.
    Error,
    /// Celebration overlay after finishing the guided cooking flow.
    Celebration,
}

impl AppMode {
    /// True while a request is outstanding.
    ///
    /// This is the single-slot in-flight guard: submits are rejected while
    /// it holds.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Events sent from the fetch task to the UI.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A recipe arrived for the request with this generation.
    RecipeReady {
        /// Generation stamped when the request was accepted.
        generation: u64,
        /// The parsed recipe.
        recipe: Box<Recipe>,
    },
    /// The request with this generation failed.
    RecipeFailed {
        /// Generation stamped when the request was accepted.
        generation: u64,
        /// Human-readable failure surfaced in the banner.
        message: String,
    },
}

impl AppEvent {
    /// The generation this event belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::RecipeReady { generation, .. } | Self::RecipeFailed { generation, .. } => {
                *generation
            }
        }
    }
}

/// Single-line editor for the dish name.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    value: String,
    /// Cursor position as a character index into `value`.
    cursor: usize,
}

impl SearchState {
    /// Current input text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Input text with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Cursor position (character index).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the whole input and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = self.byte_index(self.cursor - 1);
        self.value.remove(byte_idx);
        self.cursor -= 1;
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Clears the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

/// Highlight state for the hero screen's pick lists.
///
/// The six suggestion chips and six category cards form one linear list:
/// indices `0..6` are chips, `6..12` are categories. `None` means the
/// search bar has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroState {
    /// Currently highlighted pick, if any.
    pub highlighted: Option<usize>,
}

impl HeroState {
    /// Total number of selectable picks.
    #[must_use]
    pub fn pick_count() -> usize {
        SUGGESTIONS.len() + suggestions::categories().len()
    }

    /// Moves the highlight down, entering the list from the search bar.
    pub fn highlight_next(&mut self) {
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(Self::pick_count() - 1),
        });
    }

    /// Moves the highlight up, returning to the search bar from the top.
    pub fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Clears the highlight (focus returns to the search bar).
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// The search term for the highlighted pick, if any.
    #[must_use]
    pub fn highlighted_term(&self) -> Option<&'static str> {
        let idx = self.highlighted?;
        if idx < SUGGESTIONS.len() {
            SUGGESTIONS.get(idx).copied()
        } else {
            suggestions::categories()
                .get(idx - SUGGESTIONS.len())
                .map(|c| c.search_term)
        }
    }
}

/// Animation state for the loading screen.
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Tick counter driving the spinner and the mascot's tail.
    pub tick: usize,
    message_index: usize,
    last_rotate: Instant,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            tick: 0,
            message_index: 0,
            last_rotate: Instant::now(),
        }
    }
}

impl LoadingState {
    /// Advances the animation; called once per event-loop iteration.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.last_rotate.elapsed() >= MESSAGE_ROTATE_INTERVAL {
            self.advance_message();
            self.last_rotate = Instant::now();
        }
    }

    /// Rotates to the next message, wrapping at the end of the list.
    pub fn advance_message(&mut self) {
        self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
    }

    /// The message currently on screen.
    #[must_use]
    pub fn current_message(&self) -> &'static str {
        LOADING_MESSAGES[self.message_index]
    }
}

/// Which pane of the recipe view has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipePane {
    /// The ingredient checklist on the left.
    #[default]
    Ingredients,
    /// The method/equipment/notes column on the right.
    Method,
}

impl RecipePane {
    /// The other pane.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Ingredients => Self::Method,
            Self::Method => Self::Ingredients,
        }
    }
}

/// UI state derived from a recipe at render time.
///
/// All of this is local and ephemeral: it is rebuilt from scratch for each
/// new recipe and discarded on reset.
#[derive(Debug, Clone)]
pub struct RecipeViewState {
    /// Checkbox per ingredient, parallel to `recipe.ingredients`.
    pub checked: Vec<bool>,
    /// Highlighted row in the ingredient checklist.
    pub selected_ingredient: usize,
    /// Which pane receives navigation keys.
    pub focus: RecipePane,
    /// True once the guided cooking flow has started.
    pub cooking: bool,
    /// Current method step, `0..method.len()`.
    pub step_index: usize,
    /// Whether the current step's tip callout is expanded.
    pub tip_open: bool,
    /// Scroll offset of the right-hand column (in rows).
    pub scroll: u16,
}

impl RecipeViewState {
    /// Builds view state for a freshly fetched recipe.
    #[must_use]
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            checked: vec![false; recipe.ingredients.len()],
            selected_ingredient: 0,
            focus: RecipePane::default(),
            cooking: false,
            step_index: 0,
            tip_open: false,
            scroll: 0,
        }
    }

    /// Toggles the checkbox of the highlighted ingredient.
    pub fn toggle_selected(&mut self) {
        if let Some(slot) = self.checked.get_mut(self.selected_ingredient) {
            *slot = !*slot;
        }
    }

    /// Moves the ingredient highlight down, clamped to the list.
    pub fn select_next_ingredient(&mut self) {
        let max = self.checked.len().saturating_sub(1);
        self.selected_ingredient = (self.selected_ingredient + 1).min(max);
    }

    /// Moves the ingredient highlight up.
    pub fn select_prev_ingredient(&mut self) {
        self.selected_ingredient = self.selected_ingredient.saturating_sub(1);
    }

    /// Opens the guided cooking flow at the first step.
    pub fn start_cooking(&mut self) {
        self.cooking = true;
        self.step_index = 0;
        self.tip_open = false;
    }

    /// True exactly at the first step (Previous is unavailable here).
    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    /// True exactly at the last step (Next becomes the finish action here).
    #[must_use]
    pub fn is_last_step(&self, method_len: usize) -> bool {
        self.step_index + 1 >= method_len
    }

    /// Advances one step, clamped to `method_len - 1`. Collapses the tip.
    pub fn next_step(&mut self, method_len: usize) {
        if !self.is_last_step(method_len) {
            self.step_index += 1;
            self.tip_open = false;
        }
    }

    /// Goes back one step, clamped at the first. Collapses the tip.
    pub fn prev_step(&mut self) {
        if !self.is_first_step() {
            self.step_index -= 1;
            self.tip_open = false;
        }
    }

    /// Expands or collapses the current step's tip callout.
    pub fn toggle_tip(&mut self) {
        self.tip_open = !self.tip_open;
    }

    /// Scrolls the right-hand column up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls the right-hand column down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}




#[cfg(test)]
mod recipe_view_tests {
    use super::*;
    use crate::llm::test_fixtures::sample_recipe;

    #[test]
    fn checked_array_matches_ingredient_count() {
        let recipe = sample_recipe();
        let view = RecipeViewState::new(&recipe);
        assert_eq!(view.checked.len(), recipe.ingredients.len());
        assert!(
            view.checked.iter().all(|c| !c),
            "everything starts unchecked"
        );
    }

    #[test]
    fn toggle_flips_only_the_selected_ingredient() {
        let recipe = sample_recipe();
        let mut view = RecipeViewState::new(&recipe);

        view.select_next_ingredient();
        view.toggle_selected();

        assert!(!view.checked[0]);
        assert!(view.checked[1]);
        assert!(!view.checked[2]);

        view.toggle_selected();
        assert!(!view.checked[1], "toggling twice restores the box");
    }

    #[test]
    fn ingredient_selection_is_clamped() {
        let recipe = sample_recipe();
        let mut view = RecipeViewState::new(&recipe);

        for _ in 0..10 {
            view.select_next_ingredient();
        }
        assert_eq!(view.selected_ingredient, recipe.ingredients.len() - 1);

        for _ in 0..10 {
            view.select_prev_ingredient();
        }
        assert_eq!(view.selected_ingredient, 0);
    }

    #[test]
    fn stepper_clamps_at_both_ends() {
        let recipe = sample_recipe();
        let len = recipe.method.len();
        let mut view = RecipeViewState::new(&recipe);
        view.start_cooking();

        assert!(view.is_first_step());
        view.prev_step();
        assert_eq!(view.step_index, 0, "Previous at step 0 is a no-op");

        view.next_step(len);
        view.next_step(len);
        assert!(view.is_last_step(len));

        view.next_step(len);
        assert_eq!(view.step_index, len - 1, "Next at the last step is a no-op");
    }

    #[test]
    fn every_step_is_reachable() {
        let recipe = sample_recipe();
        let len = recipe.method.len();
        let mut view = RecipeViewState::new(&recipe);
        view.start_cooking();

        let mut visited = vec![view.step_index];
        while !view.is_last_step(len) {
            view.next_step(len);
            visited.push(view.step_index);
        }
        assert_eq!(visited, vec![0, 1, 2], "stepper reaches 0..method.len()");
    }

    #[test]
    fn navigation_collapses_an_open_tip() {
        let recipe = sample_recipe();
        let len = recipe.method.len();
        let mut view = RecipeViewState::new(&recipe);
        view.start_cooking();

        view.toggle_tip();
        assert!(view.tip_open);

        view.next_step(len);
        assert!(!view.tip_open, "moving on closes the tip callout");
    }

    #[test]
    fn start_cooking_resets_to_the_first_step() {
        let recipe = sample_recipe();
        let mut view = RecipeViewState::new(&recipe);
        view.step_index = 2;
        view.start_cooking();
        assert_eq!(view.step_index, 0);
        assert!(view.cooking);
    }
}
