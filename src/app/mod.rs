//! Main application state and logic.
//!
//! This module contains the core `App` struct and its implementation,
//! organized into submodules:
//! - `state` - Application state structures
//! - `events` - Key handling per mode
//! - `layout` - Screen layout calculations
//! - `render` - UI rendering
//!
//! ## Application Modes
//!
//! The application moves through five modes (see [`AppMode`]): the idle
//! hero screen, the loading screen, the recipe view, the error banner,
//! and the celebration overlay. All transitions go through methods on
//! [`App`], so the state machine lives in one place and the tests can
//! drive it without a terminal.

pub mod events;
pub mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::llm::RecipeFetcher;
use crate::recipe::Recipe;
use crate::tui::Theme;

pub use self::state::{
    AppEvent, AppMode, HeroState, LoadingState, RecipePane, RecipeViewState, SearchState,
};

/// Channel buffer size for fetch events.
///
/// One request is outstanding at a time, so this never fills in practice;
/// the headroom just keeps `try_send` from ever failing.
const EVENT_CHANNEL_SIZE: usize = 16;

/// Main application state.
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// Recipe fetcher, shared with spawned fetch tasks.
    fetcher: Arc<RecipeFetcher>,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Current application mode.
    pub(crate) mode: AppMode,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Event Channel
    // =========================================================================
    /// Event receiver for fetch results.
    event_rx: mpsc::Receiver<AppEvent>,
    /// Event sender (cloned into fetch tasks).
    event_tx: mpsc::Sender<AppEvent>,
    /// Generation of the most recently accepted request. Completion events
    /// with any other generation are stale and get discarded.
    generation: u64,

    // =========================================================================
    // Component States
    // =========================================================================
    /// Dish-name search input.
    pub(crate) search: SearchState,
    /// Suggestion/category highlight on the hero screen.
    pub(crate) hero: HeroState,
    /// Loading animation state.
    pub(crate) loading: LoadingState,
    /// The recipe currently on screen, if any.
    pub(crate) recipe: Option<Recipe>,
    /// View state derived from `recipe` (checklist, stepper).
    pub(crate) view: Option<RecipeViewState>,
    /// Error message for the banner, if the last request failed.
    pub(crate) error: Option<String>,
}

impl App {
    /// Creates a new application instance around a fetcher.
    #[must_use]
    pub fn new(fetcher: RecipeFetcher) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        Self {
            fetcher: Arc::new(fetcher),
            theme: Theme::default(),
            mode: AppMode::default(),
            should_quit: false,
            event_rx,
            event_tx,
            generation: 0,
            search: SearchState::default(),
            hero: HeroState::default(),
            loading: LoadingState::default(),
            recipe: None,
            view: None,
            error: None,
        }
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current application mode.
    #[must_use]
    pub const fn mode(&self) -> AppMode {
        self.mode
    }

    /// The recipe currently on screen.
    #[must_use]
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// The current error banner message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Gets a clone of the event sender (used by tests to inject events).
    #[must_use]
    pub fn event_sender(&self) -> mpsc::Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Requests application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Search / Fetch
    // =========================================================================

    /// Submits the current search input.
    ///
    /// A no-op when the trimmed input is empty or a request is already in
    /// flight. Otherwise clears the previous result, enters `Loading`, and
    /// spawns the fetch task.
    pub fn submit_search(&mut self) {
        let dish = self.search.trimmed().to_string();
        if dish.is_empty() || self.mode.is_loading() {
            return;
        }

        self.begin_request(&dish);
    }

    /// Fills the search input with a suggestion and submits immediately.
    ///
    /// Shortcut used by the suggestion chips and category cards; it goes
    /// through the exact same transition as a manual submit.
    pub fn search_for(&mut self, dish: &str) {
        self.search.set_value(dish);
        self.submit_search();
    }

    /// Performs the loading transition and spawns the fetch task.
    fn begin_request(&mut self, dish: &str) {
        self.mode = AppMode::Loading;
        self.recipe = None;
        self.view = None;
        self.error = None;
        self.loading = LoadingState::default();
        self.hero.clear_highlight();
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.event_tx.clone();
        let dish = dish.to_string();

        tokio::spawn(async move {
            let event = match fetcher.fetch(&dish).await {
                Ok(recipe) => AppEvent::RecipeReady {
                    generation,
                    recipe: Box::new(recipe),
                },
                Err(err) => AppEvent::RecipeFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            // The receiver only disappears on shutdown; nothing to do then.
            let _ = tx.send(event).await;
        });
    }

    /// Processes pending fetch events.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if event.generation() != self.generation {
                // Stale completion from a superseded request.
                continue;
            }
            match event {
                AppEvent::RecipeReady { recipe, .. } => {
                    self.view = Some(RecipeViewState::new(&recipe));
                    self.recipe = Some(*recipe);
                    self.error = None;
                    self.mode = AppMode::Recipe;
                }
                AppEvent::RecipeFailed { message, .. } => {
                    self.error = Some(message);
                    self.mode = AppMode::Error;
                }
            }
        }
    }

    /// Processes periodic work (loading animation).
    ///
    /// Called once per event-loop iteration.
    pub fn tick(&mut self) {
        if self.mode.is_loading() {
            self.loading.tick();
        }
    }

    // =========================================================================
    // Flow Transitions
    // =========================================================================

    /// Shows the celebration overlay.
    ///
    /// Only reachable by acknowledging the last method step; the key
    /// handler enforces that.
    pub(crate) fn finish_cooking(&mut self) {
        self.mode = AppMode::Celebration;
    }

    /// Resets everything back to the idle hero screen.
    ///
    /// Dismissing the celebration lands here: recipe, view state, error
    /// and search term are all discarded.
    pub(crate) fn reset(&mut self) {
        self.mode = AppMode::Hero;
        self.recipe = None;
        self.view = None;
        self.error = None;
        self.search.clear();
        self.hero.clear_highlight();
    }

    /// Returns to the search flow, keeping the current term.
    ///
    /// Used from the recipe view and the error banner so the user can
    /// adjust the query and try again.
    pub(crate) fn back_to_search(&mut self) {
        self.mode = AppMode::Hero;
        self.recipe = None;
        self.view = None;
        self.error = None;
    }
}
