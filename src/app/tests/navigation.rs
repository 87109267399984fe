//! Checklist and stepper key-handling tests.

use ratatui::crossterm::event::KeyCode;

use super::helpers::*;
use crate::app::state::RecipePane;
use crate::app::AppMode;

#[test]
fn tab_switches_pane_focus() {
    let mut app = recipe_app();
    assert_eq!(app.view.as_ref().unwrap().focus, RecipePane::Ingredients);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.view.as_ref().unwrap().focus, RecipePane::Method);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.view.as_ref().unwrap().focus, RecipePane::Ingredients);
}

#[test]
fn space_checks_off_the_selected_ingredient() {
    let mut app = recipe_app();

    app.handle_key(key(KeyCode::Char(' ')));
    assert!(app.view.as_ref().unwrap().checked[0]);

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' ')));
    let view = app.view.as_ref().unwrap();
    assert!(view.checked[0]);
    assert!(view.checked[1]);
    assert!(!view.checked[2]);
}

#[test]
fn method_pane_starts_behind_the_cooking_gate() {
    let mut app = recipe_app();
    app.handle_key(key(KeyCode::Tab));
    assert!(!app.view.as_ref().unwrap().cooking);

    app.handle_key(key(KeyCode::Enter));
    let view = app.view.as_ref().unwrap();
    assert!(view.cooking, "Enter opens the guided flow");
    assert_eq!(view.step_index, 0);
}

#[test]
fn arrows_walk_the_steps_with_clamping() {
    let mut app = recipe_app();
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Enter)); // start cooking

    // Previous at the first step is a no-op
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.view.as_ref().unwrap().step_index, 0);

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.view.as_ref().unwrap().step_index, 1);

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.view.as_ref().unwrap().step_index, 2);

    // Next at the last step is a no-op (finish is Enter, not Right)
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.view.as_ref().unwrap().step_index, 2);

    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.view.as_ref().unwrap().step_index, 1);
}

#[test]
fn finish_is_only_reachable_from_the_last_step() {
    let mut app = recipe_app();
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Enter)); // start cooking

    // Enter on a non-last step advances instead of finishing
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Recipe);
    assert_eq!(app.view.as_ref().unwrap().step_index, 1);

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.view.as_ref().unwrap().step_index, 2);

    // Now at the last step: Enter finishes
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Celebration);
}

#[test]
fn tip_toggles_and_collapses_on_navigation() {
    let mut app = recipe_app();
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Enter)); // start cooking
    app.handle_key(key(KeyCode::Right)); // step 2 has a tip

    app.handle_key(key(KeyCode::Char('t')));
    assert!(app.view.as_ref().unwrap().tip_open);

    app.handle_key(key(KeyCode::Char('t')));
    assert!(!app.view.as_ref().unwrap().tip_open);

    app.handle_key(key(KeyCode::Char('t')));
    app.handle_key(key(KeyCode::Left));
    assert!(
        !app.view.as_ref().unwrap().tip_open,
        "stepping collapses an open tip"
    );
}

#[test]
fn celebration_dismiss_resets_to_hero() {
    let mut app = recipe_app();
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter)); // finish on the last step
    assert_eq!(app.mode(), AppMode::Celebration);

    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.mode(), AppMode::Hero);
    assert!(app.recipe().is_none());
    assert!(app.view.is_none());
    assert_eq!(app.search.value(), "", "reset clears the search term");
}

#[test]
fn slash_returns_to_search_keeping_the_term() {
    let mut app = recipe_app();
    app.search.set_value("Palak Paneer");

    app.handle_key(key(KeyCode::Char('/')));

    assert_eq!(app.mode(), AppMode::Hero);
    assert!(app.recipe().is_none());
    assert_eq!(
        app.search.value(),
        "Palak Paneer",
        "the term survives for editing"
    );
}

#[test]
fn error_mode_keeps_the_search_input_live() {
    let mut app = recipe_app();
    app.mode = AppMode::Error;
    app.error = Some("model unavailable".to_string());
    app.search.set_value("Palak");

    type_text(&mut app, " Paneer");
    assert_eq!(app.search.value(), "Palak Paneer");

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.search.value(), "Palak Panee");
}

#[test]
fn hero_highlight_walks_chips_then_categories() {
    let mut app = test_app();

    // Walk past the six chips into the category cards
    for _ in 0..7 {
        app.handle_key(key(KeyCode::Down));
    }
    assert_eq!(app.hero.highlighted, Some(6));

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.hero.highlighted, None, "Esc clears the highlight");
}
