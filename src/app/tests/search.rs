//! Submit guard and state-machine transition tests.

use ratatui::crossterm::event::KeyCode;

use super::helpers::*;
use crate::app::state::AppEvent;
use crate::app::{AppMode, RecipeViewState};
use crate::llm::test_fixtures::sample_recipe;

#[tokio::test]
async fn submit_enters_loading_and_clears_previous_result() {
    let mut app = test_app();
    // Leftovers from an earlier search
    app.error = Some("stale failure".to_string());
    let recipe = sample_recipe();
    app.view = Some(RecipeViewState::new(&recipe));
    app.recipe = Some(recipe);

    app.search.set_value("Chole Bhature");
    app.submit_search();

    assert_eq!(app.mode(), AppMode::Loading);
    assert!(app.recipe().is_none(), "previous recipe is cleared");
    assert!(app.error().is_none(), "previous error is cleared");
    assert!(app.view.is_none());
}

#[tokio::test]
async fn empty_submit_is_a_noop() {
    let mut app = test_app();

    app.submit_search();
    assert_eq!(app.mode(), AppMode::Hero);

    app.search.set_value("   \t  ");
    app.submit_search();
    assert_eq!(app.mode(), AppMode::Hero, "whitespace-only input is a no-op");
    assert_eq!(app.generation, 0, "no request was accepted");
}

#[tokio::test]
async fn submit_while_loading_is_a_noop() {
    let mut app = test_app();
    app.search.set_value("Dal Makhani");
    app.submit_search();
    assert_eq!(app.mode(), AppMode::Loading);
    let accepted = app.generation;

    app.search.set_value("Something Else");
    app.submit_search();

    assert_eq!(app.mode(), AppMode::Loading);
    assert_eq!(
        app.generation, accepted,
        "the in-flight slot rejects a second request"
    );
}

#[tokio::test]
async fn suggestion_shortcut_sets_term_and_submits() {
    let mut app = test_app();

    app.search_for("Masala Dosa");

    assert_eq!(app.search.value(), "Masala Dosa");
    assert_eq!(app.mode(), AppMode::Loading);
}

#[tokio::test]
async fn success_event_stores_recipe_and_builds_view() {
    let mut app = test_app();
    app.search.set_value("Palak Paneer");
    app.submit_search();

    settle(&mut app).await;

    assert_eq!(app.mode(), AppMode::Recipe);
    let recipe = app.recipe().unwrap();
    assert_eq!(recipe.dish_name, "Palak Paneer");
    let view = app.view.as_ref().unwrap();
    assert_eq!(view.checked.len(), recipe.ingredients.len());
    assert!(!view.cooking);
}

#[tokio::test]
async fn failure_event_stores_message() {
    let mut app = test_app_with_sources(vec![Box::new(crate::llm::FakeSource::failing(
        "primary exploded",
    ))]);
    app.search.set_value("Palak Paneer");
    app.submit_search();

    settle(&mut app).await;

    assert_eq!(app.mode(), AppMode::Error);
    assert!(app.error().unwrap().contains("primary exploded"));
    assert!(app.recipe().is_none(), "no recipe is kept on failure");
}

#[tokio::test]
async fn stale_completion_events_are_discarded() {
    let mut app = test_app();
    app.search.set_value("Palak Paneer");
    app.submit_search();
    let tx = app.event_sender();

    // A completion from a superseded request generation
    tx.send(AppEvent::RecipeFailed {
        generation: app.generation - 1,
        message: "ghost of an old request".to_string(),
    })
    .await
    .unwrap();
    app.process_events();

    assert_eq!(
        app.mode(),
        AppMode::Loading,
        "stale events must not change state"
    );
    assert!(app.error().is_none());
}

#[tokio::test]
async fn enter_submits_from_the_hero_screen() {
    let mut app = test_app();
    type_text(&mut app, "Aloo Gobi");
    assert_eq!(app.search.value(), "Aloo Gobi");

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Loading);
}

#[tokio::test]
async fn enter_on_a_highlighted_chip_searches_it() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.mode(), AppMode::Loading);
    assert_eq!(
        app.search.value(),
        crate::suggestions::SUGGESTIONS[0],
        "the chip's dish name lands in the search input"
    );
}

#[tokio::test]
async fn typing_clears_the_pick_highlight() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Down));
    assert!(app.hero.highlighted.is_some());

    app.handle_key(char_key('d'));
    assert_eq!(app.hero.highlighted, None);
    assert_eq!(app.search.value(), "d");
}

#[tokio::test]
async fn keys_are_ignored_while_loading() {
    let mut app = test_app();
    app.search.set_value("Dal Makhani");
    app.submit_search();

    app.handle_key(char_key('x'));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Esc));

    assert_eq!(app.mode(), AppMode::Loading);
    assert_eq!(app.search.value(), "Dal Makhani");
}

#[tokio::test]
async fn ctrl_c_quits_from_any_mode() {
    let mut app = test_app();
    assert!(!app.should_quit());

    app.handle_key(ctrl_key('c'));
    assert!(app.should_quit());
}
