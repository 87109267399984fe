//! Recipe generation via a generative language model.
//!
//! This module is the only place that talks to the network. It provides a
//! trait-based abstraction over recipe sources so the app shell and the
//! tests never depend on a live API:
//!
//! - **[`RecipeSource`]**: one configured way to generate a recipe
//!   (in production, a [`GeminiClient`] bound to a single API key)
//! - **[`RecipeFetcher`]**: tries sources in priority order, stopping at
//!   the first success and aggregating failures
//! - **[`FakeSource`]**: deterministic stand-in for tests

mod fake;
mod fetcher;
mod gemini;
pub mod prompts;

pub use fake::FakeSource;
pub use fetcher::RecipeFetcher;
pub use gemini::GeminiClient;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::recipe::Recipe;

/// Errors produced while generating a recipe.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The HTTP request could not be completed (DNS, TLS, connection).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The API answered with a non-success status.
    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The model produced no text to parse.
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// The response text was not a valid recipe document.
    #[error("failed to parse recipe: {0}")]
    Parse(String),

    /// Every configured credential failed.
    #[error("all {attempts} credential attempt(s) failed: {last}")]
    Exhausted {
        /// How many sources were tried.
        attempts: usize,
        /// The most recent failure (the backup's when one was tried).
        last: Box<RecipeError>,
    },
}

/// A configured way to generate one recipe.
///
/// Implementations should be stateless and thread-safe; the fetcher calls
/// them from a spawned task.
#[async_trait]
pub trait RecipeSource: Send + Sync + fmt::Debug {
    /// Generates a recipe for the given dish name.
    async fn generate(&self, dish_name: &str) -> Result<Recipe, RecipeError>;

    /// A short identifier for diagnostics (e.g. "gemini", "fake").
    fn source_name(&self) -> &'static str;
}

/// Strips an optional markdown code fence from the model's raw text.
///
/// Models occasionally wrap JSON output in ```` ```json ... ``` ```` even
/// when a JSON MIME type was requested. Anything that is not a fence is
/// returned unchanged.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag ("json") on the opening fence line, if any.
    let rest = rest
        .strip_prefix("json")
        .unwrap_or(rest)
        .trim_start_matches(['\r', '\n', ' ']);

    rest.strip_suffix("```").map_or(rest, str::trim_end)
}

/// Parses the model's raw text into a [`Recipe`].
///
/// The text is fence-stripped first. An empty body and a recipe with an
/// empty `method` are both rejected: the step navigator cannot function
/// without at least one step.
///
/// # Errors
///
/// Returns [`RecipeError::EmptyResponse`] for blank text and
/// [`RecipeError::Parse`] for malformed or unusable documents.
pub fn parse_recipe_json(text: &str) -> Result<Recipe, RecipeError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(RecipeError::EmptyResponse);
    }

    let recipe: Recipe =
        serde_json::from_str(body).map_err(|e| RecipeError::Parse(e.to_string()))?;

    if recipe.method.is_empty() {
        return Err(RecipeError::Parse(
            "recipe has no method steps".to_string(),
        ));
    }

    Ok(recipe)
}
