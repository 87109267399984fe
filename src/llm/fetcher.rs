//! Credential fallback over recipe sources.

use std::fmt;

use super::{GeminiClient, RecipeError, RecipeSource};
use crate::config::Credentials;
use crate::recipe::Recipe;

/// Fetches recipes by trying sources in priority order.
///
/// Each configured credential becomes one source. A fetch walks the list,
/// returns the first success, and gives each source exactly one attempt —
/// there is no retry loop and no backoff. With the usual primary + backup
/// configuration this is the single-fallback behavior the UI promises.
pub struct RecipeFetcher {
    sources: Vec<Box<dyn RecipeSource>>,
}

impl fmt::Debug for RecipeFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.source_name()).collect();
        f.debug_struct("RecipeFetcher").field("sources", &names).finish()
    }
}

impl RecipeFetcher {
    /// Builds a fetcher from resolved credentials, one Gemini client per key.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let sources = credentials
            .key_chain()
            .into_iter()
            .map(|key| Box::new(GeminiClient::new(key.to_string())) as Box<dyn RecipeSource>)
            .collect();
        Self { sources }
    }

    /// Builds a fetcher from explicit sources (tests inject fakes here).
    #[must_use]
    pub fn from_sources(sources: Vec<Box<dyn RecipeSource>>) -> Self {
        Self { sources }
    }

    /// Number of configured sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Generates a recipe, falling back through the source list.
    ///
    /// # Errors
    ///
    /// With a single source, its error is returned as-is. With several, all
    /// failures collapse into [`RecipeError::Exhausted`] whose message
    /// references the last failure (the backup's, when one was tried).
    pub async fn fetch(&self, dish_name: &str) -> Result<Recipe, RecipeError> {
        let mut failures = Vec::new();

        for source in &self.sources {
            match source.generate(dish_name).await {
                Ok(recipe) => return Ok(recipe),
                Err(err) => failures.push(err),
            }
        }

        let attempts = failures.len();
        match failures.pop() {
            None => Err(RecipeError::RequestFailed(
                "no recipe sources configured".to_string(),
            )),
            Some(last) if attempts == 1 => Err(last),
            Some(last) => Err(RecipeError::Exhausted {
                attempts,
                last: Box::new(last),
            }),
        }
    }
}
