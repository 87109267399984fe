//! Fake recipe source for testing.
//!
//! Returns a canned recipe or a canned failure without touching the
//! network, and counts invocations so tests can assert fallback order.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{RecipeError, RecipeSource};
use crate::recipe::Recipe;

/// A deterministic recipe source.
#[derive(Debug)]
pub struct FakeSource {
    outcome: FakeOutcome,
    calls: Arc<AtomicUsize>,
}

#[derive(Debug)]
enum FakeOutcome {
    Recipe(Box<Recipe>),
    Failure(String),
}

impl FakeSource {
    /// Creates a source that always returns the given recipe.
    #[must_use]
    pub fn returning(recipe: Recipe) -> Self {
        Self {
            outcome: FakeOutcome::Recipe(Box::new(recipe)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a source that always fails with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: FakeOutcome::Failure(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a handle to the invocation counter.
    ///
    /// The handle stays valid after the source is boxed and moved into a
    /// fetcher, which is exactly when tests need it.
    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    async fn generate(&self, _dish_name: &str) -> Result<Recipe, RecipeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            FakeOutcome::Recipe(recipe) => Ok((**recipe).clone()),
            FakeOutcome::Failure(message) => Err(RecipeError::RequestFailed(message.clone())),
        }
    }

    fn source_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::llm::test_fixtures::sample_recipe;

    #[tokio::test]
    async fn returning_source_yields_the_recipe() {
        let source = FakeSource::returning(sample_recipe());
        let recipe = source.generate("anything").await.unwrap();
        assert_eq!(recipe.dish_name, "Palak Paneer");
    }

    #[tokio::test]
    async fn failing_source_yields_the_message() {
        let source = FakeSource::failing("boom");
        let err = source.generate("anything").await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn call_counter_tracks_invocations() {
        let source = FakeSource::returning(sample_recipe());
        let counter = source.call_counter();
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        source.generate("one").await.unwrap();
        source.generate("two").await.unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
