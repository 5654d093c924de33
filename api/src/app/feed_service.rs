//! Feed service
//!
//! Runs the recipe pipeline: one bounded fetch from the store, then one
//! render pass over whatever came back.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::domain::ports::{FetchResult, RecipeStore};
use crate::feed::{present, CardOptions, FeedState};

/// Service for loading the recipe feed
pub struct FeedService<S>
where
    S: RecipeStore,
{
    store: Arc<S>,
    page_size: NonZeroUsize,
    card_options: CardOptions,
}

impl<S> FeedService<S>
where
    S: RecipeStore,
{
    pub fn new(store: Arc<S>, page_size: NonZeroUsize, card_options: CardOptions) -> Self {
        Self {
            store,
            page_size,
            card_options,
        }
    }

    /// Fetch one page of recipes. Exactly one store call, no retry.
    pub async fn fetch_recipes(&self) -> FetchResult {
        let result = self.store.select_recipes(self.page_size).await;

        if let Ok(records) = &result {
            tracing::info!("Loaded {} recipes", records.len());
        }

        result
    }

    /// Fetch and render the feed
    pub async fn load_feed(&self) -> FeedState {
        let result = self.fetch_recipes().await;
        let state = present(&result, &self.card_options);

        match state.diagnostic() {
            Some(reason) => tracing::error!("Failed to load recipes: {}", reason),
            None => tracing::debug!("Rendered {} cards", state.cards().len()),
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::test_utils::{test_recipe, test_recipe_titled, InMemoryRecipeStore};

    fn create_service(store: Arc<InMemoryRecipeStore>, page_size: usize) -> FeedService<InMemoryRecipeStore> {
        FeedService::new(
            store,
            NonZeroUsize::new(page_size).unwrap(),
            CardOptions::default(),
        )
    }

    #[tokio::test]
    async fn fetch_passes_page_size_once() {
        let store = Arc::new(InMemoryRecipeStore::new().with_recipe(test_recipe()));
        let service = create_service(store.clone(), 20);

        let result = service.fetch_recipes().await;

        assert_eq!(result.unwrap().len(), 1);
        assert_eq!(store.call_count(), 1);
        assert_eq!(store.last_limit(), Some(20));
    }

    #[tokio::test]
    async fn fetch_is_bounded_by_page_size() {
        let mut store = InMemoryRecipeStore::new();
        for i in 0..15 {
            store = store.with_recipe(test_recipe_titled(&format!("recipe-{}", i)));
        }
        let service = create_service(Arc::new(store), 10);

        let result = service.fetch_recipes().await;

        assert_eq!(result.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn load_feed_empty() {
        let store = Arc::new(InMemoryRecipeStore::new());
        let service = create_service(store, 20);

        let state = service.load_feed().await;

        assert!(matches!(state, FeedState::Empty { .. }));
    }

    #[tokio::test]
    async fn load_feed_failure_is_error_state() {
        let store = Arc::new(InMemoryRecipeStore::new().with_failure(|| StoreError::Unauthorized));
        let service = create_service(store.clone(), 20);

        let state = service.load_feed().await;

        assert!(matches!(state, FeedState::Error { .. }));
        assert!(state.diagnostic().unwrap().contains("Unauthorized"));
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn load_feed_populated_in_order() {
        let store = Arc::new(
            InMemoryRecipeStore::new()
                .with_recipe(test_recipe_titled("first"))
                .with_recipe(test_recipe_titled("second")),
        );
        let service = create_service(store, 20);

        let state = service.load_feed().await;

        let titles: Vec<&str> = state.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn load_feed_uses_card_options() {
        let store = Arc::new(InMemoryRecipeStore::new().with_recipe(test_recipe()));
        let service = FeedService::new(
            store,
            NonZeroUsize::new(20).unwrap(),
            CardOptions { ingredient_cap: 2 },
        );

        let state = service.load_feed().await;

        assert_eq!(state.cards()[0].ingredient_entries.len(), 2);
    }
}
