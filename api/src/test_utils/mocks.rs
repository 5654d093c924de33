//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record how they were called so tests can verify behavior.

use async_trait::async_trait;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::RecipeRecord;
use crate::domain::ports::{FetchResult, RecipeStore};
use crate::error::StoreError;

// ============================================================================
// In-Memory Recipe Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<RecipeRecord>>,
    failure: Option<fn() -> StoreError>,
    calls: AtomicUsize,
    last_limit: RwLock<Option<usize>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a recipe for testing
    pub fn with_recipe(self, recipe: RecipeRecord) -> Self {
        self.recipes.write().unwrap().push(recipe);
        self
    }

    /// Make every fetch fail with the error built by `make`
    pub fn with_failure(mut self, make: fn() -> StoreError) -> Self {
        self.failure = Some(make);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> Option<usize> {
        *self.last_limit.read().unwrap()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn select_recipes(&self, limit: NonZeroUsize) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_limit.write().unwrap() = Some(limit.get());

        if let Some(make) = self.failure {
            return Err(make());
        }

        let recipes = self.recipes.read().unwrap();
        Ok(recipes.iter().take(limit.get()).cloned().collect())
    }
}
