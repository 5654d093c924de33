//! Recipe store port trait
//!
//! The read-only query capability the feed depends on. The production
//! implementation talks to Supabase; tests use an in-memory store.

use std::num::NonZeroUsize;

use async_trait::async_trait;

use crate::domain::entities::RecipeRecord;
use crate::error::StoreError;

/// Outcome of one bounded fetch against the store
pub type FetchResult = Result<Vec<RecipeRecord>, StoreError>;

/// Read access to the recipe table
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Select every column of at most `limit` recipe rows, store order.
    ///
    /// Any failure (transport, authorization, non-list body) is an `Err`,
    /// never an empty `Ok`.
    async fn select_recipes(&self, limit: NonZeroUsize) -> FetchResult;
}
