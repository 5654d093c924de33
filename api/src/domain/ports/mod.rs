//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod recipe_store;

pub use recipe_store::{FetchResult, RecipeStore};
