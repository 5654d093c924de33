//! Domain entities
//!
//! Pure domain models representing the records the feed reads.

pub mod recipe;

pub use recipe::{Ingredient, RecipeRecord};
