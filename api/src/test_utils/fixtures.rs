//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a fully populated record that can be customized.

use crate::domain::entities::{Ingredient, RecipeRecord};

/// Create an ingredient
pub fn test_ingredient(name: &str, amount: Option<&str>, purchase_link: Option<&str>) -> Ingredient {
    Ingredient {
        name: Some(name.to_string()),
        amount: amount.map(|s| s.to_string()),
        purchase_link: purchase_link.map(|s| s.to_string()),
    }
}

/// Create a recipe with every column populated
pub fn test_recipe() -> RecipeRecord {
    RecipeRecord {
        title: Some("Kimchi stew".to_string()),
        summary: Some("Spicy, sour and warming".to_string()),
        method_text: Some(
            "1. Fry the kimchi and pork in sesame oil. 2. Add water and gochugaru. \
             3. Simmer for 20 minutes. 4. Add tofu and green onion."
                .to_string(),
        ),
        tips: Some("Use well-fermented kimchi".to_string()),
        video_url: Some("https://www.youtube.com/watch?v=kimchi".to_string()),
        thumbnail_url: Some("https://cdn.example.com/kimchi.png".to_string()),
        image_prompt: Some(
            "A bubbling earthenware pot of kimchi stew on a wooden table, soft morning light"
                .to_string(),
        ),
        tags: Some(vec!["korean".to_string(), "stew".to_string(), "pork".to_string()]),
        ingredients: Some(vec![
            test_ingredient("kimchi", Some("200g"), Some("https://shop.example.com/kimchi")),
            test_ingredient("pork belly", Some("150g"), Some("https://shop.example.com/pork")),
            test_ingredient("tofu", Some("1 block"), Some("https://shop.example.com/tofu")),
            test_ingredient("green onion", Some("1 stalk"), Some("https://shop.example.com/onion")),
        ]),
    }
}

/// Create a fully populated recipe with a specific title
pub fn test_recipe_titled(title: &str) -> RecipeRecord {
    RecipeRecord {
        title: Some(title.to_string()),
        ..test_recipe()
    }
}
