//! Card normalization
//!
//! Turns one `RecipeRecord` into a render-ready `CardViewModel`. Every field
//! is computed on its own, so a bad value only ever costs that field its
//! real content.

use serde::Serialize;

use crate::domain::entities::{Ingredient, RecipeRecord};

pub const TITLE_PLACEHOLDER: &str = "Untitled recipe";
pub const SUMMARY_PLACEHOLDER: &str = "No summary available";
/// 1x1 transparent PNG
pub const THUMBNAIL_PLACEHOLDER: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVQYV2P4//8/AwAI/gM6G/yWAAAAAElFTkSuQmCC";
pub const TAG_PLACEHOLDER: &str = "uncategorized";
pub const AMOUNT_PLACEHOLDER: &str = "appropriate amount";
pub const INGREDIENT_NAME_PLACEHOLDER: &str = "unnamed ingredient";
pub const LINK_PLACEHOLDER: &str = "#";
pub const PROMPT_PLACEHOLDER: &str = "No prompt";
pub const METHOD_PLACEHOLDER: &str = "No steps provided";
pub const TIP_PLACEHOLDER: &str = "No extra tips";

pub const PROMPT_PREVIEW_CHARS: usize = 50;
pub const METHOD_PREVIEW_CHARS: usize = 100;
pub const DEFAULT_INGREDIENT_CAP: usize = 3;

/// Presentation choices that shape a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Maximum ingredient entries per card
    pub ingredient_cap: usize,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            ingredient_cap: DEFAULT_INGREDIENT_CAP,
        }
    }
}

/// One ingredient line with its purchase link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientEntry {
    pub label: String,
    pub purchase_link: String,
}

/// Render-ready projection of one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub title: String,
    pub summary: String,
    pub thumbnail_url: String,
    pub primary_tag: String,
    pub ingredient_entries: Vec<IngredientEntry>,
    pub video_link: String,
    pub prompt_preview: String,
    pub method_preview: String,
    pub tip: String,
}

/// Normalize a record into a card
pub fn normalize_record(record: &RecipeRecord, options: &CardOptions) -> CardViewModel {
    CardViewModel {
        title: or_placeholder(&record.title, TITLE_PLACEHOLDER),
        summary: or_placeholder(&record.summary, SUMMARY_PLACEHOLDER),
        thumbnail_url: or_placeholder(&record.thumbnail_url, THUMBNAIL_PLACEHOLDER),
        primary_tag: primary_tag(record.tags.as_deref()),
        ingredient_entries: ingredient_entries(
            record.ingredients.as_deref(),
            options.ingredient_cap,
        ),
        video_link: or_placeholder(&record.video_url, LINK_PLACEHOLDER),
        prompt_preview: preview(
            record.image_prompt.as_deref(),
            PROMPT_PREVIEW_CHARS,
            PROMPT_PLACEHOLDER,
        ),
        method_preview: preview(
            record.method_text.as_deref(),
            METHOD_PREVIEW_CHARS,
            METHOD_PLACEHOLDER,
        ),
        tip: or_placeholder(&record.tips, TIP_PLACEHOLDER),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    non_empty(value.as_deref()).unwrap_or(placeholder).to_string()
}

fn primary_tag(tags: Option<&[String]>) -> String {
    tags.and_then(|t| t.first())
        .and_then(|t| non_empty(Some(t.as_str())))
        .unwrap_or(TAG_PLACEHOLDER)
        .to_string()
}

/// First `cap` ingredients in original order. Purchase links pass through untouched.
fn ingredient_entries(ingredients: Option<&[Ingredient]>, cap: usize) -> Vec<IngredientEntry> {
    let Some(ingredients) = ingredients else {
        return Vec::new();
    };

    ingredients
        .iter()
        .take(cap)
        .map(|item| {
            let name = non_empty(item.name.as_deref()).unwrap_or(INGREDIENT_NAME_PLACEHOLDER);
            let amount = non_empty(item.amount.as_deref()).unwrap_or(AMOUNT_PLACEHOLDER);
            IngredientEntry {
                label: format!("{} ({})", name, amount),
                purchase_link: non_empty(item.purchase_link.as_deref())
                    .unwrap_or(LINK_PLACEHOLDER)
                    .to_string(),
            }
        })
        .collect()
}

/// First `max_chars` characters plus an ellipsis, counted in chars not bytes
fn preview(value: Option<&str>, max_chars: usize, placeholder: &str) -> String {
    match non_empty(value) {
        Some(text) => {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
        None => placeholder.to_string(),
    }
}
