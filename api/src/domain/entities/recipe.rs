//! Recipe domain entity
//!
//! A recipe row as stored in the remote `recipes` table. Every column is
//! optional and may hold a value of the wrong JSON type; decoding never fails
//! on a field; a badly typed value is simply absent.

use serde::{Deserialize, Serialize};

/// One ingredient inside a recipe's `ingredients_json` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Free-form quantity, e.g. "200g"
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,

    /// Affiliate shopping link for this ingredient
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_link: Option<String>,
}

impl Ingredient {
    /// Decode one element of the ingredient array. Anything that is not an
    /// object yields an ingredient with every field absent.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// A recipe record owned by the remote table store (read-only here)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,

    /// Numbered cooking steps
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub method_text: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tips: Option<String>,

    /// Source video the recipe was derived from
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_url: Option<String>,

    /// Prompt used to generate the thumbnail
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_prompt: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,

    #[serde(
        default,
        rename = "ingredients_json",
        deserialize_with = "lenient::ingredient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl RecipeRecord {
    /// Decode one row. Serde would fill a struct from an array by position,
    /// so only objects are decoded; anything else is an all-absent record.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match value {
            serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

/// Deserializers that map wrongly typed JSON to `None` instead of failing
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Ingredient;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Non-string elements are dropped.
    pub fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    /// Elements keep their position even when malformed.
    pub fn ingredient_list<'de, D>(deserializer: D) -> Result<Option<Vec<Ingredient>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(items.into_iter().map(Ingredient::from_value).collect()),
            _ => None,
        })
    }
}
