use std::env;
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::ConfigError;

const DEFAULT_TABLE: &str = "recipes";
const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;
const DEFAULT_INGREDIENT_CAP: usize = 3;
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    /// Supabase project URL, without trailing slash
    pub supabase_url: String,
    /// Supabase access key, sent as `apikey` and bearer token
    pub supabase_key: String,
    /// Table the feed selects from
    pub recipe_table: String,
    /// Rows fetched per page load
    pub page_size: NonZeroUsize,
    /// Ingredient entries shown per card
    pub ingredient_cap: usize,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = required(&lookup, "SUPABASE_URL")?
            .trim_end_matches('/')
            .to_string();
        let supabase_key = required(&lookup, "SUPABASE_KEY")?;

        let recipe_table = lookup("RECIPE_TABLE")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        let page_size = parse_or(&lookup, "RECIPE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid {
                name: "RECIPE_PAGE_SIZE",
                reason: format!("must be at most {}", MAX_PAGE_SIZE),
            });
        }
        let page_size = NonZeroUsize::new(page_size).ok_or_else(|| ConfigError::Invalid {
            name: "RECIPE_PAGE_SIZE",
            reason: "must be positive".to_string(),
        })?;

        let ingredient_cap = parse_or(&lookup, "INGREDIENT_CAP", DEFAULT_INGREDIENT_CAP)?;
        if ingredient_cap == 0 {
            return Err(ConfigError::Invalid {
                name: "INGREDIENT_CAP",
                reason: "must be positive".to_string(),
            });
        }

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        Ok(Self {
            supabase_url,
            supabase_key,
            recipe_table,
            page_size,
            ingredient_cap,
            port,
        })
    }
}

// Keeps the access key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .field("recipe_table", &self.recipe_table)
            .field("page_size", &self.page_size)
            .field("ingredient_cap", &self.ingredient_cap)
            .field("port", &self.port)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
