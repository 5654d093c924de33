//! Error types for the SnapFood feed
//!
//! - `StoreError`: failures talking to the remote recipe table store
//! - `ConfigError`: missing or invalid startup configuration
//!
//! Malformed records are not errors: the feed renderer substitutes
//! placeholders field by field instead.

use thiserror::Error;

/// Recipe table store errors
///
/// The `Display` output is the diagnostic reason for a failed fetch. It is
/// logged, never shown to end users.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid key or row-level security policy")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Expected a list of rows, got {found}")]
    NotAList { found: String },
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
