//! HTTP handlers
//!
//! Axum request handlers for the feed endpoints.

pub mod feed;

pub use feed::{get_feed, get_index};
