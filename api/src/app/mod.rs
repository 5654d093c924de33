//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between the store port and the feed renderer.

pub mod feed_service;

pub use feed_service::FeedService;
