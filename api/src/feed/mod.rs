//! Feed module
//!
//! Defensive card normalization, presentation state and HTML rendering.

pub mod normalize;
pub mod renderer;
pub mod state;

pub use normalize::CardOptions;
pub use renderer::render_feed_page;
pub use state::{present, FeedState};
