//! Feed handlers
//!
//! Endpoints for the recipe card feed.
//! Supports content negotiation: Accept: application/json for JSON, otherwise HTML.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::domain::ports::RecipeStore;
use crate::feed::render_feed_page;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /
///
/// The recipe card grid page.
pub async fn get_index<S: RecipeStore + 'static>(State(state): State<AppState<S>>) -> Response {
    let feed = state.feed_service.load_feed().await;
    Html(render_feed_page(&feed)).into_response()
}

/// GET /feed
///
/// Returns the current feed state.
/// - Accept: application/json → JSON presentation state
/// - Otherwise → HTML card grid
pub async fn get_feed<S: RecipeStore + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Response {
    let feed = state.feed_service.load_feed().await;

    if wants_json(&headers) {
        Json(feed).into_response()
    } else {
        Html(render_feed_page(&feed)).into_response()
    }
}
