//! SnapFood recipe feed server
//!
//! Fetches one page of recipes from the Supabase table store and serves them as
//! cards with ingredient purchase links.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::SupabaseClient;
use app::FeedService;
use config::Config;
use domain::ports::RecipeStore;
use feed::CardOptions;

/// Application state shared across all handlers
pub struct AppState<S: RecipeStore> {
    pub feed_service: Arc<FeedService<S>>,
}

impl<S: RecipeStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for a given store
pub fn router<S: RecipeStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::get_index::<S>))
        .route("/feed", get(handlers::get_feed::<S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,snapfood_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SnapFood feed...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Configuration: {:?}", config);

    // The one store client, shared by every request
    let store = Arc::new(SupabaseClient::new(
        config.supabase_url.clone(),
        config.supabase_key.clone(),
        config.recipe_table.clone(),
    ));

    let feed_service = Arc::new(FeedService::new(
        store,
        config.page_size,
        CardOptions {
            ingredient_cap: config.ingredient_cap,
        },
    ));

    let app = router(AppState { feed_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
