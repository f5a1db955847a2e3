//! Web surface for ticker-lens
//!
//! Axum-based server exposing the JSON analysis API and the
//! server-rendered single page.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod state;
pub mod view;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;
pub use view::ViewState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .with_state(state.clone());

    Router::new()
        .route("/", get(pages::index))
        .route("/analyze", post(pages::analyze_fragment))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
