//! Imply Server - Column Comparison API
//!
//! HTTP server around imply-core: upload a CSV, inspect its schema,
//! compare two columns. Sessions live in memory only and are isolated
//! per id; nothing is persisted.

pub mod http;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use imply_core::AnalysisSession;

/// Shared application state
pub struct AppState {
    /// Active sessions by id, each owning its dataset exclusively
    pub sessions: RwLock<HashMap<String, AnalysisSession>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Dataset upload
        .route("/datasets", post(http::upload_dataset))
        // Session endpoints
        .route("/sessions/{id}", get(http::get_session))
        .route("/sessions/{id}", delete(http::delete_session))
        .route("/sessions/{id}/compare", post(http::compare_columns))
        // System endpoints
        .route("/status", get(http::get_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Imply server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
