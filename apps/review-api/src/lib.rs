//! Review API Server - in-memory backend for the contract review portal
//!
//! Provides REST endpoints for:
//! - Document listing and lookup
//! - Extracted attributes per document
//! - Saving a review and bulk status updates
//! - CSV/JSON exports
//!
//! State lives in memory only and is seeded with the sample contracts.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;
#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use state::{AppState, Store};

/// Routes without middleware
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Documents
        .route("/api/documents", get(handlers::list_documents))
        .route("/api/documents/bulk", post(handlers::bulk_update))
        .route("/api/documents/export", post(handlers::export_documents))
        .route("/api/documents/:id", get(handlers::get_document))
        // Attributes and review
        .route("/api/documents/:id/attributes", get(handlers::get_attributes))
        .route(
            "/api/documents/:id/attributes/export",
            get(handlers::export_attributes),
        )
        .route("/api/documents/:id/review", post(handlers::save_review))
        .with_state(state)
}

/// Full application: routes plus tracing and CORS for browser clients
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
