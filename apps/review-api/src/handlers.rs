//! HTTP handlers for the review API

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use review_core::ExportFile;
use review_types::{
    Attribute, BulkActionPayload, BulkUpdateResponse, Document, ExportFormat, ExportOptions,
    SaveReviewPayload, SaveReviewResponse,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "review-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /api/documents
pub async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<Document>> {
    let store = state.store.read().await;
    Json(store.documents().to_vec())
}

/// Handler: GET /api/documents/:id
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let store = state.store.read().await;
    store
        .document(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::DocumentNotFound(id))
}

/// Handler: GET /api/documents/:id/attributes
pub async fn get_attributes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<Attribute>> {
    let store = state.store.read().await;
    Json(store.attributes(&id).to_vec())
}

/// Handler: POST /api/documents/:id/review
pub async fn save_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SaveReviewPayload>,
) -> Result<Json<SaveReviewResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.save_review(&id, &payload)?;

    info!(
        "Review saved: document={}, attributes={}, status={:?}",
        id,
        payload.attributes.len(),
        payload.status
    );
    Ok(Json(SaveReviewResponse { success: true }))
}

/// Handler: POST /api/documents/bulk
pub async fn bulk_update(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BulkActionPayload>,
) -> Json<BulkUpdateResponse> {
    let mut store = state.store.write().await;
    let updated_count = store.bulk_update(&payload);

    info!(
        "Bulk action executed: action={}, requested={}, updated={}",
        payload.action.as_str(),
        payload.document_ids.len(),
        updated_count
    );
    Json(BulkUpdateResponse {
        success: true,
        updated_count,
    })
}

/// Handler: POST /api/documents/export
pub async fn export_documents(
    State(state): State<Arc<AppState>>,
    Json(options): Json<ExportOptions>,
) -> Result<Response, ApiError> {
    let store = state.store.read().await;
    let blob = store.export_documents(&options)?;
    Ok(download(ExportFile::documents(options.format, blob)))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Handler: GET /api/documents/:id/attributes/export?format=csv|json
pub async fn export_attributes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let format = match query.format.as_deref() {
        Some(value) => value.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };

    let store = state.store.read().await;
    let (doc, blob) = store.export_attributes(&id, format)?;
    Ok(download(ExportFile::attributes(doc, format, blob)))
}

/// Attachment response carrying the export's type and filename
fn download(file: ExportFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.filename.replace('"', ""));
    (
        [
            (header::CONTENT_TYPE, file.mime_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}
