//! HTTP endpoint tests using axum-test

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use review_types::{Attribute, BulkUpdateResponse, Document, DocumentStatus};
use serde_json::json;

use crate::state::AppState;

/// Create a test server with the full router over fresh sample data
fn create_test_server() -> TestServer {
    TestServer::new(crate::app(Arc::new(AppState::sample()))).unwrap()
}

#[tokio::test]
async fn test_health_returns_200() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "review-api");
}

#[tokio::test]
async fn test_list_documents() {
    let server = create_test_server();
    let response = server.get("/api/documents").await;
    response.assert_status_ok();

    let docs = response.json::<Vec<Document>>();
    assert_eq!(docs.len(), 6);
    assert_eq!(docs[0].id, "doc-001");
}

#[tokio::test]
async fn test_document_wire_format_is_camel_case() {
    let server = create_test_server();
    let json = server
        .get("/api/documents/doc-001")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["status"], "Pending Review");
    assert_eq!(json["attributeCount"], 4);
    assert_eq!(json["storageRef"], "contracts/msa-acme-2024.pdf");
}

#[tokio::test]
async fn test_unknown_document_is_404() {
    let server = create_test_server();
    let response = server.get("/api/documents/doc-999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Document not found: doc-999");
}

#[tokio::test]
async fn test_attributes_for_unknown_document_are_empty() {
    let server = create_test_server();
    let response = server.get("/api/documents/doc-999/attributes").await;
    response.assert_status_ok();
    assert!(response.json::<Vec<Attribute>>().is_empty());
}

#[tokio::test]
async fn test_save_review_persists() {
    let server = create_test_server();

    let response = server
        .post("/api/documents/doc-003/review")
        .json(&json!({
            "documentId": "doc-003",
            "attributes": [{"id": "attr-003-3", "correctedValue": "Auto-renews yearly"}],
            "status": "Reviewed",
            "reviewedBy": "Admin User"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({"success": true}));

    let doc = server.get("/api/documents/doc-003").await.json::<Document>();
    assert_eq!(doc.status, DocumentStatus::Reviewed);
    assert_eq!(doc.reviewed_by.as_deref(), Some("Admin User"));

    let attrs = server
        .get("/api/documents/doc-003/attributes")
        .await
        .json::<Vec<Attribute>>();
    assert_eq!(attrs[2].corrected_value, "Auto-renews yearly");
}

#[tokio::test]
async fn test_save_review_rejects_mismatched_document_id() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/doc-001/review")
        .json(&json!({
            "documentId": "doc-002",
            "attributes": [],
            "status": "Approved"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "documentId doc-002 does not match doc-001");
    assert_eq!(json["status"], 400);

    let doc = server.get("/api/documents/doc-001").await.json::<Document>();
    assert_eq!(doc.status, DocumentStatus::PendingReview);
}

#[tokio::test]
async fn test_save_review_unknown_document() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/doc-999/review")
        .json(&json!({
            "documentId": "doc-999",
            "attributes": [],
            "status": "Approved"
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_update_touches_only_listed_ids() {
    let server = create_test_server();
    let before = server.get("/api/documents").await.json::<Vec<Document>>();

    let response = server
        .post("/api/documents/bulk")
        .json(&json!({
            "documentIds": ["doc-001", "doc-005", "doc-999"],
            "action": "approve",
            "reviewedBy": "Admin User"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<BulkUpdateResponse>(),
        BulkUpdateResponse {
            success: true,
            updated_count: 2
        }
    );

    let after = server.get("/api/documents").await.json::<Vec<Document>>();
    for (old, new) in before.iter().zip(&after) {
        if old.id == "doc-001" || old.id == "doc-005" {
            assert_eq!(new.status, DocumentStatus::Approved);
            assert_eq!(new.reviewed_by.as_deref(), Some("Admin User"));
        } else {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn test_export_documents_csv() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/export")
        .json(&json!({"documentIds": ["doc-002", "doc-004"], "format": "csv"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/csv");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"documents-export.csv\""
    );

    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "ID,Title,Status,Uploaded At,Attribute Count,Confidence,Reviewed By"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("doc-002,\"NDA - Globex Industries.pdf\",Reviewed,"));
}

#[tokio::test]
async fn test_export_documents_json_with_attributes() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/export")
        .json(&json!({"format": "json", "includeAttributes": true}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");

    let json = response.json::<Vec<serde_json::Value>>();
    assert_eq!(json.len(), 6);
    assert_eq!(json[0]["id"], "doc-001");
    assert_eq!(json[0]["attributes"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_export_attributes() {
    let server = create_test_server();
    let response = server
        .get("/api/documents/doc-006/attributes/export")
        .add_query_param("format", "json")
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Statement of Work - Hooli Data Migration-attributes.json\""
    );
    assert_eq!(response.json::<Vec<Attribute>>().len(), 3);
}

#[tokio::test]
async fn test_export_attributes_rejects_unknown_format() {
    let server = create_test_server();
    let response = server
        .get("/api/documents/doc-001/attributes/export")
        .add_query_param("format", "xml")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["status"], 400);
}

#[tokio::test]
async fn test_export_attributes_unknown_document() {
    let server = create_test_server();
    let response = server
        .get("/api/documents/doc-999/attributes/export")
        .add_query_param("format", "csv")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
