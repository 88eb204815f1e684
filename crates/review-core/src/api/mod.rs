//! Review API client
//!
//! Every call goes to the remote review API when a base URL is configured.
//! Without one the client answers from the built-in sample dataset after a
//! short artificial delay, so the front-ends behave the same either way.
//! The mock backend never mutates its data: saves and bulk updates are
//! logged and reported as successful.

mod http;
mod mock;

pub use http::HttpBackend;
pub use mock::{MockBackend, MockDelays};

use review_types::{
    Attribute, BulkActionPayload, BulkUpdateResponse, Document, ExportFormat, ExportOptions,
    SaveReviewPayload, SaveReviewResponse,
};
use tracing::warn;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::export::ExportBlob;

enum Backend {
    Remote(HttpBackend),
    Mock(MockBackend),
}

pub struct ApiClient {
    backend: Backend,
    storage_base_url: Option<String>,
}

impl ApiClient {
    /// Remote backend when `api_base_url` is set, sample data otherwise
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let backend = match &config.api_base_url {
            Some(url) => Backend::Remote(HttpBackend::new(url)?),
            None => Backend::Mock(MockBackend::default()),
        };
        Ok(Self {
            backend,
            storage_base_url: config.storage_base_url.clone(),
        })
    }

    pub fn remote(backend: HttpBackend) -> Self {
        Self {
            backend: Backend::Remote(backend),
            storage_base_url: None,
        }
    }

    pub fn mock(backend: MockBackend) -> Self {
        Self {
            backend: Backend::Mock(backend),
            storage_base_url: None,
        }
    }

    pub fn with_storage_base_url(mut self, url: impl Into<String>) -> Self {
        self.storage_base_url = Some(url.into()).filter(|u: &String| !u.is_empty());
        self
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock(_))
    }

    pub async fn get_documents(&self) -> Result<Vec<Document>> {
        match &self.backend {
            Backend::Remote(http) => http.get_json("/api/documents").await,
            Backend::Mock(mock) => Ok(mock.documents().await),
        }
    }

    /// Single document; any remote failure degrades to `None`
    pub async fn get_document(&self, id: &str) -> Option<Document> {
        match &self.backend {
            Backend::Remote(http) => {
                match http.get_json(&format!("/api/documents/{id}")).await {
                    Ok(doc) => Some(doc),
                    Err(e) => {
                        warn!("Failed to fetch document {}: {}", id, e);
                        None
                    }
                }
            }
            Backend::Mock(mock) => mock.document(id).await,
        }
    }

    pub async fn get_attributes_by_document_id(&self, document_id: &str) -> Result<Vec<Attribute>> {
        match &self.backend {
            Backend::Remote(http) => {
                http.get_json(&format!("/api/documents/{document_id}/attributes"))
                    .await
            }
            Backend::Mock(mock) => Ok(mock.attributes(document_id).await),
        }
    }

    pub async fn save_review(
        &self,
        document_id: &str,
        payload: &SaveReviewPayload,
    ) -> Result<SaveReviewResponse> {
        match &self.backend {
            Backend::Remote(http) => {
                http.post_json(&format!("/api/documents/{document_id}/review"), payload)
                    .await
            }
            Backend::Mock(mock) => Ok(mock.save_review(document_id, payload).await),
        }
    }

    pub async fn bulk_update_documents(
        &self,
        payload: &BulkActionPayload,
    ) -> Result<BulkUpdateResponse> {
        match &self.backend {
            Backend::Remote(http) => http.post_json("/api/documents/bulk", payload).await,
            Backend::Mock(mock) => Ok(mock.bulk_update(payload).await),
        }
    }

    pub async fn export_documents(&self, options: &ExportOptions) -> Result<ExportBlob> {
        match &self.backend {
            Backend::Remote(http) => {
                http.post_for_blob("/api/documents/export", options, options.format)
                    .await
            }
            Backend::Mock(mock) => mock.export_documents(options).await,
        }
    }

    pub async fn export_attributes(
        &self,
        document_id: &str,
        format: ExportFormat,
    ) -> Result<ExportBlob> {
        match &self.backend {
            Backend::Remote(http) => {
                let path = format!(
                    "/api/documents/{document_id}/attributes/export?format={}",
                    format.extension()
                );
                http.get_blob(&path, format).await
            }
            Backend::Mock(mock) => mock.export_attributes(document_id, format).await,
        }
    }

    /// Blob URL for a document's storage reference, if storage is configured
    pub fn pdf_url(&self, storage_ref: Option<&str>) -> Option<String> {
        let storage_ref = storage_ref.filter(|r| !r.is_empty())?;
        let base = self.storage_base_url.as_deref()?;
        Some(format!("{base}/{storage_ref}"))
    }
}
