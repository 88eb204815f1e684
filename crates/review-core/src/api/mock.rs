//! Sample-data backend with simulated network latency

use std::time::Duration;

use review_types::{
    Attribute, BulkActionPayload, BulkUpdateResponse, Document, ExportFormat, ExportOptions,
    SaveReviewPayload, SaveReviewResponse,
};
use tracing::info;

use crate::error::Result;
use crate::export::{self, ExportBlob};
use crate::mock_data::MockDataset;

/// Artificial latency per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub documents: Duration,
    pub document: Duration,
    pub attributes: Duration,
    pub save_review: Duration,
    pub bulk_update: Duration,
    pub export_documents: Duration,
    pub export_attributes: Duration,
}

impl MockDelays {
    /// No waiting at all, for tests
    pub fn none() -> Self {
        Self {
            documents: Duration::ZERO,
            document: Duration::ZERO,
            attributes: Duration::ZERO,
            save_review: Duration::ZERO,
            bulk_update: Duration::ZERO,
            export_documents: Duration::ZERO,
            export_attributes: Duration::ZERO,
        }
    }
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            documents: Duration::from_millis(300),
            document: Duration::from_millis(200),
            attributes: Duration::from_millis(250),
            save_review: Duration::from_millis(500),
            bulk_update: Duration::from_millis(600),
            export_documents: Duration::from_millis(400),
            export_attributes: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockBackend {
    data: MockDataset,
    delays: MockDelays,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockDelays::default())
    }
}

impl MockBackend {
    pub fn new(delays: MockDelays) -> Self {
        Self::with_data(MockDataset::sample(), delays)
    }

    pub fn with_data(data: MockDataset, delays: MockDelays) -> Self {
        Self { data, delays }
    }

    async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub(crate) async fn documents(&self) -> Vec<Document> {
        Self::wait(self.delays.documents).await;
        self.data.documents().to_vec()
    }

    pub(crate) async fn document(&self, id: &str) -> Option<Document> {
        Self::wait(self.delays.document).await;
        self.data.document(id).cloned()
    }

    pub(crate) async fn attributes(&self, document_id: &str) -> Vec<Attribute> {
        Self::wait(self.delays.attributes).await;
        self.data.attributes_for(document_id).to_vec()
    }

    pub(crate) async fn save_review(
        &self,
        document_id: &str,
        payload: &SaveReviewPayload,
    ) -> SaveReviewResponse {
        Self::wait(self.delays.save_review).await;
        info!(
            "Review saved: document={}, attributes={}, status={:?}",
            document_id,
            payload.attributes.len(),
            payload.status
        );
        SaveReviewResponse { success: true }
    }

    pub(crate) async fn bulk_update(&self, payload: &BulkActionPayload) -> BulkUpdateResponse {
        Self::wait(self.delays.bulk_update).await;
        info!(
            "Bulk action executed: action={}, documents={:?}, reviewed_by={:?}",
            payload.action.as_str(),
            payload.document_ids,
            payload.reviewed_by
        );
        BulkUpdateResponse {
            success: true,
            updated_count: payload.document_ids.len(),
        }
    }

    pub(crate) async fn export_documents(&self, options: &ExportOptions) -> Result<ExportBlob> {
        Self::wait(self.delays.export_documents).await;
        export::render_documents(self.data.documents(), options, |id| {
            self.data.attributes_for(id).to_vec()
        })
    }

    pub(crate) async fn export_attributes(
        &self,
        document_id: &str,
        format: ExportFormat,
    ) -> Result<ExportBlob> {
        Self::wait(self.delays.export_attributes).await;
        export::render_attributes(self.data.attributes_for(document_id), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn default_delays_are_applied() {
        let backend = MockBackend::default();

        let start = Instant::now();
        backend.documents().await;
        assert!(start.elapsed() >= Duration::from_millis(300));

        let start = Instant::now();
        backend
            .bulk_update(&BulkActionPayload {
                document_ids: vec![],
                action: review_types::BulkAction::Review,
                reviewed_by: None,
            })
            .await;
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delays_do_not_sleep() {
        let backend = MockBackend::new(MockDelays::none());
        let start = Instant::now();
        backend.attributes("doc-001").await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
