//! Application state for the review API

use std::collections::HashMap;

use review_core::export::{self, ExportBlob};
use review_core::selection::apply_bulk_action;
use review_core::MockDataset;
use review_types::{
    Attribute, BulkActionPayload, Document, ExportFormat, ExportOptions, SaveReviewPayload,
};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Documents and their attributes, keyed by document id
#[derive(Debug, Clone, Default)]
pub struct Store {
    documents: Vec<Document>,
    attributes: HashMap<String, Vec<Attribute>>,
}

impl Store {
    pub fn new(documents: Vec<Document>, attributes: HashMap<String, Vec<Attribute>>) -> Self {
        Self {
            documents,
            attributes,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    fn require(&self, id: &str) -> Result<&Document, ApiError> {
        self.document(id)
            .ok_or_else(|| ApiError::DocumentNotFound(id.to_string()))
    }

    /// Unknown documents simply have no attributes
    pub fn attributes(&self, document_id: &str) -> &[Attribute] {
        self.attributes
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Apply the corrections and move the document to the saved status
    pub fn save_review(
        &mut self,
        document_id: &str,
        payload: &SaveReviewPayload,
    ) -> Result<(), ApiError> {
        if payload.document_id != document_id {
            return Err(ApiError::InvalidRequest(format!(
                "documentId {} does not match {}",
                payload.document_id, document_id
            )));
        }

        let doc = self
            .documents
            .iter_mut()
            .find(|doc| doc.id == document_id)
            .ok_or_else(|| ApiError::DocumentNotFound(document_id.to_string()))?;

        doc.status = payload.status.into();
        if let Some(name) = &payload.reviewed_by {
            doc.reviewed_by = Some(name.clone());
        }

        if let Some(attrs) = self.attributes.get_mut(document_id) {
            for correction in &payload.attributes {
                if let Some(attr) = attrs.iter_mut().find(|a| a.id == correction.id) {
                    attr.corrected_value = correction.corrected_value.clone();
                }
            }
        }

        Ok(())
    }

    /// Returns how many of the listed documents existed
    pub fn bulk_update(&mut self, payload: &BulkActionPayload) -> usize {
        apply_bulk_action(
            &mut self.documents,
            &payload.document_ids,
            payload.action,
            payload.reviewed_by.as_deref(),
        )
    }

    pub fn export_documents(&self, options: &ExportOptions) -> Result<ExportBlob, ApiError> {
        Ok(export::render_documents(&self.documents, options, |id| {
            self.attributes(id).to_vec()
        })?)
    }

    pub fn export_attributes(
        &self,
        document_id: &str,
        format: ExportFormat,
    ) -> Result<(&Document, ExportBlob), ApiError> {
        let doc = self.require(document_id)?;
        let blob = export::render_attributes(self.attributes(document_id), format)?;
        Ok((doc, blob))
    }
}

impl From<MockDataset> for Store {
    fn from(data: MockDataset) -> Self {
        let (documents, attributes) = data.into_parts();
        Self::new(documents, attributes)
    }
}

pub struct AppState {
    pub store: RwLock<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Seeded with the sample contracts
    pub fn sample() -> Self {
        Self::new(Store::from(MockDataset::sample()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use review_types::{AttributeCorrection, BulkAction, DocumentStatus, ReviewStatus};

    fn store() -> Store {
        Store::from(MockDataset::sample())
    }

    #[test]
    fn save_review_applies_corrections_and_status() {
        let mut store = store();
        let payload = SaveReviewPayload {
            document_id: "doc-001".into(),
            attributes: vec![AttributeCorrection {
                id: "attr-001-4".into(),
                corrected_value: "Fees paid in prior 12 months".into(),
            }],
            status: ReviewStatus::Reviewed,
            reviewed_by: Some("Admin User".into()),
        };

        store.save_review("doc-001", &payload).unwrap();

        let doc = store.document("doc-001").unwrap();
        assert_eq!(doc.status, DocumentStatus::Reviewed);
        assert_eq!(doc.reviewed_by.as_deref(), Some("Admin User"));
        assert_eq!(
            store.attributes("doc-001")[3].corrected_value,
            "Fees paid in prior 12 months"
        );
        assert_eq!(store.attributes("doc-001")[0].corrected_value, "");
    }

    #[test]
    fn save_review_without_reviewer_keeps_previous() {
        let mut store = store();
        let payload = SaveReviewPayload {
            document_id: "doc-002".into(),
            attributes: vec![],
            status: ReviewStatus::Approved,
            reviewed_by: None,
        };
        store.save_review("doc-002", &payload).unwrap();
        let doc = store.document("doc-002").unwrap();
        assert_eq!(doc.status, DocumentStatus::Approved);
        assert_eq!(doc.reviewed_by.as_deref(), Some("Sarah Chen"));
    }

    #[test]
    fn save_review_rejects_mismatched_document_id() {
        let mut store = store();
        let payload = SaveReviewPayload {
            document_id: "doc-002".into(),
            attributes: vec![],
            status: ReviewStatus::Approved,
            reviewed_by: Some("Admin User".into()),
        };
        assert!(matches!(
            store.save_review("doc-001", &payload),
            Err(ApiError::InvalidRequest(_))
        ));
        assert_eq!(
            store.document("doc-001").unwrap().status,
            DocumentStatus::PendingReview
        );
        assert_eq!(store.document("doc-002").unwrap().status, DocumentStatus::Reviewed);
    }

    #[test]
    fn save_review_for_unknown_document_fails() {
        let mut store = store();
        let payload = SaveReviewPayload {
            document_id: "doc-999".into(),
            attributes: vec![],
            status: ReviewStatus::Reviewed,
            reviewed_by: None,
        };
        assert!(matches!(
            store.save_review("doc-999", &payload),
            Err(ApiError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn export_attributes_for_unknown_document_fails() {
        assert!(matches!(
            store().export_attributes("doc-999", ExportFormat::Csv),
            Err(ApiError::DocumentNotFound(_))
        ));
    }

    proptest! {
        /// Bulk updates count only ids that exist
        #[test]
        fn bulk_counts_existing_ids(picks in proptest::collection::vec(0usize..9, 0..6)) {
            let mut store = store();
            let mut ids: Vec<String> = picks.iter().map(|n| format!("doc-00{n}")).collect();
            ids.sort();
            ids.dedup();
            let existing = ids.iter().filter(|id| store.document(id).is_some()).count();

            let payload = BulkActionPayload {
                document_ids: ids,
                action: BulkAction::Review,
                reviewed_by: None,
            };
            prop_assert_eq!(store.bulk_update(&payload), existing);
        }
    }
}
