use std::collections::HashMap;

use review_types::{
    Attribute, AttributeCorrection, Document, ExportFormat, ReviewStatus, SaveReviewPayload,
};
use tracing::error;

use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::{AttributeCard, PdfViewerState, ViewerPanel};
use crate::export::ExportFile;
use crate::filter::filter_attributes;
use crate::notify::{Toast, Toasts};
use crate::routes::Route;
use crate::summary::low_confidence_count;

/// Outcome of opening a contract for review
#[derive(Debug)]
pub enum ReviewLoad {
    Loaded(Box<ReviewPage>),
    /// The document does not exist
    Redirect(Route),
    /// The fetch failed; the toast explains it
    Failed(Toast),
}

/// Side-by-side review of one contract's extracted attributes
#[derive(Debug)]
pub struct ReviewPage {
    document: Document,
    attributes: Vec<Attribute>,
    corrected: HashMap<String, String>,
    search: String,
    selected_id: Option<String>,
    viewer: PdfViewerState,
    pdf_url: Option<String>,
    saving: bool,
    exporting: bool,
    toasts: Toasts,
}

impl ReviewPage {
    pub const TITLE: &'static str = "Contract Review";

    /// Fetch the document and its attributes concurrently
    pub async fn load(api: &ApiClient, document_id: &str) -> ReviewLoad {
        let (document, attributes) = tokio::join!(
            api.get_document(document_id),
            api.get_attributes_by_document_id(document_id)
        );

        let attributes = match attributes {
            Ok(attributes) => attributes,
            Err(e) => {
                error!("Failed to fetch document {}: {}", document_id, e);
                return ReviewLoad::Failed(Toast::error(
                    "Failed to load document. Please try again.",
                ));
            }
        };

        match document {
            Some(document) => {
                let pdf_url = api.pdf_url(document.storage_ref.as_deref());
                ReviewLoad::Loaded(Box::new(Self::new(document, attributes, pdf_url)))
            }
            None => ReviewLoad::Redirect(Route::Documents),
        }
    }

    pub fn new(document: Document, attributes: Vec<Attribute>, pdf_url: Option<String>) -> Self {
        let corrected = attributes
            .iter()
            .map(|attr| (attr.id.clone(), attr.corrected_value.clone()))
            .collect();

        let mut page = Self {
            document,
            attributes,
            corrected,
            search: String::new(),
            selected_id: None,
            viewer: PdfViewerState::default(),
            pdf_url,
            saving: false,
            exporting: false,
            toasts: Toasts::default(),
        };
        if let Some(first) = page.attributes.first().map(|a| a.id.clone()) {
            page.select_attribute(&first);
        }
        page
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf_url.as_deref()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn visible_attributes(&self) -> Vec<&Attribute> {
        filter_attributes(&self.attributes, &self.search)
    }

    pub fn selected_attribute(&self) -> Option<&Attribute> {
        let id = self.selected_id.as_deref()?;
        self.attributes.iter().find(|attr| attr.id == id)
    }

    /// Select an attribute and move the viewer to its page
    pub fn select_attribute(&mut self, id: &str) -> bool {
        let Some(attr) = self.attributes.iter().find(|attr| attr.id == id) else {
            return false;
        };
        self.viewer.follow(attr);
        self.selected_id = Some(attr.id.clone());
        true
    }

    /// Returns false for an id this document does not have
    pub fn set_corrected_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.corrected.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn corrected_value(&self, id: &str) -> &str {
        self.corrected.get(id).map(String::as_str).unwrap_or_default()
    }

    pub fn low_confidence_count(&self) -> usize {
        low_confidence_count(&self.attributes)
    }

    /// Overwrite every corrected value with the extracted one
    pub fn accept_all(&mut self) {
        for attr in &self.attributes {
            self.corrected
                .insert(attr.id.clone(), attr.extracted_value.clone());
        }
        self.toasts.push(Toast::success(
            "Values Accepted",
            "All extracted values have been copied to corrected fields.",
        ));
    }

    /// Corrections in attribute order, marking the document reviewed
    pub fn review_payload(&self, reviewed_by: Option<&str>) -> SaveReviewPayload {
        SaveReviewPayload {
            document_id: self.document.id.clone(),
            attributes: self
                .attributes
                .iter()
                .map(|attr| AttributeCorrection {
                    id: attr.id.clone(),
                    corrected_value: self.corrected_value(&attr.id).to_string(),
                })
                .collect(),
            status: ReviewStatus::Reviewed,
            reviewed_by: reviewed_by.map(str::to_string),
        }
    }

    pub async fn save(&mut self, api: &ApiClient, auth: &AuthContext) -> bool {
        let payload = self.review_payload(auth.user().map(|u| u.name.as_str()));

        self.saving = true;
        let result = api.save_review(&self.document.id, &payload).await;
        self.saving = false;

        match result {
            Ok(response) if response.success => {
                self.toasts.push(Toast::success(
                    "Review Saved",
                    "Your review has been saved successfully.",
                ));
                true
            }
            Ok(_) => {
                self.toasts
                    .push(Toast::error("Failed to save review. Please try again."));
                false
            }
            Err(e) => {
                error!("Failed to save review: {}", e);
                self.toasts
                    .push(Toast::error("Failed to save review. Please try again."));
                false
            }
        }
    }

    pub async fn export(&mut self, api: &ApiClient, format: ExportFormat) -> Option<ExportFile> {
        self.exporting = true;
        let result = api.export_attributes(&self.document.id, format).await;
        self.exporting = false;

        match result {
            Ok(blob) => {
                self.toasts.push(Toast::success(
                    "Export Complete",
                    format!("Attributes exported as {}.", format.extension().to_uppercase()),
                ));
                Some(ExportFile::attributes(&self.document, format, blob))
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.toasts
                    .push(Toast::error("Failed to export attributes. Please try again."));
                None
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn attribute_cards(&self) -> Vec<AttributeCard<'_>> {
        let selected = self.selected_id.as_deref();
        self.visible_attributes()
            .into_iter()
            .map(|attr| AttributeCard {
                attribute: attr,
                selected: selected == Some(attr.id.as_str()),
                corrected_value: self.corrected_value(&attr.id),
            })
            .collect()
    }

    pub fn viewer(&self) -> &PdfViewerState {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut PdfViewerState {
        &mut self.viewer
    }

    pub fn viewer_panel(&self) -> ViewerPanel<'_> {
        ViewerPanel {
            document_title: &self.document.title,
            pdf_url: self.pdf_url.as_deref(),
            selected: self.selected_attribute(),
        }
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpBackend, MockBackend, MockDelays};
    use crate::auth::{DEMO_EMAIL, DEMO_PASSWORD};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn api() -> ApiClient {
        ApiClient::mock(MockBackend::new(MockDelays::none()))
    }

    async fn open(api: &ApiClient, id: &str) -> ReviewPage {
        match ReviewPage::load(api, id).await {
            ReviewLoad::Loaded(page) => *page,
            other => panic!("expected {id} to load, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_selects_first_attribute() {
        let page = open(&api(), "doc-001").await;
        assert_eq!(page.attributes().len(), 4);
        assert_eq!(page.selected_attribute().unwrap().id, "attr-001-1");
        assert_eq!(page.viewer().current_page, 1);
        assert_eq!(page.corrected_value("attr-001-1"), "");
        assert!(page.pdf_url().is_none());
    }

    #[tokio::test]
    async fn corrected_values_start_from_saved_corrections() {
        let page = open(&api(), "doc-002").await;
        assert_eq!(page.corrected_value("attr-002-1"), "3 years");
    }

    #[tokio::test]
    async fn pdf_url_uses_storage_base() {
        let api = api().with_storage_base_url("https://blobs.example.com");
        let page = open(&api, "doc-001").await;
        assert_eq!(
            page.pdf_url(),
            Some("https://blobs.example.com/contracts/msa-acme-2024.pdf")
        );
        assert!(page.viewer_panel().placeholder().is_none());
    }

    #[tokio::test]
    async fn missing_document_redirects() {
        match ReviewPage::load(&api(), "doc-999").await {
            ReviewLoad::Redirect(route) => assert_eq!(route, Route::Documents),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_api_fails_with_toast() {
        let api = ApiClient::remote(HttpBackend::new("http://127.0.0.1:9").unwrap());
        match ReviewPage::load(&api, "doc-001").await {
            ReviewLoad::Failed(toast) => assert!(toast.is_error()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn selecting_moves_viewer_to_attribute_page() {
        let mut page = open(&api(), "doc-001").await;
        page.viewer_mut().on_load_success(12);
        assert!(page.select_attribute("attr-001-3"));
        assert_eq!(page.viewer().current_page, 9);
        assert!(!page.select_attribute("attr-999"));
        assert_eq!(page.selected_attribute().unwrap().id, "attr-001-3");

        let cards = page.attribute_cards();
        let selected: Vec<&str> = cards
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.attribute.id.as_str())
            .collect();
        assert_eq!(selected, vec!["attr-001-3"]);
    }

    #[tokio::test]
    async fn search_filters_by_name_section_or_category() {
        let mut page = open(&api(), "doc-001").await;
        page.set_search("legal");
        let ids: Vec<&str> = page.visible_attributes().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["attr-001-3", "attr-001-4"]);

        page.set_search("fees and");
        assert_eq!(page.visible_attributes().len(), 1);
    }

    #[tokio::test]
    async fn low_confidence_badge() {
        let page = open(&api(), "doc-005").await;
        assert_eq!(page.low_confidence_count(), 3);
    }

    #[tokio::test]
    async fn accept_all_copies_every_extracted_value() {
        let mut page = open(&api(), "doc-002").await;
        page.set_corrected_value("attr-002-1", "5 years");
        page.accept_all();
        for attr in page.attributes() {
            assert_eq!(page.corrected_value(&attr.id), attr.extracted_value);
        }
        assert_eq!(page.toasts().last().unwrap().title, "Values Accepted");
    }

    #[tokio::test]
    async fn unknown_attribute_cannot_be_corrected() {
        let mut page = open(&api(), "doc-001").await;
        assert!(!page.set_corrected_value("attr-002-1", "x"));
        assert_eq!(page.corrected_value("attr-002-1"), "");
    }

    #[tokio::test]
    async fn payload_follows_attribute_order() {
        let mut page = open(&api(), "doc-001").await;
        page.set_corrected_value("attr-001-4", "Fees paid in prior 12 months");

        let payload = page.review_payload(Some("Admin User"));
        assert_eq!(payload.document_id, "doc-001");
        assert_eq!(payload.status, ReviewStatus::Reviewed);
        assert_eq!(payload.reviewed_by.as_deref(), Some("Admin User"));
        let ids: Vec<&str> = payload.attributes.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["attr-001-1", "attr-001-2", "attr-001-3", "attr-001-4"]);
        assert_eq!(
            payload.attributes[3].corrected_value,
            "Fees paid in prior 12 months"
        );
    }

    #[tokio::test]
    async fn save_reports_success() {
        let api = api();
        let mut auth = AuthContext::new().with_delay(Duration::ZERO);
        auth.login(DEMO_EMAIL, DEMO_PASSWORD).await;

        let mut page = open(&api, "doc-003").await;
        assert!(page.save(&api, &auth).await);
        assert!(!page.is_saving());
        let toast = page.toasts().last().unwrap();
        assert_eq!(toast.title, "Review Saved");
    }

    #[tokio::test]
    async fn export_names_file_after_document() {
        let api = api();
        let mut page = open(&api, "doc-006").await;
        let file = page.export(&api, ExportFormat::Csv).await.unwrap();
        assert_eq!(
            file.filename,
            "Statement of Work - Hooli Data Migration-attributes.csv"
        );
        assert_eq!(file.mime_type, "text/csv");
        assert_eq!(String::from_utf8(file.bytes).unwrap().lines().count(), 4);
        assert_eq!(
            page.take_toasts()[0].description,
            "Attributes exported as CSV."
        );
    }
}
