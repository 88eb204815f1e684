use review_types::{BulkAction, BulkActionPayload, Document, ExportFormat, ExportOptions};
use tracing::error;

use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::{summary_cards, BulkActionBar, DocumentCard, SummaryCard};
use crate::export::ExportFile;
use crate::filter::{filter_documents, StatusFilter};
use crate::notify::{Toast, Toasts};
use crate::selection::{apply_bulk_action, Selection};
use crate::summary::DashboardStats;

/// Document list with search, status filter, selection and bulk actions
#[derive(Debug, Default)]
pub struct DashboardPage {
    documents: Vec<Document>,
    loading: bool,
    search: String,
    status_filter: StatusFilter,
    selection: Selection,
    processing: bool,
    toasts: Toasts,
}

impl DashboardPage {
    pub const TITLE: &'static str = "Documents Dashboard";

    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fetch the list; a failure is logged and leaves it empty
    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        match api.get_documents().await {
            Ok(documents) => self.documents = documents,
            Err(e) => error!("Failed to fetch documents: {}", e),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn visible(&self) -> Vec<&Document> {
        filter_documents(&self.documents, &self.search, self.status_filter)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_documents(&self.documents)
    }

    pub fn summary_cards(&self) -> [SummaryCard; 3] {
        summary_cards(&self.stats())
    }

    pub fn cards(&self) -> Vec<DocumentCard<'_>> {
        self.visible()
            .into_iter()
            .map(|doc| DocumentCard::new(doc, self.selection.contains(&doc.id)))
            .collect()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Add ids to the selection; repeats and already-selected ids are kept
    pub fn select<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.selection.select_all(ids);
    }

    pub fn select_all_visible(&mut self) {
        let ids: Vec<String> = self.visible().iter().map(|d| d.id.clone()).collect();
        self.selection.select_all(ids.iter().map(String::as_str));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn bulk_action_bar(&self) -> BulkActionBar {
        BulkActionBar {
            selected_count: self.selection.len(),
            processing: self.processing,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub async fn bulk_approve(&mut self, api: &ApiClient, auth: &AuthContext) -> Option<usize> {
        self.bulk(api, auth, BulkAction::Approve).await
    }

    pub async fn bulk_review(&mut self, api: &ApiClient, auth: &AuthContext) -> Option<usize> {
        self.bulk(api, auth, BulkAction::Review).await
    }

    /// Send the action for the selection and mirror it locally on success
    async fn bulk(
        &mut self,
        api: &ApiClient,
        auth: &AuthContext,
        action: BulkAction,
    ) -> Option<usize> {
        if self.selection.is_empty() || self.processing {
            return None;
        }

        let ids = self.selection.ids();
        let reviewer = auth.user().map(|u| u.name.clone());
        let payload = BulkActionPayload {
            document_ids: ids.clone(),
            action,
            reviewed_by: reviewer.clone(),
        };

        self.processing = true;
        let result = api.bulk_update_documents(&payload).await;
        self.processing = false;

        match result {
            Ok(response) if response.success => {
                let updated =
                    apply_bulk_action(&mut self.documents, &ids, action, reviewer.as_deref());
                self.selection.clear();
                let (title, verb) = match action {
                    BulkAction::Approve => ("Documents Approved", "approved"),
                    BulkAction::Review => ("Documents Reviewed", "marked as reviewed"),
                };
                self.toasts.push(Toast::success(
                    title,
                    format!("{} document(s) {}.", response.updated_count, verb),
                ));
                Some(updated)
            }
            Ok(_) => {
                self.toasts
                    .push(Toast::error("Bulk action was not applied. Please try again."));
                None
            }
            Err(e) => {
                error!("Bulk action failed: {}", e);
                self.toasts
                    .push(Toast::error("Failed to update documents. Please try again."));
                None
            }
        }
    }

    /// Export the selection, or every document when nothing is selected
    pub async fn export(
        &mut self,
        api: &ApiClient,
        format: ExportFormat,
        include_attributes: bool,
    ) -> Option<ExportFile> {
        let options = ExportOptions {
            document_ids: (!self.selection.is_empty()).then(|| self.selection.ids()),
            format,
            include_attributes,
        };

        self.processing = true;
        let result = api.export_documents(&options).await;
        self.processing = false;

        match result {
            Ok(blob) => {
                self.toasts.push(Toast::success(
                    "Export Complete",
                    format!("Documents exported as {}.", format.extension().to_uppercase()),
                ));
                Some(ExportFile::documents(format, blob))
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.toasts
                    .push(Toast::error("Failed to export documents. Please try again."));
                None
            }
        }
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }
}
