//! View models for the building blocks of each page
//!
//! These compute the strings, classes and enabled states a front-end needs
//! for every card, bar and panel. Rendering is left to the caller.

use review_types::{Attribute, ConfidenceLevel, Document, DocumentStatus, User};

use crate::auth::AuthContext;
use crate::routes::Route;
use crate::summary::DashboardStats;

/// One row of the document list
#[derive(Debug, Clone, Copy)]
pub struct DocumentCard<'a> {
    pub document: &'a Document,
    pub selected: bool,
}

impl<'a> DocumentCard<'a> {
    pub fn new(document: &'a Document, selected: bool) -> Self {
        Self { document, selected }
    }

    pub fn status_class(&self) -> &'static str {
        match self.document.status {
            DocumentStatus::PendingReview => "status-pending",
            DocumentStatus::Reviewed => "status-reviewed",
            DocumentStatus::Approved => "status-approved",
        }
    }

    /// Pending documents invite a review; everything else is view-only
    pub fn action_label(&self) -> &'static str {
        if self.document.is_pending() {
            "Review"
        } else {
            "View"
        }
    }

    pub fn meta_line(&self) -> String {
        let doc = self.document;
        let mut line = format!(
            "Uploaded: {} · {} attributes · Confidence: {}%",
            doc.uploaded_at, doc.attribute_count, doc.overall_confidence
        );
        if let Some(reviewer) = &doc.reviewed_by {
            line.push_str(&format!(" · Reviewed by {reviewer}"));
        }
        line
    }

    pub fn target(&self) -> Route {
        Route::Review(self.document.id.clone())
    }
}

/// One extracted attribute in the review list
#[derive(Debug, Clone, Copy)]
pub struct AttributeCard<'a> {
    pub attribute: &'a Attribute,
    pub selected: bool,
    pub corrected_value: &'a str,
}

impl<'a> AttributeCard<'a> {
    pub fn confidence_class(&self) -> &'static str {
        match self.attribute.confidence_level {
            ConfidenceLevel::High => "confidence-high",
            ConfidenceLevel::Medium => "confidence-medium",
            ConfidenceLevel::Low => "confidence-low",
        }
    }

    /// e.g. `High (96%)`
    pub fn confidence_label(&self) -> String {
        format!(
            "{} ({}%)",
            self.attribute.confidence_level.label(),
            self.attribute.confidence_score
        )
    }

    pub fn section_line(&self) -> String {
        format!(
            "Section: {} – {}",
            self.attribute.section, self.attribute.category
        )
    }

    pub fn is_low_confidence(&self) -> bool {
        self.attribute.confidence_level == ConfidenceLevel::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: usize,
}

pub fn summary_cards(stats: &DashboardStats) -> [SummaryCard; 3] {
    [
        SummaryCard {
            title: "Total Documents",
            value: stats.total,
        },
        SummaryCard {
            title: "Pending Review",
            value: stats.pending,
        },
        SummaryCard {
            title: "Completed",
            value: stats.completed,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkActionBar {
    pub selected_count: usize,
    pub processing: bool,
}

impl BulkActionBar {
    /// The bar only appears once something is selected
    pub fn is_visible(&self) -> bool {
        self.selected_count > 0
    }

    pub fn selection_label(&self) -> String {
        format!("{} selected", self.selected_count)
    }

    pub fn actions_enabled(&self) -> bool {
        self.is_visible() && !self.processing
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Navbar<'a> {
    pub title: &'a str,
    pub user: Option<&'a User>,
}

impl<'a> Navbar<'a> {
    pub fn new(title: &'a str, auth: &'a AuthContext) -> Self {
        Self {
            title,
            user: auth.user(),
        }
    }

    pub fn user_name(&self) -> &str {
        self.user.map(|u| u.name.as_str()).unwrap_or_default()
    }
}

/// End the session and return where the user goes next
pub fn logout(auth: &mut AuthContext) -> Route {
    auth.logout();
    Route::Login
}

pub const ZOOM_LEVELS: [f32; 5] = [0.5, 0.75, 1.0, 1.25, 1.5];

/// Page navigation and zoom of the embedded PDF viewer
#[derive(Debug, Clone, PartialEq)]
pub struct PdfViewerState {
    pub current_page: u32,
    /// Zero until the document has loaded
    pub num_pages: u32,
    pub scale: f32,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PdfViewerState {
    fn default() -> Self {
        Self {
            current_page: 1,
            num_pages: 0,
            scale: 1.0,
            loading: true,
            error: None,
        }
    }
}

impl PdfViewerState {
    pub fn on_load_success(&mut self, num_pages: u32) {
        self.num_pages = num_pages;
        self.loading = false;
        self.error = None;
    }

    pub fn on_load_error(&mut self) {
        self.error = Some("Failed to load PDF document".to_string());
        self.loading = false;
    }

    /// Jump to the page an attribute was extracted from
    pub fn follow(&mut self, attribute: &Attribute) {
        if attribute.page > 0 {
            self.current_page = attribute.page;
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.num_pages
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    /// Accepts only the listed zoom levels; returns whether it changed
    pub fn set_scale(&mut self, scale: f32) -> bool {
        if ZOOM_LEVELS.contains(&scale) {
            self.scale = scale;
            true
        } else {
            false
        }
    }

    /// `Page 2 of 9`, or `Page 2 of ...` while loading
    pub fn page_label(&self) -> String {
        if self.num_pages == 0 {
            format!("Page {} of ...", self.current_page)
        } else {
            format!("Page {} of {}", self.current_page, self.num_pages)
        }
    }
}

/// Right-hand panel of the review page
#[derive(Debug, Clone, Copy)]
pub struct ViewerPanel<'a> {
    pub document_title: &'a str,
    pub pdf_url: Option<&'a str>,
    pub selected: Option<&'a Attribute>,
}

impl<'a> ViewerPanel<'a> {
    pub const HEADING: &'static str = "Contract Document";

    pub fn info_lines(&self) -> Vec<String> {
        match self.selected {
            Some(attr) => vec![
                format!("Viewing: {}", attr.name),
                format!("Section: {} · Page: {}", attr.section, attr.page),
            ],
            None => vec!["Select an attribute to view its location in the document".to_string()],
        }
    }

    /// Placeholder copy when there is no PDF to embed
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.pdf_url {
            Some(_) => None,
            None => Some(
                "PDF viewer ready – provide a PDF URL to display the contract document with section highlighting.",
            ),
        }
    }

    pub fn highlighted_text(&self) -> Option<&'a str> {
        self.selected.map(|attr| attr.highlighted_text.as_str())
    }
}
