//! Search and status filtering for the document and attribute lists

use std::fmt;

use review_types::{Attribute, Document, DocumentStatus};

/// Status dropdown value on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DocumentStatus),
}

impl StatusFilter {
    /// Dropdown entries in display order
    pub fn options() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Only(DocumentStatus::PendingReview),
            StatusFilter::Only(DocumentStatus::Reviewed),
            StatusFilter::Only(DocumentStatus::Approved),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: DocumentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Option<DocumentStatus>> for StatusFilter {
    fn from(status: Option<DocumentStatus>) -> Self {
        status.map_or(StatusFilter::All, StatusFilter::Only)
    }
}

/// Case-insensitive substring match; an empty query matches everything
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn matches_search(document: &Document, query: &str) -> bool {
    contains_ci(&document.title, &query.to_lowercase())
}

/// Documents whose title contains `query` and whose status passes `status`
pub fn filter_documents<'a>(
    documents: &'a [Document],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Document> {
    let query = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| contains_ci(&doc.title, &query) && status.matches(doc.status))
        .collect()
}

/// Attributes whose name, section or category contains `query`
pub fn filter_attributes<'a>(attributes: &'a [Attribute], query: &str) -> Vec<&'a Attribute> {
    let query = query.to_lowercase();
    attributes
        .iter()
        .filter(|attr| {
            contains_ci(&attr.name, &query)
                || contains_ci(&attr.section, &query)
                || contains_ci(&attr.category, &query)
        })
        .collect()
}
