//! Multi-select on the dashboard and bulk status updates

use std::collections::BTreeSet;

use review_types::{BulkAction, Document};

/// Set of selected document ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id; returns whether it is selected afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn select(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids.extend(ids.into_iter().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

/// Apply `action` to the listed documents, recording `reviewer` when given
///
/// Documents not listed are left untouched. Returns how many were updated.
pub fn apply_bulk_action(
    documents: &mut [Document],
    ids: &[String],
    action: BulkAction,
    reviewer: Option<&str>,
) -> usize {
    let status = action.target_status();
    let mut updated = 0;

    for doc in documents.iter_mut().filter(|doc| ids.contains(&doc.id)) {
        doc.status = status;
        if let Some(name) = reviewer {
            doc.reviewed_by = Some(name.to_string());
        }
        updated += 1;
    }

    updated
}
