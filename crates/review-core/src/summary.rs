//! Derived counts shown on the summary cards and review header

use review_types::{Attribute, ConfidenceLevel, Document, DocumentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl DashboardStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        Self {
            total: documents.len(),
            pending: documents
                .iter()
                .filter(|d| d.status == DocumentStatus::PendingReview)
                .count(),
            completed: documents.iter().filter(|d| d.status.is_completed()).count(),
        }
    }
}

pub fn low_confidence_count(attributes: &[Attribute]) -> usize {
    attributes
        .iter()
        .filter(|a| a.confidence_level == ConfidenceLevel::Low)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::MockDataset;

    #[test]
    fn sample_stats() {
        let data = MockDataset::sample();
        let stats = DashboardStats::from_documents(data.documents());
        assert_eq!(
            stats,
            DashboardStats {
                total: 6,
                pending: 3,
                completed: 3
            }
        );
    }

    #[test]
    fn pending_and_completed_partition_total() {
        let data = MockDataset::sample();
        let stats = DashboardStats::from_documents(data.documents());
        assert_eq!(stats.pending + stats.completed, stats.total);
    }

    #[test]
    fn low_confidence_counts_per_document() {
        let data = MockDataset::sample();
        assert_eq!(low_confidence_count(data.attributes_for("doc-001")), 1);
        assert_eq!(low_confidence_count(data.attributes_for("doc-005")), 3);
        assert_eq!(low_confidence_count(data.attributes_for("doc-004")), 0);
        assert_eq!(low_confidence_count(&[]), 0);
    }
}
