use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse one of the string-backed enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Review lifecycle of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    Reviewed,
    Approved,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::PendingReview,
        DocumentStatus::Reviewed,
        DocumentStatus::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::PendingReview => "Pending Review",
            DocumentStatus::Reviewed => "Reviewed",
            DocumentStatus::Approved => "Approved",
        }
    }

    /// Reviewed and Approved both count as done on the dashboard
    pub fn is_completed(&self) -> bool {
        matches!(self, DocumentStatus::Reviewed | DocumentStatus::Approved)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = ParseError;

    /// Accepts the display string as well as the short CLI spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending review" | "pending" | "pending_review" => Ok(DocumentStatus::PendingReview),
            "reviewed" => Ok(DocumentStatus::Reviewed),
            "approved" => Ok(DocumentStatus::Approved),
            _ => Err(ParseError::new("document status", s)),
        }
    }
}

/// Upstream system a document was ingested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Salesforce,
    Conga,
    Sftp,
}

impl DocumentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSource::Salesforce => "salesforce",
            DocumentSource::Conga => "conga",
            DocumentSource::Sftp => "sftp",
        }
    }
}

/// A contract document awaiting or past review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub uploaded_at: String,
    pub status: DocumentStatus,
    pub attribute_count: u32,
    /// Percentage, 0-100
    pub overall_confidence: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DocumentSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_ref: Option<String>,
}

impl Document {
    pub fn is_pending(&self) -> bool {
        self.status == DocumentStatus::PendingReview
    }

    /// Title with its trailing file extension removed (`msa.pdf` -> `msa`)
    ///
    /// A bare extension such as `.pdf` leaves an empty stem.
    pub fn file_stem(&self) -> &str {
        match self.title.rsplit_once('.') {
            Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
            _ => &self.title,
        }
    }
}

/// Categorical bucket for an extraction confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Lowest score that still counts as high confidence
    pub const HIGH_THRESHOLD: u32 = 85;
    /// Lowest score that still counts as medium confidence
    pub const MEDIUM_THRESHOLD: u32 = 60;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    /// Capitalized form used in labels
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// A single extracted field of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub category: String,
    pub section: String,
    pub page: u32,
    pub confidence_score: u32,
    pub confidence_level: ConfidenceLevel,
    pub extracted_value: String,
    #[serde(default)]
    pub corrected_value: String,
    pub highlighted_text: String,
}

impl Attribute {
    /// True when the stored level agrees with the score thresholds
    pub fn level_matches_score(&self) -> bool {
        ConfidenceLevel::from_score(self.confidence_score) == self.confidence_level
    }
}

/// Document with its attributes nested, used by JSON exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWithAttributes {
    #[serde(flatten)]
    pub document: Document,
    pub attributes: Vec<Attribute>,
}

/// Logged in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Session state held by the auth context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_document() -> Document {
        Document {
            id: "doc-1".to_string(),
            title: "Master Services Agreement.pdf".to_string(),
            uploaded_at: "2024-01-15".to_string(),
            status: DocumentStatus::PendingReview,
            attribute_count: 12,
            overall_confidence: 87,
            reviewed_by: None,
            source: Some(DocumentSource::Salesforce),
            storage_ref: None,
        }
    }

    #[test]
    fn status_serializes_as_display_string() {
        let json = serde_json::to_string(&DocumentStatus::PendingReview).unwrap();
        assert_eq!(json, "\"Pending Review\"");
        let parsed: DocumentStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(parsed, DocumentStatus::Approved);
    }

    #[test]
    fn status_parses_short_forms() {
        assert_eq!("pending".parse(), Ok(DocumentStatus::PendingReview));
        assert_eq!("Pending Review".parse(), Ok(DocumentStatus::PendingReview));
        assert_eq!("REVIEWED".parse(), Ok(DocumentStatus::Reviewed));
        assert!("archived".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn document_uses_camel_case_and_skips_missing_options() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(value["uploadedAt"], "2024-01-15");
        assert_eq!(value["attributeCount"], 12);
        assert_eq!(value["overallConfidence"], 87);
        assert_eq!(value["source"], "salesforce");
        assert!(value.get("reviewedBy").is_none());
        assert!(value.get("storageRef").is_none());
    }

    #[test]
    fn file_stem_strips_extension() {
        let mut doc = sample_document();
        assert_eq!(doc.file_stem(), "Master Services Agreement");

        doc.title = "NDA".to_string();
        assert_eq!(doc.file_stem(), "NDA");

        doc.title = "lease.v2.docx".to_string();
        assert_eq!(doc.file_stem(), "lease.v2");

        doc.title = ".pdf".to_string();
        assert_eq!(doc.file_stem(), "");

        doc.title = "draft.".to_string();
        assert_eq!(doc.file_stem(), "draft.");

        doc.title = "v1.0/contract".to_string();
        assert_eq!(doc.file_stem(), "v1.0/contract");
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(ConfidenceLevel::from_score(100), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(85), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(84), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(60), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(59), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(0), ConfidenceLevel::Low);
    }

    #[test]
    fn nested_export_flattens_document_fields() {
        let nested = DocumentWithAttributes {
            document: sample_document(),
            attributes: vec![],
        };
        let value = serde_json::to_value(&nested).unwrap();
        assert_eq!(value["id"], "doc-1");
        assert_eq!(value["status"], "Pending Review");
        assert!(value["attributes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn auth_state_defaults_to_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }
}
