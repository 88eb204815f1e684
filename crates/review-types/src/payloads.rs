//! Request and response bodies for the review API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{DocumentStatus, ParseError};

/// Status a saved review moves the document to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    Reviewed,
    Approved,
}

impl From<ReviewStatus> for DocumentStatus {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Reviewed => DocumentStatus::Reviewed,
            ReviewStatus::Approved => DocumentStatus::Approved,
        }
    }
}

/// One corrected attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCorrection {
    pub id: String,
    pub corrected_value: String,
}

/// Body of `POST /api/documents/:id/review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReviewPayload {
    pub document_id: String,
    pub attributes: Vec<AttributeCorrection>,
    pub status: ReviewStatus,
    /// Reviewer name, recorded on the document when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReviewResponse {
    pub success: bool,
}

/// Bulk operation applied to a selection of documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Approve,
    Review,
}

impl BulkAction {
    /// Status a document ends up in after the action
    pub fn target_status(&self) -> DocumentStatus {
        match self {
            BulkAction::Approve => DocumentStatus::Approved,
            BulkAction::Review => DocumentStatus::Reviewed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Approve => "approve",
            BulkAction::Review => "review",
        }
    }
}

impl FromStr for BulkAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Ok(BulkAction::Approve),
            "review" => Ok(BulkAction::Review),
            _ => Err(ParseError::new("bulk action", s)),
        }
    }
}

/// Body of `POST /api/documents/bulk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionPayload {
    pub document_ids: Vec<String>,
    pub action: BulkAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResponse {
    pub success: bool,
    pub updated_count: usize,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ParseError::new("export format", s)),
        }
    }
}

/// Body of `POST /api/documents/export`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Restrict the export to these ids; `None` exports everything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    pub format: ExportFormat,
    #[serde(default)]
    pub include_attributes: bool,
}
