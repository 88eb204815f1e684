//! Shared types for the contract review portal
//!
//! Everything that crosses the wire between the review API, the client
//! library and the front-ends lives here. JSON uses camelCase keys and the
//! display strings of each status so exports and API bodies stay readable.

pub mod payloads;
pub mod types;

pub use payloads::{
    AttributeCorrection, BulkAction, BulkActionPayload, BulkUpdateResponse, ExportFormat,
    ExportOptions, ReviewStatus, SaveReviewPayload, SaveReviewResponse,
};
pub use types::{
    Attribute, AuthState, ConfidenceLevel, Document, DocumentSource, DocumentStatus,
    DocumentWithAttributes, ParseError, User,
};
