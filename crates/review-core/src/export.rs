//! CSV and JSON export of documents and attributes

use std::path::{Path, PathBuf};

use review_types::{Attribute, Document, DocumentWithAttributes, ExportFormat, ExportOptions};
use serde::Serialize;

use crate::error::Result;

pub const DOCUMENT_CSV_HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Status",
    "Uploaded At",
    "Attribute Count",
    "Confidence",
    "Reviewed By",
];

pub const ATTRIBUTE_CSV_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Category",
    "Section",
    "Page",
    "Confidence",
    "Extracted Value",
    "Corrected Value",
];

/// Export body as returned by the API, before it gets a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportBlob {
    pub fn new(format: ExportFormat, content: String) -> Self {
        Self {
            mime_type: format.mime_type().to_string(),
            bytes: content.into_bytes(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// A download ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Dashboard export of the document list
    pub fn documents(format: ExportFormat, blob: ExportBlob) -> Self {
        Self::named(format!("documents-export.{}", format.extension()), blob)
    }

    /// Review page export, named after the document without its extension
    pub fn attributes(document: &Document, format: ExportFormat, blob: ExportBlob) -> Self {
        Self::named(
            format!("{}-attributes.{}", document.file_stem(), format.extension()),
            blob,
        )
    }

    fn named(filename: String, blob: ExportBlob) -> Self {
        Self {
            filename,
            mime_type: blob.mime_type,
            bytes: blob.bytes,
        }
    }

    /// Write into `dir` under the export's filename
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Documents whose id is listed, in dataset order; `None` keeps all of them
pub fn select_documents<'a>(
    documents: &'a [Document],
    ids: Option<&[String]>,
) -> Vec<&'a Document> {
    match ids {
        Some(ids) => documents
            .iter()
            .filter(|doc| ids.iter().any(|id| id == &doc.id))
            .collect(),
        None => documents.iter().collect(),
    }
}

/// Render a document export per `options`
///
/// `attributes_for` is only consulted for JSON exports that nest attributes.
pub fn render_documents<F>(
    documents: &[Document],
    options: &ExportOptions,
    attributes_for: F,
) -> Result<ExportBlob>
where
    F: Fn(&str) -> Vec<Attribute>,
{
    let docs = select_documents(documents, options.document_ids.as_deref());

    let content = match options.format {
        ExportFormat::Csv => documents_csv(docs.iter().copied()),
        ExportFormat::Json if options.include_attributes => {
            let nested: Vec<DocumentWithAttributes> = docs
                .iter()
                .map(|doc| DocumentWithAttributes {
                    document: (*doc).clone(),
                    attributes: attributes_for(&doc.id),
                })
                .collect();
            to_pretty_json(&nested)?
        }
        ExportFormat::Json => to_pretty_json(&docs)?,
    };

    Ok(ExportBlob::new(options.format, content))
}

/// Render the attributes of one document
pub fn render_attributes(attributes: &[Attribute], format: ExportFormat) -> Result<ExportBlob> {
    let content = match format {
        ExportFormat::Csv => attributes_csv(attributes),
        ExportFormat::Json => to_pretty_json(&attributes)?,
    };
    Ok(ExportBlob::new(format, content))
}

pub fn documents_csv<'a, I>(documents: I) -> String
where
    I: IntoIterator<Item = &'a Document>,
{
    let rows = documents.into_iter().map(|doc| {
        [
            doc.id.clone(),
            quoted(&doc.title),
            doc.status.to_string(),
            doc.uploaded_at.clone(),
            doc.attribute_count.to_string(),
            format!("{}%", doc.overall_confidence),
            doc.reviewed_by.clone().unwrap_or_default(),
        ]
        .join(",")
    });
    csv_with_header(&DOCUMENT_CSV_HEADERS, rows)
}

pub fn attributes_csv(attributes: &[Attribute]) -> String {
    let rows = attributes.iter().map(|attr| {
        [
            attr.id.clone(),
            quoted(&attr.name),
            attr.category.clone(),
            quoted(&attr.section),
            attr.page.to_string(),
            format!("{}%", attr.confidence_score),
            quoted(&attr.extracted_value),
            quoted(&attr.corrected_value),
        ]
        .join(",")
    });
    csv_with_header(&ATTRIBUTE_CSV_HEADERS, rows)
}

fn csv_with_header(headers: &[&str], rows: impl Iterator<Item = String>) -> String {
    std::iter::once(headers.join(","))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
