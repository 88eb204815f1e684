//! Built-in sample documents and attributes
//!
//! Used by the mock backend when no review API is configured, and as the
//! seed data of the review API server.

use std::collections::HashMap;

use review_types::{Attribute, ConfidenceLevel, Document, DocumentSource, DocumentStatus};

/// Documents plus their attributes, keyed by document id
#[derive(Debug, Clone, Default)]
pub struct MockDataset {
    documents: Vec<Document>,
    attributes: HashMap<String, Vec<Attribute>>,
}

impl MockDataset {
    pub fn new(documents: Vec<Document>, attributes: HashMap<String, Vec<Attribute>>) -> Self {
        Self {
            documents,
            attributes,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Attributes of a document; unknown ids have none
    pub fn attributes_for(&self, document_id: &str) -> &[Attribute] {
        self.attributes
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn into_parts(self) -> (Vec<Document>, HashMap<String, Vec<Attribute>>) {
        (self.documents, self.attributes)
    }

    /// Six contracts across all statuses and sources
    pub fn sample() -> Self {
        let mut attributes = HashMap::new();

        attributes.insert(
            "doc-001".to_string(),
            vec![
                attribute(
                    "attr-001-1",
                    "Effective Date",
                    "Dates",
                    "1. Term",
                    1,
                    96,
                    "January 1, 2024",
                    "",
                    "This Agreement is effective as of January 1, 2024 (the \"Effective Date\") and continues until terminated in accordance with Section 11.",
                ),
                attribute(
                    "attr-001-2",
                    "Payment Terms",
                    "Financial",
                    "4. Fees and Payment",
                    3,
                    91,
                    "Net 30",
                    "",
                    "Customer shall pay all undisputed invoices within thirty (30) days of the invoice date.",
                ),
                attribute(
                    "attr-001-3",
                    "Governing Law",
                    "Legal",
                    "12. Miscellaneous",
                    9,
                    72,
                    "State of Delaware",
                    "",
                    "This Agreement shall be governed by the laws of the State of Delaware, without regard to its conflict of laws principles.",
                ),
                attribute(
                    "attr-001-4",
                    "Limitation of Liability Cap",
                    "Legal",
                    "9. Limitation of Liability",
                    7,
                    48,
                    "12 months of fees",
                    "",
                    "In no event shall either party's aggregate liability exceed the fees paid or payable in the twelve (12) months preceding the claim.",
                ),
            ],
        );

        attributes.insert(
            "doc-002".to_string(),
            vec![
                attribute(
                    "attr-002-1",
                    "Confidentiality Period",
                    "Term",
                    "3. Term of Confidentiality",
                    2,
                    98,
                    "3 years",
                    "3 years",
                    "The obligations of this Section survive for three (3) years following the date of disclosure.",
                ),
                attribute(
                    "attr-002-2",
                    "Disclosing Party",
                    "Parties",
                    "Preamble",
                    1,
                    88,
                    "Globex Industries, Inc.",
                    "Globex Industries, Inc.",
                    "This Mutual Non-Disclosure Agreement is entered into by Globex Industries, Inc. (\"Globex\") and the Recipient.",
                ),
                attribute(
                    "attr-002-3",
                    "Governing Law",
                    "Legal",
                    "8. Governing Law",
                    4,
                    90,
                    "State of New York",
                    "State of New York",
                    "This Agreement is governed by the laws of the State of New York.",
                ),
                attribute(
                    "attr-002-4",
                    "Permitted Disclosures",
                    "Legal",
                    "5. Exceptions",
                    3,
                    65,
                    "Employees and advisors with need to know",
                    "Employees, affiliates and advisors with a need to know",
                    "Recipient may disclose Confidential Information to its employees, affiliates and professional advisors who have a need to know.",
                ),
            ],
        );

        attributes.insert(
            "doc-003".to_string(),
            vec![
                attribute(
                    "attr-003-1",
                    "License Fee",
                    "Financial",
                    "5. Fees",
                    4,
                    93,
                    "$250,000 per annum",
                    "",
                    "Licensee shall pay an annual license fee of two hundred fifty thousand dollars ($250,000).",
                ),
                attribute(
                    "attr-003-2",
                    "License Scope",
                    "Grant",
                    "2. License Grant",
                    2,
                    81,
                    "Non-exclusive, non-transferable, worldwide",
                    "",
                    "Licensor grants Licensee a non-exclusive, non-transferable, worldwide license to use the Software.",
                ),
                attribute(
                    "attr-003-3",
                    "Renewal Terms",
                    "Term",
                    "10. Term and Renewal",
                    8,
                    55,
                    "Automatic 1-year renewal unless 90 days notice",
                    "",
                    "This Agreement renews automatically for successive one-year terms unless either party gives ninety (90) days notice of non-renewal.",
                ),
                attribute(
                    "attr-003-4",
                    "Audit Rights",
                    "Compliance",
                    "7. Audit",
                    6,
                    62,
                    "Once per calendar year with 30 days notice",
                    "",
                    "Licensor may audit Licensee's use of the Software no more than once per calendar year upon thirty (30) days written notice.",
                ),
            ],
        );

        attributes.insert(
            "doc-004".to_string(),
            vec![
                attribute(
                    "attr-004-1",
                    "Contract Value",
                    "Financial",
                    "Schedule A - Pricing",
                    5,
                    97,
                    "$1,200,000",
                    "$1,200,000",
                    "The total contract value for the Initial Term is one million two hundred thousand dollars ($1,200,000).",
                ),
                attribute(
                    "attr-004-2",
                    "Delivery Terms",
                    "Operations",
                    "3. Delivery",
                    2,
                    94,
                    "FOB Destination",
                    "FOB Destination",
                    "All Products shall be delivered FOB Destination to the facilities designated by Buyer.",
                ),
                attribute(
                    "attr-004-3",
                    "Termination Notice",
                    "Term",
                    "11. Termination",
                    7,
                    89,
                    "60 days written notice",
                    "60 days written notice",
                    "Either party may terminate this Agreement for convenience upon sixty (60) days written notice.",
                ),
                attribute(
                    "attr-004-4",
                    "Warranty Period",
                    "Legal",
                    "8. Warranties",
                    6,
                    86,
                    "24 months from delivery",
                    "24 months from delivery",
                    "Vendor warrants that the Products will be free from defects for twenty-four (24) months from delivery.",
                ),
            ],
        );

        attributes.insert(
            "doc-005".to_string(),
            vec![
                attribute(
                    "attr-005-1",
                    "Monthly Rent",
                    "Financial",
                    "3. Rent",
                    2,
                    58,
                    "$48,500",
                    "",
                    "Tenant shall pay Base Rent of forty-eight thousand five hundred dollars ($48,500) per month, in advance.",
                ),
                attribute(
                    "attr-005-2",
                    "Security Deposit",
                    "Financial",
                    "4. Security Deposit",
                    2,
                    44,
                    "Two months' rent",
                    "",
                    "Upon execution Tenant shall deposit with Landlord a sum equal to two (2) months of Base Rent as security.",
                ),
                attribute(
                    "attr-005-3",
                    "Lease Term",
                    "Term",
                    "2. Term",
                    1,
                    71,
                    "10 years commencing March 1, 2024",
                    "",
                    "The Term of this Lease is ten (10) years commencing on March 1, 2024.",
                ),
                attribute(
                    "attr-005-4",
                    "Permitted Use",
                    "Operations",
                    "6. Use of Premises",
                    4,
                    39,
                    "General office and ancillary uses",
                    "",
                    "The Premises shall be used for general office purposes and uses ancillary thereto, and for no other purpose.",
                ),
            ],
        );

        attributes.insert(
            "doc-006".to_string(),
            vec![
                attribute(
                    "attr-006-1",
                    "Project Start Date",
                    "Dates",
                    "1. Project Timeline",
                    1,
                    90,
                    "March 4, 2024",
                    "March 4, 2024",
                    "Services under this Statement of Work commence on March 4, 2024.",
                ),
                attribute(
                    "attr-006-2",
                    "Total Fees",
                    "Financial",
                    "5. Compensation",
                    3,
                    84,
                    "$185,000 fixed fee",
                    "$185,000 fixed fee",
                    "Client shall pay Provider a fixed fee of $185,000 for the Services, invoiced per milestone.",
                ),
                attribute(
                    "attr-006-3",
                    "Acceptance Criteria",
                    "Operations",
                    "4. Acceptance",
                    2,
                    77,
                    "Successful reconciliation of migrated records",
                    "Successful reconciliation of all migrated records",
                    "Deliverables are accepted upon successful reconciliation of all migrated records against the source system.",
                ),
            ],
        );

        let documents = vec![
            document(
                "doc-001",
                "Master Services Agreement - Acme Corp.pdf",
                "2024-01-15",
                DocumentStatus::PendingReview,
                None,
                Some(DocumentSource::Salesforce),
                Some("contracts/msa-acme-2024.pdf"),
                &attributes,
            ),
            document(
                "doc-002",
                "NDA - Globex Industries.pdf",
                "2024-01-18",
                DocumentStatus::Reviewed,
                Some("Sarah Chen"),
                Some(DocumentSource::Conga),
                Some("contracts/nda-globex.pdf"),
                &attributes,
            ),
            document(
                "doc-003",
                "Software License Agreement - Initech.pdf",
                "2024-01-22",
                DocumentStatus::PendingReview,
                None,
                Some(DocumentSource::Sftp),
                None,
                &attributes,
            ),
            document(
                "doc-004",
                "Vendor Agreement - Umbrella Supplies.pdf",
                "2024-02-02",
                DocumentStatus::Approved,
                Some("Michael Torres"),
                Some(DocumentSource::Salesforce),
                Some("contracts/vendor-umbrella.pdf"),
                &attributes,
            ),
            document(
                "doc-005",
                "Lease Agreement - 400 Market Street.pdf",
                "2024-02-10",
                DocumentStatus::PendingReview,
                None,
                Some(DocumentSource::Conga),
                None,
                &attributes,
            ),
            document(
                "doc-006",
                "Statement of Work - Hooli Data Migration.docx",
                "2024-02-14",
                DocumentStatus::Reviewed,
                Some("Sarah Chen"),
                None,
                None,
                &attributes,
            ),
        ];

        Self::new(documents, attributes)
    }
}

#[allow(clippy::too_many_arguments)]
fn attribute(
    id: &str,
    name: &str,
    category: &str,
    section: &str,
    page: u32,
    confidence_score: u32,
    extracted_value: &str,
    corrected_value: &str,
    highlighted_text: &str,
) -> Attribute {
    Attribute {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        section: section.to_string(),
        page,
        confidence_score,
        confidence_level: ConfidenceLevel::from_score(confidence_score),
        extracted_value: extracted_value.to_string(),
        corrected_value: corrected_value.to_string(),
        highlighted_text: highlighted_text.to_string(),
    }
}

/// Attribute count and overall confidence come from the document's attributes
#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    title: &str,
    uploaded_at: &str,
    status: DocumentStatus,
    reviewed_by: Option<&str>,
    source: Option<DocumentSource>,
    storage_ref: Option<&str>,
    attributes: &HashMap<String, Vec<Attribute>>,
) -> Document {
    let attrs = attributes.get(id).map(Vec::as_slice).unwrap_or_default();
    let total: u32 = attrs.iter().map(|a| a.confidence_score).sum();
    let overall_confidence = match attrs.len() as u32 {
        0 => 0,
        n => (total + n / 2) / n,
    };

    Document {
        id: id.to_string(),
        title: title.to_string(),
        uploaded_at: uploaded_at.to_string(),
        status,
        attribute_count: attrs.len() as u32,
        overall_confidence,
        reviewed_by: reviewed_by.map(str::to_string),
        source,
        storage_ref: storage_ref.map(str::to_string),
    }
}
