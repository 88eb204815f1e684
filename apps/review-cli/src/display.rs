//! Plain-text rendering of the page view models.
//!
//! Every function returns the block it would print so the layout can be
//! checked without a terminal.

use review_core::components::{
    AttributeCard, DocumentCard, Navbar, PdfViewerState, SummaryCard, ViewerPanel,
};
use review_core::{Toast, ToastVariant};

const LABEL_WIDTH: usize = 18;

// ── Dashboard ──

/// Page title with the signed-in user on the right
pub fn navbar(nav: &Navbar<'_>) -> String {
    format!("{}  |  {}", nav.title, nav.user_name())
}

pub fn summary(cards: &[SummaryCard]) -> String {
    cards
        .iter()
        .map(|card| format!("{:<LABEL_WIDTH$} {}", card.title, card.value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn document_list(cards: &[DocumentCard<'_>]) -> String {
    if cards.is_empty() {
        return "No documents found".to_string();
    }

    let mut out = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        let doc = card.document;
        let marker = if card.selected { "[x]" } else { "[ ]" };
        out.push(format!(
            "{marker} {:<8} {:<15} {}  ({})",
            doc.id,
            doc.status.as_str(),
            doc.title,
            card.action_label()
        ));
        out.push(format!("    {}", card.meta_line()));
    }
    out.join("\n")
}

// ── Contract review ──

pub fn attribute_list(cards: &[AttributeCard<'_>], low_confidence: usize) -> String {
    let mut out = Vec::new();
    if low_confidence > 0 {
        out.push(format!("{low_confidence} low confidence"));
    }
    if cards.is_empty() {
        out.push("No attributes match your search".to_string());
    }

    for card in cards {
        let attr = card.attribute;
        let marker = if card.selected { ">" } else { " " };
        out.push(format!(
            "{marker} {:<12} {}  [{}]",
            attr.id,
            attr.name,
            card.confidence_label()
        ));
        out.push(format!("    {}", card.section_line()));
        out.push(format!("    {:<LABEL_WIDTH$} {}", "Extracted", attr.extracted_value));
        out.push(format!("    {:<LABEL_WIDTH$} {}", "Corrected", card.corrected_value));
    }
    out.join("\n")
}

pub fn viewer(panel: &ViewerPanel<'_>, state: &PdfViewerState) -> String {
    let mut out = vec![
        format!("=== {} ===", ViewerPanel::HEADING),
        panel.document_title.to_string(),
    ];
    out.extend(panel.info_lines());

    match (panel.pdf_url, panel.placeholder()) {
        (Some(url), _) => {
            out.push(format!("{:<LABEL_WIDTH$} {url}", "PDF"));
            out.push(format!(
                "{}  (zoom {}%)",
                state.page_label(),
                (state.scale * 100.0).round() as u32
            ));
        }
        (None, Some(placeholder)) => out.push(placeholder.to_string()),
        (None, None) => {}
    }

    if let Some(text) = panel.highlighted_text() {
        out.push(format!("\"{text}\""));
    }
    out.join("\n")
}

// ── Notifications ──

pub fn toast(toast: &Toast) -> String {
    let tag = match toast.variant {
        ToastVariant::Default => "ok",
        ToastVariant::Destructive => "error",
    };
    format!("[{tag}] {}: {}", toast.title, toast.description)
}

pub fn print_toasts(toasts: &[Toast]) {
    for t in toasts {
        if t.is_error() {
            eprintln!("{}", toast(t));
        } else {
            println!("{}", toast(t));
        }
    }
}
