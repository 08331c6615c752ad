// src/extractors/cell.rs
use crate::docx::models::is_wml;
use crate::docx::Relationships;
use crate::extractors::label;
use crate::extractors::model::{Cell, ResolvedLink};
use crate::extractors::runs::{parse_paragraph, Fragment};

/// Collects a `w:tc`'s paragraph text and its resolvable links.
///
/// Paragraph texts are trimmed and the non-empty ones joined by newlines.
/// Links without a target are dropped; placeholder link text is replaced
/// via [`label::resolve`].
pub fn extract_cell(cell: roxmltree::Node, relationships: &Relationships) -> Cell {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut links = Vec::new();

    for paragraph in cell.descendants().filter(|n| is_wml(*n, "p")) {
        let parsed = parse_paragraph(paragraph, relationships);
        let text = parsed.text.trim();
        if !text.is_empty() {
            paragraphs.push(text.to_string());
        }

        for fragment in parsed.fragments {
            if let Fragment::Link { raw_label, url: Some(url), preceding_text, .. } = fragment {
                let label = label::resolve(&raw_label, &preceding_text);
                links.push(ResolvedLink { label, url });
            }
        }
    }

    Cell { text: paragraphs.join("\n").trim().to_string(), links }
}
