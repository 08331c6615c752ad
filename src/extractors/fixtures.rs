// src/extractors/fixtures.rs
//! WordprocessingML builders for tests.

use crate::docx::models::Relationships;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#;

pub fn run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, escape(text))
}

pub fn hyperlink(rid: &str, text: &str) -> String {
    if text.is_empty() {
        return format!(r#"<w:hyperlink r:id="{}"/>"#, rid);
    }
    format!(r#"<w:hyperlink r:id="{}">{}</w:hyperlink>"#, rid, run(text))
}

pub fn paragraph(parts: &[String]) -> String {
    format!("<w:p>{}</w:p>", parts.concat())
}

/// A cell holding the given paragraphs.
pub fn cell(paragraphs: &[String]) -> String {
    format!("<w:tc><w:tcPr/>{}</w:tc>", paragraphs.concat())
}

pub fn text_cell(text: &str) -> String {
    if text.is_empty() {
        return cell(&[paragraph(&[])]);
    }
    cell(&[paragraph(&[run(text)])])
}

pub fn row(cells: &[String]) -> String {
    format!("<w:tr>{}</w:tr>", cells.concat())
}

/// A row of plain-text cells.
pub fn text_row(texts: &[&str]) -> String {
    let cells: Vec<String> = texts.iter().map(|t| text_cell(t)).collect();
    row(&cells)
}

pub fn table(rows: &[String]) -> String {
    format!("<w:tbl><w:tblPr/>{}</w:tbl>", rows.concat())
}

pub fn header_row() -> String {
    text_row(&["AREA", "STATUS", "DESCRIPTION / LINKS"])
}

pub fn document(body: &[String]) -> String {
    format!("{}<w:body>{}<w:sectPr/></w:body></w:document>", DOCUMENT_OPEN, body.concat())
}

/// Wraps loose markup in a namespaced document so prefixes resolve.
pub fn parse_fragment(inner: &str) -> roxmltree::Document<'static> {
    let xml = document(&[inner.to_string()]);
    // Tests only: leak so the parsed tree can outlive this helper.
    let xml: &'static str = Box::leak(xml.into_boxed_str());
    roxmltree::Document::parse(xml).unwrap()
}

pub fn rels(pairs: &[(&str, &str)]) -> Relationships {
    let mut rels = Relationships::new();
    for (id, target) in pairs {
        rels.insert(*id, *target);
    }
    rels
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
