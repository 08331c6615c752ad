// src/extractors/assembler.rs
use std::collections::HashMap;

use crate::docx::models::wml_children;
use crate::docx::Relationships;
use crate::extractors::cell::extract_cell;
use crate::extractors::classify::{classify, RowKind};
use crate::extractors::model::{Category, Cell, Section};

/// Rebuilds the category/section outline from table rows.
///
/// State carries across tables so a category (or its sections) can continue
/// in a later table. Categories are keyed by letter code and kept in
/// first-seen order; `current` is the category most recently touched.
#[derive(Debug, Default)]
pub struct CategoryAssembler {
    categories: Vec<Category>,
    by_code: HashMap<String, usize>,
    current: Option<usize>,
}

impl CategoryAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds every data row of a `w:tbl`, skipping a leading column-header row.
    pub fn push_table(&mut self, table: roxmltree::Node, relationships: &Relationships) {
        for (index, row) in wml_children(table, "tr").enumerate() {
            let cells: Vec<Cell> = wml_children(row, "tc")
                .map(|tc| extract_cell(tc, relationships))
                .collect();

            if index == 0 && is_column_header(&cells) {
                tracing::debug!("Skipping column header row");
                continue;
            }
            self.push_row(&cells);
        }
    }

    /// Applies one row to the outline.
    pub fn push_row(&mut self, cells: &[Cell]) {
        let first_text = cells.first().map(|c| c.text.as_str()).unwrap_or_default();

        match classify(first_text) {
            RowKind::Blank => {}
            RowKind::CategoryHeader { code, title } => self.category_header(code, title, cells),
            RowKind::SectionHeader { letter, number, title } => self.section_header(letter, number, title, cells),
            RowKind::FallbackSection { number, title } => match self.current {
                Some(idx) => {
                    let letter = self.categories[idx].code.clone();
                    tracing::trace!("Section '{}' inherits category {}", number, letter);
                    self.section_header(letter, number, title, cells);
                }
                None => tracing::trace!("Skipping section '{}' with no category context", number),
            },
            RowKind::Inert => self.continuation(cells),
        }
    }

    pub fn finish(self) -> Vec<Category> {
        self.categories
    }

    fn fetch_or_create(&mut self, code: &str) -> usize {
        if let Some(&idx) = self.by_code.get(code) {
            return idx;
        }
        tracing::debug!("New category {}", code);
        self.categories.push(Category::bare(code));
        let idx = self.categories.len() - 1;
        self.by_code.insert(code.to_string(), idx);
        idx
    }

    fn category_header(&mut self, code: String, title: String, cells: &[Cell]) {
        let idx = self.fetch_or_create(&code);
        let category = &mut self.categories[idx];

        if category.title.is_empty() {
            category.title = title;
        }
        if let Some(detail) = cells.get(1) {
            if !detail.text.is_empty() && !category.description.contains(&detail.text) {
                if !category.description.is_empty() {
                    category.description.push('\n');
                }
                category.description.push_str(&detail.text);
            }
            category.links.extend(detail.links.iter().cloned());
        }
        self.current = Some(idx);
    }

    fn section_header(&mut self, letter: String, number: String, title: String, cells: &[Cell]) {
        let idx = self.fetch_or_create(&letter);

        let status = cells.get(1).map(|c| c.text.clone()).unwrap_or_default();
        let description = cells
            .get(2)
            .or_else(|| cells.get(1))
            .map(|c| c.text.clone())
            .unwrap_or_default();

        let mut links = Vec::new();
        if let Some(third) = cells.get(2) {
            links.extend(third.links.iter().cloned());
        }
        if let Some(second) = cells.get(1) {
            links.extend(second.links.iter().cloned());
        }

        let code = format!("{}{}", letter, number);
        tracing::trace!("Section {} '{}' ({} links)", code, title, links.len());
        self.categories[idx].sections.push(Section { code, title, status, description, links });
        self.current = Some(idx);
    }

    fn continuation(&mut self, cells: &[Cell]) {
        let Some(section) = self
            .current
            .and_then(|idx| self.categories[idx].sections.last_mut())
        else {
            tracing::trace!("Ignoring row outside any section");
            return;
        };

        let rest = cells.get(1..).unwrap_or_default();
        let extra = rest
            .iter()
            .map(|c| c.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !extra.is_empty() {
            let joined = if section.description.is_empty() {
                extra
            } else {
                format!("{} {}", section.description, extra)
            };
            section.description = joined.trim().to_string();
        }
        for cell in rest {
            section.links.extend(cell.links.iter().cloned());
        }
        tracing::trace!("Continued section {}", section.code);
    }
}

/// A first row reading like "AREA | STATUS | DESCRIPTION" labels the columns.
fn is_column_header(cells: &[Cell]) -> bool {
    let joined = cells
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    joined.contains("STATUS") && joined.contains("DESCRIPTION")
}
