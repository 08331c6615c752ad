// src/extractors/resources.rs
use crate::docx::models::wml_children;
use crate::docx::Relationships;
use crate::extractors::assembler::CategoryAssembler;
use crate::extractors::model::Category;
use crate::utils::error::ExtractError;

/// Turns the information pack's tables into the category/section record.
#[derive(Debug, Default)]
pub struct ResourceExtractor;

impl ResourceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Walks every top-level table in the document body, in order.
    ///
    /// Fails only when the body or its tables are missing; irregular rows are
    /// absorbed by the assembler.
    pub fn extract(
        &self,
        document: &roxmltree::Document,
        relationships: &Relationships,
    ) -> Result<Vec<Category>, ExtractError> {
        let body = wml_children(document.root_element(), "body")
            .next()
            .ok_or_else(|| ExtractError::Structure("Document body not found".to_string()))?;

        let tables: Vec<_> = wml_children(body, "tbl").collect();
        if tables.is_empty() {
            return Err(ExtractError::Structure(
                "Expected resource table was not found in the document".to_string(),
            ));
        }
        tracing::info!("Found {} table(s) in document body", tables.len());

        let mut assembler = CategoryAssembler::new();
        for (index, table) in tables.into_iter().enumerate() {
            tracing::debug!("Processing table {}", index + 1);
            assembler.push_table(table, relationships);
        }

        let categories = assembler.finish();
        tracing::info!(
            "Extracted {} categories with {} sections",
            categories.len(),
            categories.iter().map(|c| c.sections.len()).sum::<usize>()
        );
        Ok(categories)
    }
}
