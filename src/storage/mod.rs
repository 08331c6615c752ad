// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extractors::Category;
use crate::utils::error::StorageError;

const RESOURCES_FILE: &str = "resources.json";
const SUMMARY_FILE: &str = "resources_meta.json";

/// Counts describing one extraction run, written next to the resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub source: String,
    pub categories: usize,
    pub sections: usize,
    pub links: usize,
    pub extraction_timestamp: String,
}

impl ExtractionSummary {
    pub fn from_categories(source: &str, categories: &[Category]) -> Self {
        Self {
            source: source.to_string(),
            categories: categories.len(),
            sections: categories.iter().map(|c| c.sections.len()).sum(),
            links: categories.iter().map(Category::link_count).sum(),
            extraction_timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified output directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the output directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the categories as pretty-printed JSON for the landing page.
    pub fn save_resources(&self, categories: &[Category]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RESOURCES_FILE);
        self.write_json(&file_path, categories)?;
        tracing::info!("Saved {} categories to {}", categories.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes the run summary alongside the resources.
    pub fn save_summary(&self, summary: &ExtractionSummary) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(SUMMARY_FILE);
        self.write_json(&file_path, summary)?;
        tracing::info!("Saved summary to {}", file_path.display());
        Ok(file_path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(StorageError::IoError)
    }
}
