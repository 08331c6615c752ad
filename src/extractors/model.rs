// src/extractors/model.rs
use serde::{Deserialize, Serialize};

// Field order below is the JSON key order consumed by the landing page.

/// A hyperlink with a usable label and a resolved target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub label: String,
    pub url: String,
}

/// Display text and links gathered from one table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub links: Vec<ResolvedLink>,
}

/// Numbered entry nested under a category, e.g. "A1. Timetables".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub code: String,
    pub title: String,
    pub status: String,
    pub description: String,
    pub links: Vec<ResolvedLink>,
}

/// Lettered top-level entry, e.g. "A. Whole School".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    pub title: String,
    pub description: String,
    pub links: Vec<ResolvedLink>,
    pub sections: Vec<Section>,
}

impl Category {
    /// A category with no title yet, created when a section row precedes its header.
    pub fn bare(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            description: String::new(),
            links: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn link_count(&self) -> usize {
        self.links.len() + self.sections.iter().map(|s| s.links.len()).sum::<usize>()
    }
}
