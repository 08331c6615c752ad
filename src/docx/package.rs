// src/docx/package.rs
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use crate::docx::models::{Relationships, DOCUMENT_PART, RELATIONSHIPS_PART};
use crate::utils::error::PackageError;

/// The two parts of a DOCX package the extractor needs: the main document
/// markup and its relationship table.
#[derive(Debug, Clone)]
pub struct Package {
    document_xml: String,
    relationships: Relationships,
}

impl Package {
    /// Opens a DOCX file and loads its document markup and relationships.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PackageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PackageError::SourceMissing(path.to_path_buf()));
        }

        tracing::info!("Opening DOCX package: {}", path.display());
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;
        tracing::debug!("Package contains {} entries", archive.len());

        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| PackageError::MissingPart(DOCUMENT_PART.to_string()))?;

        let rels_xml = read_part(&mut archive, RELATIONSHIPS_PART)?;
        if rels_xml.is_none() {
            tracing::warn!("No {} in package", RELATIONSHIPS_PART);
        }

        let package = Self::from_parts(document_xml, rels_xml.as_deref())?;
        if package.relationships.is_empty() {
            tracing::warn!("Package declares no relationships; hyperlinks will not resolve");
        }
        Ok(package)
    }

    /// Builds a package from markup that is already in memory.
    pub fn from_parts(document_xml: impl Into<String>, rels_xml: Option<&str>) -> Result<Self, PackageError> {
        let relationships = match rels_xml {
            Some(xml) => parse_relationships(xml)?,
            None => Relationships::new(),
        };
        Ok(Self { document_xml: document_xml.into(), relationships })
    }

    /// Parses the main document markup. The tree borrows from the package.
    pub fn document(&self) -> Result<roxmltree::Document<'_>, PackageError> {
        roxmltree::Document::parse(&self.document_xml).map_err(|e| PackageError::Xml {
            part: DOCUMENT_PART.to_string(),
            message: e.to_string(),
        })
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }
}

/// Reads a named entry as UTF-8 text. `Ok(None)` when the entry does not exist.
fn read_part<R: Read + Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> Result<Option<String>, PackageError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(PackageError::Archive(e)),
    };
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(Some(strip_bom(content)))
}

fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

/// Parses `document.xml.rels` into an id -> target map.
pub fn parse_relationships(xml: &str) -> Result<Relationships, PackageError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| PackageError::Xml {
        part: RELATIONSHIPS_PART.to_string(),
        message: e.to_string(),
    })?;

    let mut rels = Relationships::new();
    for node in doc.root_element().children() {
        if node.tag_name().name() != "Relationship" {
            continue;
        }
        if let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target")) {
            rels.insert(id, target);
        }
    }
    tracing::debug!("Loaded {} relationships", rels.len());
    Ok(rels)
}
