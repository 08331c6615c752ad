// src/docx/models.rs
use std::collections::HashMap;

/// WordprocessingML main namespace (`w:` prefix).
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office relationships namespace (`r:` prefix), used by `r:id` on hyperlinks.
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const RELATIONSHIPS_PART: &str = "word/_rels/document.xml.rels";

/// Relationship identifier -> target mapping from `document.xml.rels`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    targets: HashMap<String, String>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, target: impl Into<String>) {
        self.targets.insert(id.into(), target.into());
    }

    /// Resolves a relationship id to its target URL, if the package declares it.
    pub fn target(&self, id: &str) -> Option<&str> {
        self.targets.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Returns true when `node` is the WordprocessingML element `local`.
pub fn is_wml(node: roxmltree::Node, local: &str) -> bool {
    node.is_element() && node.has_tag_name((WML_NS, local))
}

/// Direct children of `node` that are the WordprocessingML element `local`.
pub fn wml_children<'a, 'input: 'a>(
    node: roxmltree::Node<'a, 'input>,
    local: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> + 'a {
    node.children().filter(move |child| is_wml(*child, local))
}
