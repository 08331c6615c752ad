// src/extractors/runs.rs
use crate::docx::models::{is_wml, REL_NS};
use crate::docx::Relationships;

/// One piece of a paragraph's inline content, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text {
        content: String,
    },
    Link {
        raw_label: String,
        /// `None` when the relationship id is missing or undeclared.
        url: Option<String>,
        preceding_text: String,
        following_text: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParagraph {
    pub fragments: Vec<Fragment>,
    /// Concatenated visible text of every fragment, untrimmed.
    pub text: String,
}

/// Concatenated `w:t` text under `node`.
pub fn visible_text(node: roxmltree::Node) -> String {
    node.descendants()
        .filter(|n| is_wml(*n, "t"))
        .filter_map(|n| n.text())
        .collect()
}

/// Splits a `w:p` into text and hyperlink fragments.
pub fn parse_paragraph(paragraph: roxmltree::Node, relationships: &Relationships) -> ParsedParagraph {
    let mut fragments = Vec::new();
    let mut plain = String::new();

    for child in paragraph.children().filter(|n| n.is_element()) {
        if is_wml(child, "hyperlink") {
            let raw_label = visible_text(child);
            let url = child
                .attribute((REL_NS, "id"))
                .and_then(|rid| relationships.target(rid))
                .map(str::to_string);
            if url.is_none() {
                tracing::debug!("Hyperlink '{}' has no resolvable target", raw_label);
            }
            fragments.push(Fragment::Link {
                raw_label: raw_label.clone(),
                url,
                preceding_text: plain.clone(),
                following_text: String::new(),
            });
            plain.push_str(&raw_label);
        } else {
            let content = visible_text(child);
            if content.is_empty() {
                continue;
            }
            plain.push_str(&content);
            fragments.push(Fragment::Text { content });
        }
    }

    // Second pass: the paragraph text is complete, so each link can see what follows it.
    for fragment in &mut fragments {
        if let Fragment::Link { raw_label, preceding_text, following_text, .. } = fragment {
            let end = preceding_text.len() + raw_label.len();
            *following_text = plain[end..].to_string();
        }
    }

    ParsedParagraph { fragments, text: plain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::{hyperlink, paragraph, parse_fragment, rels, run};

    fn first_paragraph<'a, 'input>(doc: &'a roxmltree::Document<'input>) -> roxmltree::Node<'a, 'input> {
        doc.descendants().find(|n| is_wml(*n, "p")).unwrap()
    }

    #[test]
    fn test_text_and_link_fragments_in_order() {
        let xml = paragraph(&[
            run("Master timetable "),
            hyperlink("rId1", "here"),
            run(" can be found on the portal."),
        ]);
        let doc = parse_fragment(&xml);
        let parsed = parse_paragraph(first_paragraph(&doc), &rels(&[("rId1", "/t.pdf")]));

        assert_eq!(parsed.text, "Master timetable here can be found on the portal.");
        assert_eq!(parsed.fragments.len(), 3);
        assert_eq!(parsed.fragments[0], Fragment::Text { content: "Master timetable ".to_string() });
        assert_eq!(
            parsed.fragments[1],
            Fragment::Link {
                raw_label: "here".to_string(),
                url: Some("/t.pdf".to_string()),
                preceding_text: "Master timetable ".to_string(),
                following_text: " can be found on the portal.".to_string(),
            }
        );
    }

    #[test]
    fn test_unresolved_link_is_still_emitted() {
        let xml = paragraph(&[hyperlink("rId404", "Policy"), run(" and more")]);
        let doc = parse_fragment(&xml);
        let parsed = parse_paragraph(first_paragraph(&doc), &Relationships::new());

        match &parsed.fragments[0] {
            Fragment::Link { raw_label, url, preceding_text, following_text } => {
                assert_eq!(raw_label, "Policy");
                assert_eq!(url, &None);
                assert_eq!(preceding_text, "");
                assert_eq!(following_text, " and more");
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_earlier_link_labels_count_as_preceding_text() {
        let xml = paragraph(&[
            run("See "),
            hyperlink("rId1", "Handbook"),
            run(" and "),
            hyperlink("rId2", ""),
        ]);
        let doc = parse_fragment(&xml);
        let parsed = parse_paragraph(first_paragraph(&doc), &rels(&[("rId1", "/h"), ("rId2", "/x")]));

        let links: Vec<_> = parsed
            .fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Link { preceding_text, following_text, .. } => Some((preceding_text.as_str(), following_text.as_str())),
                Fragment::Text { .. } => None,
            })
            .collect();
        assert_eq!(links, vec![("See ", " and "), ("See Handbook and ", "")]);
    }

    #[test]
    fn test_runs_without_text_are_skipped() {
        let xml = paragraph(&[
            r#"<w:pPr><w:pStyle w:val="Normal"/></w:pPr>"#.to_string(),
            r#"<w:r><w:tab/></w:r>"#.to_string(),
            run("Only text"),
        ]);
        let doc = parse_fragment(&xml);
        let parsed = parse_paragraph(first_paragraph(&doc), &Relationships::new());
        assert_eq!(parsed.fragments, vec![Fragment::Text { content: "Only text".to_string() }]);
    }

    #[test]
    fn test_split_runs_are_concatenated() {
        let xml = paragraph(&[r#"<w:r><w:t>Time</w:t><w:t xml:space="preserve">tables </w:t></w:r>"#.to_string()]);
        let doc = parse_fragment(&xml);
        let parsed = parse_paragraph(first_paragraph(&doc), &Relationships::new());
        assert_eq!(parsed.text, "Timetables ");
        assert_eq!(parsed.fragments, vec![Fragment::Text { content: "Timetables ".to_string() }]);
    }
}
