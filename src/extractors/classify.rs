// src/extractors/classify.rs
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Row Codes (Lazy Static) ---
// "A. Whole School"
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z])\.\s*(.+)").expect("Failed to compile CATEGORY_RE")
});

// "A1. Timetables", "B 12a. Excursions"
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z])\s*(\d+[a-z]*)\.\s*(.+)").expect("Failed to compile SECTION_RE")
});

// "3. Reports" - the letter comes from the current category
static FALLBACK_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+[a-z]*)\.\s*(.+)").expect("Failed to compile FALLBACK_SECTION_RE")
});

/// What a row's first cell says about the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// First cell has no text; the row is ignored outright.
    Blank,
    CategoryHeader { code: String, title: String },
    SectionHeader { letter: String, number: String, title: String },
    /// Numbered section without a letter; only meaningful inside a category.
    FallbackSection { number: String, title: String },
    /// Unclassifiable text; may continue the previous section.
    Inert,
}

/// Classifies a row by its first cell. Section codes win over category codes.
pub fn classify(first_cell_text: &str) -> RowKind {
    if first_cell_text.is_empty() {
        return RowKind::Blank;
    }

    if let Some(caps) = SECTION_RE.captures(first_cell_text) {
        return RowKind::SectionHeader {
            letter: caps[1].to_string(),
            number: caps[2].to_string(),
            title: caps[3].trim().to_string(),
        };
    }

    if let Some(caps) = CATEGORY_RE.captures(first_cell_text) {
        return RowKind::CategoryHeader {
            code: caps[1].to_string(),
            title: caps[2].trim().to_string(),
        };
    }

    if let Some(caps) = FALLBACK_SECTION_RE.captures(first_cell_text) {
        return RowKind::FallbackSection {
            number: caps[1].to_string(),
            title: caps[2].trim().to_string(),
        };
    }

    RowKind::Inert
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(letter: &str, number: &str, title: &str) -> RowKind {
        RowKind::SectionHeader { letter: letter.into(), number: number.into(), title: title.into() }
    }

    #[test]
    fn test_category_header() {
        assert_eq!(
            classify("A. Whole School"),
            RowKind::CategoryHeader { code: "A".into(), title: "Whole School".into() }
        );
        assert_eq!(
            classify("C.Programs  "),
            RowKind::CategoryHeader { code: "C".into(), title: "Programs".into() }
        );
    }

    #[test]
    fn test_section_header_variants() {
        assert_eq!(classify("A1. Timetables"), section("A", "1", "Timetables"));
        assert_eq!(classify("B12a. Excursion forms"), section("B", "12a", "Excursion forms"));
        assert_eq!(classify("D 4.   Spaced"), section("D", "4", "Spaced"));
    }

    #[test]
    fn test_section_takes_precedence_over_category() {
        // A title that itself looks like a category code stays part of the title.
        assert_eq!(classify("A1. B. Nested"), section("A", "1", "B. Nested"));
    }

    #[test]
    fn test_fallback_section() {
        assert_eq!(
            classify("3b. Reports"),
            RowKind::FallbackSection { number: "3b".into(), title: "Reports".into() }
        );
    }

    #[test]
    fn test_title_is_first_line_only() {
        assert_eq!(classify("A2. Budget\nSee finance office"), section("A", "2", "Budget"));
    }

    #[test]
    fn test_blank_and_inert_rows() {
        assert_eq!(classify(""), RowKind::Blank);
        assert_eq!(classify("Continued"), RowKind::Inert);
        assert_eq!(classify("a1. lowercase letter"), RowKind::Inert);
        assert_eq!(classify("AB. Two letters"), RowKind::Inert);
        assert_eq!(classify("A."), RowKind::Inert);
        assert_eq!(classify("12 no period"), RowKind::Inert);
    }
}
