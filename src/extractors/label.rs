// src/extractors/label.rs
//! Derives a readable hyperlink label when the authored link text carries no
//! meaning ("here", "click here"). The information pack phrases links as
//! "<Resource name> can be found here", so the resource name is recovered by
//! peeling the referring clause off the text that precedes the link.

/// Label used when neither the link text nor its context yields anything.
pub const FALLBACK_LABEL: &str = "Resource link";

/// How far back into the paragraph to look when no sentence boundary helps.
const CONTEXT_WINDOW_CHARS: usize = 160;

/// Lowercased link texts that say nothing about the target.
const PLACEHOLDER_LABELS: &[&str] = &[
    "here",
    "here.",
    "here..",
    "click here",
    "click here.",
    "link",
    "the link",
    "this link",
    "this link.",
    "available here",
    "available here.",
];

/// Trailing clauses that describe where a resource lives. Checked in order;
/// the first suffix match wins on each pass.
const REFERRING_PHRASES: &[&str] = &[
    "can be found",
    "can be accessed",
    "can be viewed",
    "can be downloaded",
    "can be located",
    "can be obtained",
    "is located",
    "is stored",
    "are stored",
    "are located",
    "are found",
    "are available",
    "can be found on",
    "can be found in",
    "can be found at",
    "can be accessed via",
    "can be accessed at",
    "can be found via",
    "can be viewed on",
    "can be viewed in",
    "can be downloaded from",
    "can be accessed from",
    "can be accessed through",
    "can be accessed online",
    "can be located here",
    "can be seen",
    "is available",
    "are available to",
    "are available for",
    "are available from",
    "is available from",
    "is available on",
    "is available at",
    "are available on",
    "is accessible",
    "are accessible",
    "can be used",
    "can be found here",
    "link can be found",
    "link is here",
    "link is available",
    "links can be found",
    "links can be accessed",
    "can be found using",
    "be found",
    "be accessed",
    "found here",
    "found on",
    "found in",
    "found at",
    "found via",
    "available here",
    "available on",
    "available at",
    "available in",
    "available via",
    "to access",
    "to be found",
    "located here",
    "located on",
    "located at",
    "located in",
    "can be downloaded via",
    "can be downloaded at",
    "can be accessed here",
    "is stored on",
    "are stored on",
    "are stored in",
    "can be viewed here",
];

/// Leading determiners/prepositions, matched case-sensitively. Each is removed at most once, in list order.
const STOP_PREFIXES: &[&str] = &["A ", "The ", "This ", "These ", "An ", "For ", "To "];

/// Leading connectives, matched case-insensitively and removed repeatedly.
const LEAD_CONNECTIVES: &[&str] = &["and ", "or ", "for ", "to ", "via "];

const SENTENCE_BREAKS: &[char] = &['.', ';', '!', '?', '\n'];

fn is_label_punct(c: char) -> bool {
    matches!(
        c,
        ' ' | '-' | ':' | ',' | '.' | ';' | '(' | ')' | '[' | ']' | '{' | '}' | '\u{2013}' | '\u{2014}'
    )
}

/// True when `raw_label` (trimmed, any case) is one of the known placeholder texts.
pub fn is_placeholder(raw_label: &str) -> bool {
    let lowered = raw_label.trim().to_lowercase();
    PLACEHOLDER_LABELS.contains(&lowered.as_str())
}

/// Picks the label for a link: the authored text when it is meaningful,
/// otherwise one derived from `preceding_text`, otherwise [`FALLBACK_LABEL`].
pub fn resolve(raw_label: &str, preceding_text: &str) -> String {
    let trimmed = raw_label.trim();
    if !trimmed.is_empty() && !is_placeholder(trimmed) {
        return trimmed.to_string();
    }

    // Text since the last sentence boundary.
    let sentence_tail = preceding_text.rsplit(SENTENCE_BREAKS).next().unwrap_or_default();
    if let Some(label) = derive(sentence_tail) {
        tracing::trace!("Derived label '{}' from sentence tail for '{}'", label, trimmed);
        return label;
    }

    if let Some(label) = derive(last_chars(preceding_text, CONTEXT_WINDOW_CHARS)) {
        tracing::trace!("Derived label '{}' from context window for '{}'", label, trimmed);
        return label;
    }

    FALLBACK_LABEL.to_string()
}

/// A cleaned candidate, unless the context itself is only placeholder text.
fn derive(candidate: &str) -> Option<String> {
    clean_label(candidate).filter(|label| !is_placeholder(label))
}

/// Strips referring clauses, leading determiners and connectives from a
/// candidate label. `None` when nothing meaningful remains.
pub fn clean_label(candidate: &str) -> Option<String> {
    let mut text = candidate.trim();
    if text.is_empty() {
        return None;
    }

    'strip: while !text.is_empty() {
        for phrase in REFERRING_PHRASES {
            if let Some(head) = strip_suffix_ignore_case(text, phrase) {
                text = head.trim_end_matches(is_label_punct);
                continue 'strip;
            }
        }
        break;
    }

    text = text.trim_matches(is_label_punct);

    for prefix in STOP_PREFIXES {
        if let Some(rest) = text.strip_prefix(*prefix) {
            text = rest;
        }
    }

    while let Some(rest) = LEAD_CONNECTIVES
        .iter()
        .find_map(|connective| strip_prefix_ignore_case(text, connective))
    {
        text = rest;
    }

    let text = text.trim_matches(is_label_punct);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() < prefix.len() || !text.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, tail) = text.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix).then_some(tail)
}

/// The last `n` characters of `text` (all of it when shorter).
fn last_chars(text: &str, n: usize) -> &str {
    match n.checked_sub(1).and_then(|back| text.char_indices().rev().nth(back)) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}
