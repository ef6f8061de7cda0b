//! Paragraph splitting on blank-line boundaries

use regex::Regex;
use std::sync::OnceLock;

/// Any whitespace run that contains at least two newlines
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split a document into trimmed, non-empty paragraphs in document order.
///
/// Line endings are normalized first, so documents written on any platform
/// split identically.
pub fn split_paragraphs(document: &str) -> Vec<String> {
    let normalized = normalize_line_endings(document);

    paragraph_break()
        .split(&normalized)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}
