//! Punctuation-based sentence segmentation
//!
//! A boundary is a maximal run of `.`, `!` or `?` followed by whitespace.
//! This is a heuristic: abbreviations ("Dr. Smith"), decimals followed by a
//! space and spaced ellipses all split. Callers that need linguistic
//! segmentation should not rely on it.

use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("sentence pattern is valid"))
}

/// Split a paragraph into trimmed sentences.
///
/// Each sentence keeps its terminator. Text after the last boundary becomes a
/// final sentence even when it has no terminator.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in sentence_boundary().find_iter(paragraph) {
        push_trimmed(&mut sentences, &paragraph[start..boundary.end()]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &paragraph[start..]);

    sentences
}

/// Count the sentences [`split_sentences`] would return, without allocating
pub fn count_sentences(paragraph: &str) -> usize {
    let mut count = 0;
    let mut start = 0;

    for boundary in sentence_boundary().find_iter(paragraph) {
        if !paragraph[start..boundary.end()].trim().is_empty() {
            count += 1;
        }
        start = boundary.end();
    }
    if !paragraph[start..].trim().is_empty() {
        count += 1;
    }

    count
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
