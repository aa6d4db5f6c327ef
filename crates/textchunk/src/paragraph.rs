//! Paragraph splitting on blank lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line feed, any whitespace (including further line feeds), a line feed.
static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split normalized text into paragraphs.
///
/// Each paragraph is trimmed with its internal whitespace (newlines included)
/// collapsed to single spaces. Empty paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    BLANK_LINES
        .split(text)
        .map(collapse_whitespace)
        .filter(|p| !p.is_empty())
        .collect()
}
