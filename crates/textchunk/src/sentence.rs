//! Sentence splitting for oversized paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of terminal punctuation followed by whitespace.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("sentence boundary pattern is valid"));

/// Split a paragraph into sentences.
///
/// The punctuation run stays attached to the sentence it ends; only the
/// whitespace after it is consumed. Without any boundary the whole paragraph
/// comes back as a single sentence.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(paragraph) {
        let punct_end = boundary.start() + boundary.as_str().trim_end().len();
        push_trimmed(&mut sentences, &paragraph[start..punct_end]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &paragraph[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let sentence = candidate.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}
