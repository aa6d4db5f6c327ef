//! Greedy size-bounded chunk assembly with overlap carry-over.

use textchunk_core::{ChunkerConfig, Separator};
use tracing::trace;

/// Accumulates units into chunks for a single document.
///
/// Units are appended greedily. When the next unit no longer fits, the
/// accumulated text is emitted and the new chunk is seeded with the last
/// `overlap` characters of the emitted one. Units are never cut, so a single
/// unit larger than the bound becomes an oversized chunk.
pub struct ChunkAssembler {
    /// Maximum chunk length in characters.
    chunk_size: usize,

    /// Characters carried from one chunk into the next.
    overlap: usize,

    /// Chunk being built.
    current: String,

    /// Length of `current` in characters.
    current_chars: usize,

    /// Completed chunks in emission order.
    chunks: Vec<String>,
}

impl ChunkAssembler {
    /// Create an empty assembler.
    pub fn new(config: &ChunkerConfig) -> Self {
        Self {
            chunk_size: config.chunk_size(),
            overlap: config.overlap(),
            current: String::new(),
            current_chars: 0,
            chunks: Vec::new(),
        }
    }

    /// Whether nothing is currently being accumulated.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Append a unit, emitting the current chunk first if the unit does not fit.
    pub fn push(&mut self, unit: &str, separator: Separator) {
        let unit_chars = unit.chars().count();

        if self.current.is_empty() {
            self.current.push_str(unit);
            self.current_chars = unit_chars;
            return;
        }

        let combined = self.current_chars + separator.char_len() + unit_chars;
        if combined <= self.chunk_size {
            self.current.push_str(separator.as_str());
            self.current.push_str(unit);
            self.current_chars = combined;
            return;
        }

        let emitted = std::mem::take(&mut self.current);
        let carried = char_suffix(&emitted, self.overlap);
        let carried_chars = self.current_chars.min(self.overlap);

        trace!(
            emitted_chars = self.current_chars,
            carried_chars,
            %separator,
            "Chunk full, reseeding with overlap"
        );

        self.current.push_str(carried);
        self.current.push_str(separator.as_str());
        self.current.push_str(unit);
        self.current_chars = carried_chars + separator.char_len() + unit_chars;
        self.chunks.push(emitted);
    }

    /// Emit the current chunk as-is, without carrying any overlap forward.
    pub fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.chunks.push(std::mem::take(&mut self.current));
        self.current_chars = 0;
    }

    /// Emit whatever is left and return all chunks.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

/// The last `max_chars` characters of `text`, or all of it when shorter.
///
/// Always cuts on a `char` boundary; no attempt is made to respect words.
pub fn char_suffix(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }

    match text.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, overlap: usize) -> ChunkerConfig {
        ChunkerConfig::new(chunk_size, overlap).unwrap()
    }

    #[test]
    fn test_char_suffix() {
        assert_eq!(char_suffix("hello world", 5), "world");
        assert_eq!(char_suffix("hi", 5), "hi");
        assert_eq!(char_suffix("hi", 2), "hi");
        assert_eq!(char_suffix("hi", 0), "");
        assert_eq!(char_suffix("", 3), "");
    }

    #[test]
    fn test_char_suffix_multibyte() {
        assert_eq!(char_suffix("naïve café", 4), "café");
        assert_eq!(char_suffix("日本語テキスト", 3), "キスト");
    }

    #[test]
    fn test_units_that_fit_are_joined() {
        let mut assembler = ChunkAssembler::new(&config(20, 5));
        assembler.push("one", Separator::Paragraph);
        assembler.push("two", Separator::Paragraph);
        assembler.push("three", Separator::Sentence);

        assert_eq!(assembler.finish(), vec!["one\n\ntwo three"]);
    }

    #[test]
    fn test_exact_fit_does_not_emit() {
        let mut assembler = ChunkAssembler::new(&config(9, 2));
        assembler.push("abcd", Separator::Sentence);
        assembler.push("efgh", Separator::Sentence);

        assert_eq!(assembler.finish(), vec!["abcd efgh"]);
    }

    #[test]
    fn test_overflow_reseeds_with_overlap() {
        let mut assembler = ChunkAssembler::new(&config(10, 3));
        assembler.push("abcdefgh", Separator::Sentence);
        assembler.push("ijk", Separator::Sentence);

        assert_eq!(assembler.finish(), vec!["abcdefgh", "fgh ijk"]);
    }

    #[test]
    fn test_short_chunk_is_carried_whole() {
        let mut assembler = ChunkAssembler::new(&config(10, 5));
        assembler.push("ab", Separator::Paragraph);
        assembler.push("cdefghij", Separator::Paragraph);

        assert_eq!(assembler.finish(), vec!["ab", "ab\n\ncdefghij"]);
    }

    #[test]
    fn test_oversized_unit_is_never_truncated() {
        let big = "x".repeat(30);
        let mut assembler = ChunkAssembler::new(&config(10, 2));
        assembler.push("small", Separator::Sentence);
        assembler.push(&big, Separator::Sentence);
        assembler.push("tail", Separator::Sentence);

        let chunks = assembler.finish();
        assert_eq!(chunks[0], "small");
        assert_eq!(chunks[1], format!("ll {}", big));
        assert_eq!(chunks[2], "xx tail");
    }

    #[test]
    fn test_flush_carries_no_overlap() {
        let mut assembler = ChunkAssembler::new(&config(10, 3));
        assembler.push("first", Separator::Paragraph);
        assembler.flush();
        assert!(assembler.is_empty());
        assembler.push("second", Separator::Sentence);

        assert_eq!(assembler.finish(), vec!["first", "second"]);
    }

    #[test]
    fn test_flush_when_empty_is_noop() {
        let mut assembler = ChunkAssembler::new(&config(10, 3));
        assembler.flush();
        assert!(assembler.finish().is_empty());
    }
}
