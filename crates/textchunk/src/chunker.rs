//! Paragraph-first chunker with sentence fallback for oversized paragraphs.

use textchunk_core::{Chunker, ChunkerConfig, Result, Separator};
use tracing::{debug, trace};

use crate::assembler::ChunkAssembler;
use crate::normalize::normalize_line_endings;
use crate::paragraph::split_paragraphs;
use crate::sentence::split_sentences;

/// Splits documents into overlapping chunks bounded by a character count.
///
/// Pipeline per document:
/// 1. Normalize line endings to `\n`
/// 2. Split into paragraphs on blank lines, collapsing whitespace
/// 3. Re-split paragraphs longer than twice the chunk size into sentences
/// 4. Greedily pack paragraphs and sentences into chunks with overlap
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChunker {
    config: ChunkerConfig,
}

impl TextChunker {
    /// Create a chunker from an already validated configuration.
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Validate the sizes and create a chunker.
    pub fn with_sizes(chunk_size: usize, overlap: usize) -> Result<Self> {
        Ok(Self::new(ChunkerConfig::new(chunk_size, overlap)?))
    }
}

impl Chunker for TextChunker {
    fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    fn chunk(&self, text: &str) -> Vec<String> {
        let normalized = normalize_line_endings(text);
        let paragraphs = split_paragraphs(&normalized);
        if paragraphs.is_empty() {
            return Vec::new();
        }

        let threshold = self.config.oversized_threshold();
        let mut assembler = ChunkAssembler::new(&self.config);

        for paragraph in &paragraphs {
            let paragraph_chars = paragraph.chars().count();
            if paragraph_chars <= threshold {
                assembler.push(paragraph, Separator::Paragraph);
                continue;
            }

            assembler.flush();
            let sentences = split_sentences(paragraph);
            trace!(
                paragraph_chars,
                threshold,
                sentences = sentences.len(),
                "Oversized paragraph split into sentences"
            );
            for sentence in sentences {
                assembler.push(sentence, Separator::Sentence);
            }
        }

        let chunks = assembler.finish();
        debug!(
            input_bytes = text.len(),
            paragraphs = paragraphs.len(),
            chunks = chunks.len(),
            "Chunked document"
        );
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(chunk_size: usize, overlap: usize) -> TextChunker {
        TextChunker::with_sizes(chunk_size, overlap).unwrap()
    }

    #[test]
    fn test_simple_chunk() {
        let text = "Hello world. This is a test.";
        let chunks = chunker(100, 10).chunk(text);

        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn test_empty_content() {
        let c = TextChunker::default();
        assert!(c.chunk("").is_empty());
        assert!(c.chunk("   \n\t\r\n  ").is_empty());
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(TextChunker::with_sizes(10, 10).is_err());
        assert!(TextChunker::with_sizes(0, 0).is_err());
    }

    #[test]
    fn test_paragraphs_joined_with_blank_line() {
        let text = "First  paragraph\nwraps.\r\n\r\nSecond one.";
        let chunks = chunker(100, 10).chunk(text);

        assert_eq!(chunks, vec!["First paragraph wraps.\n\nSecond one."]);
    }

    #[test]
    fn test_two_paragraphs_overflow() {
        let p1 = "a".repeat(30) + &"b".repeat(10);
        let p2 = "c".repeat(40);
        let text = format!("{}\n\n{}", p1, p2);

        let chunks = chunker(50, 10).chunk(&text);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], p1);
        assert_eq!(chunks[1], format!("{}\n\n{}", "b".repeat(10), p2));
    }

    #[test]
    fn test_single_huge_word_is_not_split() {
        let word = "w".repeat(2000);
        let chunks = chunker(1000, 200).chunk(&word);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chars().count(), 2000);
    }

    #[test]
    fn test_oversized_paragraph_without_boundaries_is_atomic() {
        let word = "w".repeat(250);
        let text = format!("intro\n\n{}\n\noutro", word);

        let chunks = chunker(100, 5).chunk(&text);

        assert_eq!(chunks[0], "intro");
        assert_eq!(chunks[1], word);
        assert_eq!(chunks[2], "wwwww\n\noutro");
    }

    #[test]
    fn test_oversized_paragraph_flushes_without_overlap() {
        let sentences: Vec<String> = (0..12)
            .map(|i| format!("Sentence number {:02}.", i))
            .collect();
        let long = sentences.join(" ");
        assert!(long.chars().count() > 100);
        let text = format!("Lead paragraph.\n\n{}", long);

        let chunks = chunker(50, 10).chunk(&text);

        assert_eq!(chunks[0], "Lead paragraph.");
        assert_eq!(chunks[1], "Sentence number 00. Sentence number 01.");
        assert!(chunks.iter().all(|c| c.chars().count() <= 50));
    }

    #[test]
    fn test_paragraph_after_sentences_uses_blank_line() {
        let long = "Aa. ".repeat(30);
        let text = format!("{}\n\nEnd.", long.trim());

        let chunks = chunker(40, 4).chunk(&text);
        let last = chunks.last().unwrap();

        assert!(last.ends_with("\n\nEnd."), "{last:?}");
    }

    #[test]
    fn test_multibyte_lengths_counted_in_chars() {
        let p1 = "é".repeat(8);
        let p2 = "ü".repeat(8);
        let text = format!("{}\n\n{}", p1, p2);

        // 8 + 2 + 8 = 18 chars fits in 18 even though it is 34 bytes
        let chunks = chunker(18, 3).chunk(&text);
        assert_eq!(chunks, vec![format!("{}\n\n{}", p1, p2)]);

        let chunks = chunker(17, 3).chunk(&text);
        assert_eq!(chunks, vec![p1, format!("ééé\n\n{}", p2)]);
    }
}
