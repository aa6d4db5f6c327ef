//! textchunk - Paragraph and sentence aware text chunking
//!
//! Splits arbitrarily long documents into bounded, overlapping chunks for
//! embedding and retrieval pipelines.
//!
//! # Pipeline
//!
//! - [`normalize_line_endings`]: `\r\n` and `\r` become `\n`.
//! - [`split_paragraphs`]: split on blank lines, collapse whitespace.
//! - [`split_sentences`]: re-split paragraphs longer than twice the chunk size.
//! - [`ChunkAssembler`]: greedy packing with a fixed character overlap.
//! - [`BatchChunker`]: the same pipeline over many documents, optionally
//!   on the blocking thread pool.
//!
//! Input is treated as opaque text. Nothing in it is executed, interpreted
//! or escaped.
//!
//! # Example
//!
//! ```rust
//! let chunks = textchunk::chunk("First paragraph.\n\nSecond paragraph.", 1000, 200).unwrap();
//! assert_eq!(chunks, vec!["First paragraph.\n\nSecond paragraph."]);
//! ```

mod assembler;
mod batch;
mod chunker;
mod normalize;
mod paragraph;
mod sentence;

pub use assembler::{char_suffix, ChunkAssembler};
pub use batch::BatchChunker;
pub use chunker::TextChunker;
pub use normalize::normalize_line_endings;
pub use paragraph::{collapse_whitespace, split_paragraphs};
pub use sentence::split_sentences;

// Re-export types for convenience
pub use textchunk_core::{
    BatchConfig, ChunkError, Chunker, ChunkerConfig, DocumentChunks, Result, Separator,
};

/// Chunk a single document.
///
/// Fails only when the sizes are invalid (`overlap >= chunk_size` or either
/// is zero). Empty and whitespace-only input yields no chunks.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    let chunker = TextChunker::with_sizes(chunk_size, overlap)?;
    Ok(chunker.chunk(text))
}

/// Chunk every document and concatenate the chunks in input order.
///
/// Per-document boundaries are not kept; use
/// [`BatchChunker::chunk_documents`] when attribution matters.
pub fn chunk_batch<S: AsRef<str>>(
    texts: &[S],
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>> {
    let chunker = TextChunker::with_sizes(chunk_size, overlap)?;
    Ok(BatchChunker::new(chunker).chunk_batch(texts))
}
