//! Core traits defining the interface between the chunker and its callers.

use crate::config::ChunkerConfig;
use crate::types::DocumentChunks;

/// Chunking strategy trait.
///
/// Implementations are pure: the same text and configuration always yield the
/// same chunks, and no state is shared between calls.
pub trait Chunker: Send + Sync {
    /// Configuration this chunker was built with.
    fn config(&self) -> &ChunkerConfig;

    /// Split one document into ordered, overlapping chunks.
    fn chunk(&self, text: &str) -> Vec<String>;

    /// Chunk every document independently, keeping per-document results.
    fn chunk_documents<S>(&self, texts: &[S]) -> Vec<DocumentChunks>
    where
        S: AsRef<str>,
        Self: Sized,
    {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| DocumentChunks {
                index,
                chunks: self.chunk(text.as_ref()),
            })
            .collect()
    }
}
