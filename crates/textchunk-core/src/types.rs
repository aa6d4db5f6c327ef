//! Core domain types for textchunk.

use serde::{Deserialize, Serialize};

/// Separator inserted between two units inside the same chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// A single space, between sentences of a re-split paragraph.
    Sentence,
    /// A blank line, between paragraphs.
    Paragraph,
}

impl Separator {
    /// The literal text inserted between units.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentence => " ",
            Self::Paragraph => "\n\n",
        }
    }

    /// Length of the separator in characters.
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        };
        write!(f, "{}", s)
    }
}

/// Chunks produced for one document of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunks {
    /// Position of the document in the batch input.
    pub index: usize,

    /// Chunks in source order. Empty for empty or whitespace-only input.
    pub chunks: Vec<String>,
}

impl DocumentChunks {
    /// Whether the document produced no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Flatten per-document chunks into a single ordered sequence.
///
/// Document boundaries are lost; callers that need attribution should keep
/// the grouped form.
pub fn flatten_documents(documents: Vec<DocumentChunks>) -> Vec<String> {
    documents.into_iter().flat_map(|doc| doc.chunks).collect()
}
