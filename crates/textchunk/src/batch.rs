//! Batch chunking over ordered document collections.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use textchunk_core::{
    flatten_documents, BatchConfig, ChunkError, Chunker, DocumentChunks, Result,
};

use crate::chunker::TextChunker;

/// Applies a [`TextChunker`] to every document of a batch.
///
/// Documents never share state: each gets its own accumulator, and no
/// overlap crosses from one document into the next.
#[derive(Debug, Clone)]
pub struct BatchChunker {
    /// Chunker applied to each document.
    chunker: TextChunker,

    /// Upper bound on documents chunked at once by the concurrent methods.
    max_concurrency: usize,
}

impl BatchChunker {
    /// Create a batch chunker with the default concurrency.
    pub fn new(chunker: TextChunker) -> Self {
        Self {
            chunker,
            max_concurrency: BatchConfig::default().max_concurrency,
        }
    }

    /// Create a batch chunker from the `[batch]` configuration section.
    pub fn with_config(chunker: TextChunker, config: &BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            chunker,
            max_concurrency: config.max_concurrency,
        })
    }

    /// The per-document chunker.
    pub fn chunker(&self) -> &TextChunker {
        &self.chunker
    }

    /// Chunk each document in order, keeping per-document results.
    pub fn chunk_documents<S: AsRef<str>>(&self, texts: &[S]) -> Vec<DocumentChunks> {
        let start = Instant::now();
        let documents = self.chunker.chunk_documents(texts);

        info!(
            documents = documents.len(),
            chunks = documents.iter().map(|d| d.chunks.len()).sum::<usize>(),
            chunk_size = self.chunker.config().chunk_size(),
            overlap = self.chunker.config().overlap(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Chunked batch"
        );
        documents
    }

    /// Chunk each document and concatenate all chunks in input order.
    pub fn chunk_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        flatten_documents(self.chunk_documents(texts))
    }

    /// Chunk documents on the blocking thread pool, at most
    /// `max_concurrency` at a time.
    ///
    /// Results are reordered by input position, so the output matches
    /// [`BatchChunker::chunk_documents`] exactly.
    pub async fn chunk_documents_concurrent(
        &self,
        texts: Vec<String>,
    ) -> Result<Vec<DocumentChunks>> {
        let start = Instant::now();
        let count = texts.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        for (index, text) in texts.into_iter().enumerate() {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| ChunkError::internal(format!("Batch semaphore closed: {}", e)))?;
            let chunker = self.chunker;

            tasks.spawn_blocking(move || {
                let _permit = permit;
                DocumentChunks {
                    index,
                    chunks: chunker.chunk(&text),
                }
            });
        }

        let mut documents = Vec::with_capacity(count);
        while let Some(joined) = tasks.join_next().await {
            let document = joined
                .map_err(|e| ChunkError::internal(format!("Chunking task failed: {}", e)))?;
            debug!(
                index = document.index,
                chunks = document.chunks.len(),
                "Document finished"
            );
            documents.push(document);
        }
        documents.sort_by_key(|d| d.index);

        info!(
            documents = documents.len(),
            chunks = documents.iter().map(|d| d.chunks.len()).sum::<usize>(),
            chunk_size = self.chunker.config().chunk_size(),
            overlap = self.chunker.config().overlap(),
            max_concurrency = self.max_concurrency,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Chunked batch concurrently"
        );
        Ok(documents)
    }

    /// Concurrent counterpart of [`BatchChunker::chunk_batch`].
    pub async fn chunk_batch_concurrent(&self, texts: Vec<String>) -> Result<Vec<String>> {
        Ok(flatten_documents(self.chunk_documents_concurrent(texts).await?))
    }
}
