//! Configuration types for textchunk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ChunkError, Result};

/// Default chunk-size bound in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap length in characters.
pub const DEFAULT_OVERLAP: usize = 200;

/// Upper bound on `batch.max_concurrency`.
pub const MAX_CONCURRENCY: usize = 1024;

/// Validated chunking parameters.
///
/// Only constructible through [`ChunkerConfig::new`], so holding one means
/// `0 < overlap < chunk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkerConfig {
    /// Validate and build a chunker configuration.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ChunkError::invalid_configuration(
                "chunk size must be greater than zero",
            ));
        }
        if overlap == 0 {
            return Err(ChunkError::invalid_configuration(
                "overlap must be greater than zero",
            ));
        }
        if overlap >= chunk_size {
            return Err(ChunkError::invalid_configuration(format!(
                "overlap {} must be smaller than chunk size {}",
                overlap, chunk_size
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Maximum target length of a chunk, in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of trailing characters carried into the next chunk.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Paragraphs longer than this are re-split into sentences.
    pub fn oversized_threshold(&self) -> usize {
        self.chunk_size.saturating_mul(2)
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Main configuration file model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextchunkConfig {
    /// Chunking configuration.
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Batch configuration.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Chunking section of the configuration file (unvalidated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters copied from the end of one chunk into the next.
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl ChunkingConfig {
    /// Check the invariants and produce a usable [`ChunkerConfig`].
    pub fn validate(&self) -> Result<ChunkerConfig> {
        ChunkerConfig::new(self.chunk_size, self.overlap)
    }
}

/// Batch section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of documents chunked at the same time.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_concurrency: 4 }
    }
}

impl BatchConfig {
    /// Require `1 <= max_concurrency <= MAX_CONCURRENCY`.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(ChunkError::invalid_configuration(
                "batch max_concurrency must be at least 1",
            ));
        }
        if self.max_concurrency > MAX_CONCURRENCY {
            return Err(ChunkError::invalid_configuration(format!(
                "batch max_concurrency {} exceeds the maximum of {}",
                self.max_concurrency, MAX_CONCURRENCY
            )));
        }
        Ok(())
    }
}

// Default value functions

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_max_concurrency() -> usize {
    4
}

impl TextchunkConfig {
    /// Load configuration from file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ChunkError::config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("textchunk").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        let local_config = PathBuf::from("textchunk.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        Ok(Self::default())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChunkError::config(format!("Failed to render config: {}", e)))
    }
}
