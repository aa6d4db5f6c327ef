//! textchunk-core - Core types and traits for textchunk
//!
//! This crate provides the configuration, error handling, and the
//! [`Chunker`] interface shared by the chunking pipeline and its callers.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ChunkError, Result};
pub use traits::*;
pub use types::*;
