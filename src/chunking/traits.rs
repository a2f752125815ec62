//! Chunker trait definition.
//!
//! Defines the interface shared by all chunking strategies, enabling
//! pluggable text segmentation approaches.

use crate::core::Chunk;
use crate::error::{ChunkingError, Result};

/// Trait for splitting text into bounded-size chunks.
///
/// Implementations must be `Send + Sync` and stateless: given the same
/// `(text, params)` a chunker always produces the same output sequence,
/// with ordering matching document order.
///
/// # Examples
///
/// ```
/// use textchunk_rs::chunking::{ChunkParams, Chunker, FixedChunker};
///
/// let chunker = FixedChunker;
/// let params = ChunkParams::with_size_and_overlap(100, 10);
/// let text = "Hello, world! ".repeat(20);
/// let chunks = chunker.chunk(&text, &params).unwrap();
/// assert!(!chunks.is_empty());
/// ```
pub trait Chunker: Send + Sync {
    /// Chunks the input text into segments.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to chunk.
    /// * `params` - Size and overlap parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid for this strategy.
    fn chunk(&self, text: &str, params: &ChunkParams) -> Result<Vec<Chunk>>;

    /// Returns the name of the chunking strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the chunking strategy.
    fn description(&self) -> &'static str;

    /// Validates parameters before chunking.
    ///
    /// The default checks only that `chunk_size` is positive; strategies
    /// that apply `overlap` add their own constraint on it.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidConfig`] if `chunk_size` is zero.
    fn validate(&self, params: &ChunkParams) -> Result<()> {
        if params.chunk_size == 0 {
            return Err(ChunkingError::InvalidConfig {
                reason: "chunk_size must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Size and overlap parameters shared by all strategies.
///
/// All values count characters, not bytes. Strategies that do not apply
/// `overlap` (recursive, document, semantic) accept it for interface
/// symmetry and ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkParams {
    /// Target chunk size in characters.
    pub chunk_size: usize,

    /// Overlap between consecutive chunks (fixed strategy only).
    pub overlap: usize,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkParams {
    /// Creates parameters with the default size and overlap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: super::DEFAULT_CHUNK_SIZE,
            overlap: super::DEFAULT_OVERLAP,
        }
    }

    /// Creates parameters with a custom chunk size and no overlap.
    #[must_use]
    pub const fn with_size(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            overlap: 0,
        }
    }

    /// Creates parameters with custom size and overlap.
    #[must_use]
    pub const fn with_size_and_overlap(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = ChunkParams::new();
        assert_eq!(params.chunk_size, super::super::DEFAULT_CHUNK_SIZE);
        assert_eq!(params.overlap, super::super::DEFAULT_OVERLAP);
    }

    #[test]
    fn test_params_with_size() {
        let params = ChunkParams::with_size(250);
        assert_eq!(params.chunk_size, 250);
        assert_eq!(params.overlap, 0);
    }

    #[test]
    fn test_params_with_size_and_overlap() {
        let params = ChunkParams::with_size_and_overlap(1000, 100);
        assert_eq!(params.chunk_size, 1000);
        assert_eq!(params.overlap, 100);
    }

    /// A minimal chunker exercising the default trait implementations.
    struct MinimalChunker;

    impl Chunker for MinimalChunker {
        fn chunk(&self, _text: &str, _params: &ChunkParams) -> Result<Vec<Chunk>> {
            Ok(vec![])
        }

        fn name(&self) -> &'static str {
            "minimal"
        }

        fn description(&self) -> &'static str {
            "test double"
        }
    }

    #[test]
    fn test_default_validate_rejects_zero_chunk_size() {
        let chunker = MinimalChunker;
        let result = chunker.validate(&ChunkParams::with_size(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_validate_ignores_overlap() {
        // Overlap constraints belong to the strategies that apply overlap
        let chunker = MinimalChunker;
        let result = chunker.validate(&ChunkParams::with_size_and_overlap(10, 100));
        assert!(result.is_ok());
    }
}
