//! Document (passthrough) chunking strategy.
//!
//! Emits the whole document as a single trimmed chunk, for pipelines
//! where no splitting is desired.

use crate::chunking::traits::{ChunkParams, Chunker};
use crate::core::Chunk;
use crate::error::Result;

/// Whole-document passthrough chunker.
///
/// Always produces exactly one chunk containing the trimmed input;
/// size and overlap parameters are not consulted.
///
/// # Examples
///
/// ```
/// use textchunk_rs::chunking::{ChunkParams, Chunker, DocumentChunker};
///
/// let chunks = DocumentChunker.chunk("  hello world  ", &ChunkParams::new()).unwrap();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, "hello world");
/// assert_eq!(chunks[0].size, 11);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentChunker;

impl Chunker for DocumentChunker {
    fn chunk(&self, text: &str, _params: &ChunkParams) -> Result<Vec<Chunk>> {
        Ok(vec![Chunk::new(text.trim().to_string())])
    }

    fn name(&self) -> &'static str {
        "document"
    }

    fn description(&self) -> &'static str {
        "Whole-document passthrough, one trimmed chunk"
    }

    /// No parameter constraints: size and overlap are ignored.
    fn validate(&self, _params: &ChunkParams) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_counts() {
        let chunks = DocumentChunker
            .chunk("  hello world  ", &ChunkParams::new())
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].size, 11);
        assert!(chunks[0].span().is_none());
    }

    #[test]
    fn test_empty_input_yields_one_trivial_chunk() {
        let chunks = DocumentChunker.chunk("", &ChunkParams::new()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_empty());
        assert_eq!(chunks[0].size, 0);
    }

    #[test]
    fn test_parameters_ignored() {
        let a = DocumentChunker
            .chunk("same text", &ChunkParams::with_size(1))
            .unwrap();
        let b = DocumentChunker
            .chunk("same text", &ChunkParams::with_size_and_overlap(9999, 5000))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(DocumentChunker.name(), "document");
    }
}
