//! Fixed-size chunking strategy.
//!
//! Splits text into a sliding window of `chunk_size` characters with a
//! configurable overlap between consecutive windows. The only strategy
//! that records source offsets on its chunks.

use crate::chunking::traits::{ChunkParams, Chunker};
use crate::core::Chunk;
use crate::error::{ChunkingError, Result};
use crate::io::char_byte_offsets;

/// Fixed-size chunker that splits text at character offsets.
///
/// Each chunk spans `chunk_size` characters (clamped at end of text),
/// and starts advance by exactly `chunk_size - overlap`: `start[i+1] =
/// start[i] + chunk_size - overlap`. Offsets are character offsets
/// mapped to byte boundaries before slicing, so multi-byte UTF-8
/// characters are never split.
///
/// # Examples
///
/// ```
/// use textchunk_rs::chunking::{ChunkParams, Chunker, FixedChunker};
///
/// let params = ChunkParams::with_size_and_overlap(10, 2);
/// let chunks = FixedChunker.chunk("0123456789ABCDEFGHIJ", &params).unwrap();
/// assert_eq!(chunks[0].span(), Some(0..10));
/// assert_eq!(chunks[1].span(), Some(8..18));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChunker;

impl Chunker for FixedChunker {
    fn chunk(&self, text: &str, params: &ChunkParams) -> Result<Vec<Chunk>> {
        self.validate(params)?;

        if text.is_empty() {
            return Ok(vec![]);
        }

        let offsets = char_byte_offsets(text);
        let total_chars = offsets.len() - 1;
        let step = params.chunk_size - params.overlap;

        let mut chunks = Vec::with_capacity(total_chars.div_ceil(step));
        let mut start = 0;

        while start < total_chars {
            let end = (start + params.chunk_size).min(total_chars);
            let content = text[offsets[start]..offsets[end]].to_string();
            chunks.push(Chunk::with_span(content, start..end));
            start += step;
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }

    fn description(&self) -> &'static str {
        "Fixed-size sliding window with configurable overlap"
    }

    /// Validates that the cursor can advance: `overlap` must be strictly
    /// less than `chunk_size`, otherwise the window loop never terminates.
    fn validate(&self, params: &ChunkParams) -> Result<()> {
        if params.chunk_size == 0 {
            return Err(ChunkingError::InvalidConfig {
                reason: "chunk_size must be > 0".to_string(),
            }
            .into());
        }
        if params.overlap >= params.chunk_size {
            return Err(ChunkingError::OverlapTooLarge {
                overlap: params.overlap,
                size: params.chunk_size,
            }
            .into());
        }
        Ok(())
    }
}
