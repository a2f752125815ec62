//! Chunk representation for textchunk.
//!
//! Chunks are segments of document text created by chunking strategies.
//! Offset-based strategies record where in the original text each chunk
//! came from; merge-based strategies produce text-only chunks.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous span of text produced by a splitting strategy.
///
/// `size` is the character length of `text` (post-trim, where the
/// producing strategy trims). `start`/`end` are absolute character
/// offsets into the original document and are present only for
/// offset-based strategies; they are omitted from serialized output
/// when absent.
///
/// # Examples
///
/// ```
/// use textchunk_rs::core::Chunk;
///
/// let chunk = Chunk::with_span("Hello, world!".to_string(), 0..13);
/// assert_eq!(chunk.size, 13);
/// assert_eq!(chunk.span(), Some(0..13));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk content.
    pub text: String,

    /// Character length of the content.
    pub size: usize,

    /// Start character offset in the original text (offset-based strategies only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,

    /// End character offset in the original text (offset-based strategies only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Chunk {
    /// Creates a chunk without source offsets.
    #[must_use]
    pub fn new(text: String) -> Self {
        let size = text.chars().count();
        Self {
            text,
            size,
            start: None,
            end: None,
        }
    }

    /// Creates a chunk with its character span in the original text.
    #[must_use]
    pub fn with_span(text: String, span: Range<usize>) -> Self {
        let size = text.chars().count();
        Self {
            text,
            size,
            start: Some(span.start),
            end: Some(span.end),
        }
    }

    /// Returns the character span in the original text, if recorded.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(start..end),
            _ => None,
        }
    }

    /// Checks if the chunk content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ordered chunking output: the chunks plus their count.
///
/// This is the envelope every strategy's result is wrapped in before
/// leaving the dispatch layer; order reflects document position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSet {
    /// Chunks in document order.
    pub chunks: Vec<Chunk>,

    /// Number of chunks produced.
    pub total_chunks: usize,
}

impl ChunkSet {
    /// Checks if no chunks were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }
}

impl From<Vec<Chunk>> for ChunkSet {
    fn from(chunks: Vec<Chunk>) -> Self {
        let total_chunks = chunks.len();
        Self {
            chunks,
            total_chunks,
        }
    }
}
