//! Semantic (sentence-merge) chunking strategy.
//!
//! Splits text into sentences and greedily merges them into chunks
//! below the size threshold, so no sentence is ever split across chunks.

use crate::chunking::traits::{ChunkParams, Chunker};
use crate::core::Chunk;
use crate::error::Result;
use crate::io::split_sentences;

/// Sentence-merge chunker.
///
/// Sentences end at `.`, `!` or `?` followed by whitespace (the
/// whitespace is consumed as the separator). Sentences are accumulated
/// into a buffer while the combined character count stays strictly
/// below `chunk_size`, rejoined with single spaces. A sentence longer
/// than `chunk_size` is emitted whole; text with no sentence-terminal
/// punctuation yields exactly one chunk.
///
/// The `overlap` parameter is accepted for interface symmetry but not
/// applied by this strategy.
///
/// # Examples
///
/// ```
/// use textchunk_rs::chunking::{ChunkParams, Chunker, SemanticChunker};
///
/// let text = "Hi there. How are you? I am fine.";
/// let chunks = SemanticChunker.chunk(text, &ChunkParams::with_size(1000)).unwrap();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, text);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticChunker;

impl SemanticChunker {
    /// Flushes the buffer as a trimmed chunk, skipping whitespace-only buffers.
    fn flush(chunks: &mut Vec<Chunk>, buffer: &str) {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            chunks.push(Chunk::new(trimmed.to_string()));
        }
    }
}

impl Chunker for SemanticChunker {
    fn chunk(&self, text: &str, params: &ChunkParams) -> Result<Vec<Chunk>> {
        self.validate(params)?;

        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0;

        for sentence in split_sentences(text) {
            let sentence_chars = sentence.chars().count();

            if buffer_chars + sentence_chars >= params.chunk_size {
                Self::flush(&mut chunks, &buffer);
                buffer.clear();
                buffer_chars = 0;
            }

            buffer.push_str(sentence);
            buffer.push(' ');
            buffer_chars += sentence_chars + 1;
        }

        Self::flush(&mut chunks, &buffer);

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "semantic"
    }

    fn description(&self) -> &'static str {
        "Sentence-aware greedy merge on terminal punctuation"
    }
}
