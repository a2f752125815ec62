//! Recursive (paragraph-merge) chunking strategy.
//!
//! Splits text on blank-line paragraph boundaries and greedily merges
//! paragraphs into chunks below the size threshold. Flush boundaries
//! fall strictly between paragraphs, never mid-paragraph.

use crate::chunking::traits::{ChunkParams, Chunker};
use crate::core::Chunk;
use crate::error::Result;

/// Paragraph-merge chunker.
///
/// Paragraphs are accumulated into a buffer while the combined character
/// count stays strictly below `chunk_size`; when the next paragraph
/// would cross the threshold the buffer is flushed as one trimmed chunk
/// and the paragraph starts a new buffer. A single paragraph longer
/// than `chunk_size` is emitted whole, unsplit.
///
/// The `overlap` parameter is accepted for interface symmetry but not
/// applied by this strategy.
///
/// # Examples
///
/// ```
/// use textchunk_rs::chunking::{ChunkParams, Chunker, RecursiveChunker};
///
/// let text = "First paragraph.\n\nSecond paragraph.";
/// let chunks = RecursiveChunker.chunk(text, &ChunkParams::with_size(100)).unwrap();
/// assert_eq!(chunks.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveChunker;

impl RecursiveChunker {
    /// Flushes the buffer as a trimmed chunk, skipping whitespace-only buffers.
    fn flush(chunks: &mut Vec<Chunk>, buffer: &str) {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            chunks.push(Chunk::new(trimmed.to_string()));
        }
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str, params: &ChunkParams) -> Result<Vec<Chunk>> {
        self.validate(params)?;

        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0;

        for paragraph in text.split("\n\n") {
            let paragraph_chars = paragraph.chars().count();

            if buffer_chars + paragraph_chars >= params.chunk_size {
                Self::flush(&mut chunks, &buffer);
                buffer.clear();
                buffer_chars = 0;
            }

            buffer.push_str(paragraph);
            buffer.push_str("\n\n");
            buffer_chars += paragraph_chars + 2;
        }

        Self::flush(&mut chunks, &buffer);

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "recursive"
    }

    fn description(&self) -> &'static str {
        "Paragraph-aware greedy merge on blank-line boundaries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let chunks = RecursiveChunker
            .chunk("", &ChunkParams::with_size(100))
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_single_paragraph() {
        let text = "Just one paragraph here.";
        let chunks = RecursiveChunker
            .chunk(text, &ChunkParams::with_size(100))
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert!(chunks[0].span().is_none());
    }

    #[test]
    fn test_paragraphs_merge_below_threshold() {
        let text = "Short one.\n\nShort two.\n\nShort three.";
        let chunks = RecursiveChunker
            .chunk(text, &ChunkParams::with_size(500))
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].text.contains("Short one."));
        assert!(chunks[0].text.contains("Short three."));
    }

    #[test]
    fn test_flush_boundary_between_paragraphs() {
        // Two 100-char paragraphs with threshold 150: each lands in its own
        // chunk and no chunk mixes letters from both
        let text = format!("{}\n\n{}", "A".repeat(100), "B".repeat(100));
        let chunks = RecursiveChunker
            .chunk(&text, &ChunkParams::with_size(150))
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].text.chars().all(|c| c == 'A'));
        assert!(chunks[1].text.chars().all(|c| c == 'B'));
    }

    #[test]
    fn test_oversized_paragraph_emitted_whole() {
        let big = "X".repeat(300);
        let text = format!("{big}\n\nsmall tail");
        let chunks = RecursiveChunker
            .chunk(&text, &ChunkParams::with_size(100))
            .unwrap();
        assert_eq!(chunks[0].text, big);
        assert_eq!(chunks[0].size, 300);
    }

    #[test]
    fn test_oversized_first_paragraph_no_leading_empty_chunk() {
        let text = "Y".repeat(200);
        let chunks = RecursiveChunker
            .chunk(&text, &ChunkParams::with_size(50))
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(!chunks[0].is_empty());
    }

    #[test]
    fn test_merged_paragraphs_keep_separator() {
        let text = "alpha\n\nbeta\n\ngamma";
        let chunks = RecursiveChunker
            .chunk(text, &ChunkParams::with_size(500))
            .unwrap();
        assert_eq!(chunks[0].text, "alpha\n\nbeta\n\ngamma");
    }

    #[test]
    fn test_size_is_post_trim_character_count() {
        let text = "  padded paragraph  ";
        let chunks = RecursiveChunker
            .chunk(text, &ChunkParams::with_size(500))
            .unwrap();
        assert_eq!(chunks[0].text, "padded paragraph");
        assert_eq!(chunks[0].size, 16);
    }

    #[test]
    fn test_whitespace_only_input() {
        let chunks = RecursiveChunker
            .chunk("  \n\n  \n\n ", &ChunkParams::with_size(100))
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_overlap_is_a_noop() {
        let text = "one\n\ntwo\n\nthree";
        let with_overlap = RecursiveChunker
            .chunk(text, &ChunkParams::with_size_and_overlap(10, 5))
            .unwrap();
        let without = RecursiveChunker
            .chunk(text, &ChunkParams::with_size(10))
            .unwrap();
        assert_eq!(with_overlap, without);
    }

    #[test]
    fn test_idempotent() {
        let text = "para one\n\npara two\n\npara three".repeat(5);
        let params = ChunkParams::with_size(40);
        assert_eq!(
            RecursiveChunker.chunk(&text, &params).unwrap(),
            RecursiveChunker.chunk(&text, &params).unwrap()
        );
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(RecursiveChunker.name(), "recursive");
    }
}
