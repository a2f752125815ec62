//! I/O utilities for textchunk.
//!
//! File reading with memory mapping support for large documents, plus
//! Unicode helpers used by the chunking strategies and output layer.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, read_file};
pub use unicode::{char_byte_offsets, split_sentences, truncate_graphemes};
