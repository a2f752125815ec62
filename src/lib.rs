//! # textchunk-rs
//!
//! Text chunking toolkit for retrieval pipelines.
//!
//! Splits plain-text documents into bounded-size chunks under four
//! interchangeable strategies, all behind a uniform contract
//! (`text, parameters -> ordered sequence of chunks`):
//!
//! - **Fixed**: character sliding window with configurable overlap,
//!   recording source offsets on every chunk
//! - **Recursive**: paragraph-aware greedy merge on blank-line boundaries
//! - **Document**: whole-document passthrough
//! - **Semantic**: sentence-aware greedy merge on terminal punctuation
//!
//! Every strategy is a pure, deterministic function over an in-memory
//! string; text extraction from source documents is a collaborator
//! concern and out of scope.
//!
//! ## Example
//!
//! ```
//! use textchunk_rs::chunking::{ChunkParams, Strategy, chunk_text};
//!
//! let params = ChunkParams::with_size_and_overlap(100, 10);
//! let set = chunk_text(Strategy::Fixed, &"lorem ipsum ".repeat(20), &params).unwrap();
//! assert_eq!(set.total_chunks, set.chunks.len());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Chunk, ChunkSet};

// Re-export chunking types
pub use chunking::{
    ChunkParams, Chunker, DocumentChunker, FixedChunker, RecursiveChunker, SemanticChunker,
    Strategy, available_strategies, chunk_text, create_chunker,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
