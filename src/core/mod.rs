//! Core domain models for textchunk.
//!
//! Pure data types shared by the chunking strategies and the CLI layer,
//! with no I/O dependencies.

pub mod chunk;

pub use chunk::{Chunk, ChunkSet};
