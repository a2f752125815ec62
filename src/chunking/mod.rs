//! Chunking strategies for textchunk.
//!
//! This module provides a trait-based system for splitting document
//! text into bounded-size chunks. Four strategies are available:
//!
//! - **Fixed**: character sliding window with configurable size and overlap
//! - **Recursive**: paragraph-aware greedy merge on blank-line boundaries
//! - **Document**: whole-document passthrough, one trimmed chunk
//! - **Semantic**: sentence-aware greedy merge on terminal punctuation

pub mod document;
pub mod fixed;
pub mod recursive;
pub mod semantic;
pub mod traits;

pub use document::DocumentChunker;
pub use fixed::FixedChunker;
pub use recursive::RecursiveChunker;
pub use semantic::SemanticChunker;
pub use traits::{ChunkParams, Chunker};

use crate::core::ChunkSet;
use crate::error::{ChunkingError, Result};
use std::fmt;
use std::str::FromStr;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap size in characters (fixed strategy).
pub const DEFAULT_OVERLAP: usize = 50;

/// The closed set of selectable chunking strategies.
///
/// Modeling the selector as an enum makes dispatch exhaustive at
/// compile time; only parsing an unknown name can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Fixed-size sliding window.
    Fixed,
    /// Paragraph-merge.
    Recursive,
    /// Whole-document passthrough.
    Document,
    /// Sentence-merge.
    Semantic,
}

impl Strategy {
    /// All strategies, in selector order.
    pub const ALL: [Self; 4] = [Self::Fixed, Self::Recursive, Self::Document, Self::Semantic];

    /// Returns the selector name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Recursive => "recursive",
            Self::Document => "document",
            Self::Semantic => "semantic",
        }
    }

    /// Returns the chunker implementing this strategy.
    #[must_use]
    pub fn chunker(self) -> Box<dyn Chunker> {
        match self {
            Self::Fixed => Box::new(FixedChunker),
            Self::Recursive => Box::new(RecursiveChunker),
            Self::Document => Box::new(DocumentChunker),
            Self::Semantic => Box::new(SemanticChunker),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ChunkingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "recursive" => Ok(Self::Recursive),
            "document" => Ok(Self::Document),
            "semantic" => Ok(Self::Semantic),
            _ => Err(ChunkingError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Creates a chunker by selector name.
///
/// # Errors
///
/// Returns [`ChunkingError::UnknownStrategy`] if the name is not one of
/// the four recognized strategies.
pub fn create_chunker(name: &str) -> Result<Box<dyn Chunker>> {
    let strategy = Strategy::from_str(name)?;
    Ok(strategy.chunker())
}

/// Lists available chunking strategy names.
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    Strategy::ALL.iter().map(|s| s.name()).collect()
}

/// Runs a strategy over the input text and wraps the result.
///
/// This is the uniform entry point: `text, parameters → ordered chunks
/// plus their count`.
///
/// # Errors
///
/// Returns an error if the parameters are invalid for the strategy.
pub fn chunk_text(strategy: Strategy, text: &str, params: &ChunkParams) -> Result<ChunkSet> {
    let chunks = strategy.chunker().chunk(text, params)?;
    Ok(ChunkSet::from(chunks))
}
