//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// textchunk-rs: split documents into bounded-size chunks.
///
/// A CLI tool for chunking plain-text documents for retrieval
/// pipelines, with selectable splitting strategies.
#[derive(Parser, Debug)]
#[command(name = "textchunk-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "TEXTCHUNK_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a document into chunks.
    Chunk {
        /// Path to the document (reads from stdin if not provided).
        file: Option<PathBuf>,

        /// Chunking strategy (fixed, recursive, document, semantic).
        #[arg(short, long, default_value = "fixed")]
        strategy: String,

        /// Target chunk size in characters.
        #[arg(long, default_value = "500")]
        chunk_size: usize,

        /// Overlap between consecutive chunks in characters (fixed strategy).
        #[arg(long, default_value = "50")]
        overlap: usize,
    },

    /// List available chunking strategies.
    Strategies,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_chunk_defaults() {
        let cli = Cli::parse_from(["textchunk-rs", "chunk", "doc.txt"]);
        match cli.command {
            Commands::Chunk {
                file,
                strategy,
                chunk_size,
                overlap,
            } => {
                assert_eq!(file, Some(PathBuf::from("doc.txt")));
                assert_eq!(strategy, "fixed");
                assert_eq!(chunk_size, 500);
                assert_eq!(overlap, 50);
            }
            Commands::Strategies => unreachable!("parsed wrong command"),
        }
    }

    #[test]
    fn test_chunk_stdin_when_no_file() {
        let cli = Cli::parse_from(["textchunk-rs", "chunk", "--strategy", "semantic"]);
        match cli.command {
            Commands::Chunk { file, strategy, .. } => {
                assert!(file.is_none());
                assert_eq!(strategy, "semantic");
            }
            Commands::Strategies => unreachable!("parsed wrong command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["textchunk-rs", "strategies", "--format", "json"]);
        assert_eq!(cli.format, "json");
    }
}
