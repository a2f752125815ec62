//! CLI command implementations.
//!
//! Contains the logic for each CLI command; commands return their
//! formatted output as a string and leave printing to the binary.

use crate::chunking::{ChunkParams, Strategy, chunk_text};
use crate::cli::output::{OutputFormat, format_chunks, format_strategies};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::io::read_file;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Chunk {
            file,
            strategy,
            chunk_size,
            overlap,
        } => cmd_chunk(
            file.as_deref(),
            strategy,
            *chunk_size,
            *overlap,
            format,
        ),
        Commands::Strategies => Ok(cmd_strategies(format)),
    }
}

/// Chunks a document with the selected strategy.
fn cmd_chunk(
    file: Option<&Path>,
    strategy: &str,
    chunk_size: usize,
    overlap: usize,
    format: OutputFormat,
) -> Result<String> {
    let strategy = Strategy::from_str(strategy)?;

    let text = match file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let params = ChunkParams::with_size_and_overlap(chunk_size, overlap);
    let set = chunk_text(strategy, &text, &params)?;

    Ok(format_chunks(&set, strategy.name(), format))
}

/// Lists the available strategies with their descriptions.
fn cmd_strategies(format: OutputFormat) -> String {
    let strategies: Vec<(&str, &str)> = Strategy::ALL
        .iter()
        .map(|s| (s.name(), s.chunker().description()))
        .collect();
    format_strategies(&strategies, format)
}

/// Reads the document text from stdin.
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| CommandError::ExecutionFailed(format!("failed to read stdin: {e}")))?;
    Ok(text)
}
