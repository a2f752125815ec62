//! CLI layer for textchunk.
//!
//! Provides the command-line interface using clap, with commands for
//! chunking documents and inspecting the available strategies.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
