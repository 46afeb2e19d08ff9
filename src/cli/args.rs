//! CLI argument definitions using clap.
//!
//! prototag is a filter: it reads one schema JSON document, runs the
//! extraction pass, and writes a `{schema, descriptor}` envelope. Input
//! defaults to standard input and output to standard output, so the tool
//! slots into a plugin pipeline without temporary files.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Schema JSON file to read (defaults to standard input)
    pub input: Option<PathBuf>,

    /// Write the result envelope to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress directive warnings
    #[arg(short, long)]
    pub quiet: bool,
}
