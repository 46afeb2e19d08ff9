//! The filter driver: read a schema, extract, emit the envelope.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use super::report;
use crate::descriptor::FileDescriptor;
use crate::extract::extract_file;
use crate::schema::SourceFile;

/// What the filter hands downstream: the rewritten schema next to the
/// extracted descriptor.
#[derive(Debug, Serialize)]
struct Envelope {
    schema: SourceFile,
    descriptor: FileDescriptor,
}

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let source = read_input(args.input.as_deref())?;
    let mut file: SourceFile =
        serde_json::from_str(&source).context("failed to parse schema JSON")?;

    let extraction = extract_file(&mut file);
    if !args.quiet {
        report::print_diagnostics(&extraction.diagnostics);
    }

    let envelope = Envelope {
        schema: file,
        descriptor: extraction.descriptor,
    };
    let rendered =
        serde_json::to_string_pretty(&envelope).context("failed to serialize result")?;
    write_output(args.output.as_deref(), &rendered)?;

    Ok(ExitStatus::Success)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok(source)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("failed to write standard output")
        }
    }
}
