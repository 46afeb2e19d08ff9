//! Warning formatting and printing.
//!
//! Separate from the extraction engine so prototag can be used as a
//! library: the engine returns diagnostics as values, this module decides
//! how they look on stderr.

use std::io::{self, Write};

use colored::Colorize;

use crate::diagnostics::Diagnostic;

/// Print directive warnings to stderr.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    print_diagnostics_to(diagnostics, &mut io::stderr().lock());
}

/// Print directive warnings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    for diagnostic in diagnostics {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), diagnostic);
    }
}
