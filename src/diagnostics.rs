//! Warnings for directive values that failed validation.
//!
//! Malformed directives never abort extraction: the offending line stays in
//! the comment text and a `Diagnostic` records what was skipped. The engine
//! collects diagnostics as values; the CLI layer decides how to print them.
//! They are advisory only and never affect the exit status.

use std::fmt;

/// One skipped directive, with enough context to identify the field and the
/// rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `@go.name=` value failed validation; no rename was applied.
    SkippedName { field: String, value: String },
    /// A `@<kind>.tag=` value contained an interior space; no tag was
    /// appended.
    SkippedTag {
        field: String,
        kind: String,
        value: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedName { field, value } => {
                write!(f, "skip {} go name replacement, illegal value '{}'", field, value)
            }
            Diagnostic::SkippedTag { field, kind, value } => {
                write!(
                    f,
                    "skip commentary tag '{}' declaration on field '{}', illegal value '{}'",
                    kind, field, value
                )
            }
        }
    }
}
