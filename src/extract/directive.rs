//! Comment directive grammar.
//!
//! Two single-line directive forms are recognized inside field comments:
//! - `@go.name=<value>` - replace the field's generated identifier
//! - `@<kind>.tag=<value>` - attach a key/value tag to the field
//!
//! Classification is pure text parsing with no semantic processing: the
//! caller hands in a normalized line (whitespace and `*` markers already
//! stripped) and decides what to do with the result. A directive with an
//! illegal value is reported back as [`LineClass::Invalid`] so the raw line
//! can be kept and the skip surfaced as a warning.

use std::sync::LazyLock;

use regex::Regex;

use crate::descriptor::Tag;
use crate::diagnostics::Diagnostic;

static TAG_DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([a-z]+)\.tag=(.*)$").unwrap());

static NAME_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9a-zA-Z_]").unwrap());

const NAME_DIRECTIVE_PREFIX: &str = "@go.name=";

/// Classification of one normalized comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineClass {
    /// Not a directive; the raw line stays in the cleaned block.
    Prose,
    /// Valid name directive; the line is consumed.
    Name(String),
    /// Valid tag directive; the line is consumed.
    Tag(Tag),
    /// Directive with an illegal value; the raw line stays and the skip is
    /// reported.
    Invalid(InvalidDirective),
}

/// A recognized directive whose value failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InvalidDirective {
    Name { value: String },
    Tag { kind: String, value: String },
}

impl InvalidDirective {
    pub(crate) fn into_diagnostic(self, field_name: &str) -> Diagnostic {
        match self {
            InvalidDirective::Name { value } => Diagnostic::SkippedName {
                field: field_name.to_string(),
                value,
            },
            InvalidDirective::Tag { kind, value } => Diagnostic::SkippedTag {
                field: field_name.to_string(),
                kind,
                value,
            },
        }
    }
}

/// Classify one comment line.
pub(crate) fn classify(pattern: &str) -> LineClass {
    if let Some(value) = pattern.strip_prefix(NAME_DIRECTIVE_PREFIX) {
        return classify_name(value);
    }

    if let Some(captures) = TAG_DIRECTIVE_REGEX.captures(pattern) {
        return classify_tag(&captures[1], &captures[2]);
    }

    LineClass::Prose
}

/// A name value is accepted when it is non-empty, the identifier character
/// class matches somewhere in it, and the first character is uppercase.
/// The check does not verify every character; `Fo o` passes.
fn classify_name(value: &str) -> LineClass {
    let accepted = !value.is_empty()
        && NAME_CHARSET_REGEX.is_match(value)
        && value.chars().next().is_some_and(char::is_uppercase);

    if accepted {
        LineClass::Name(value.to_string())
    } else {
        LineClass::Invalid(InvalidDirective::Name {
            value: value.to_string(),
        })
    }
}

/// A tag value is trimmed, then one layer of surrounding double quotes is
/// stripped (prefix and suffix independently). The stored value is not
/// re-trimmed, so quoting preserves padding. Values with an interior ASCII
/// space are rejected.
fn classify_tag(kind: &str, raw_value: &str) -> LineClass {
    let trimmed = raw_value.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);

    if unquoted.trim().contains(' ') {
        LineClass::Invalid(InvalidDirective::Tag {
            kind: kind.to_string(),
            value: unquoted.to_string(),
        })
    } else {
        LineClass::Tag(Tag::new(kind, unquoted))
    }
}
