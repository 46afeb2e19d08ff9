//! Per-block comment rewriting.
//!
//! One comment block is scanned line by line: every line is normalized
//! (trimmed, one leading `*` continuation marker stripped, trimmed again)
//! and classified against the directive grammar. Consumed directive lines
//! disappear from the block; everything else is kept with its original,
//! unnormalized text. Blank lines are dropped outright.
//!
//! A scan carries no state across invocations. Accumulating tags and the
//! name override across a field's multiple blocks is the field extractor's
//! job, which is why the findings are returned per block instead of being
//! applied here.

use crate::descriptor::Tag;
use crate::schema::Comments;

use super::directive::{self, InvalidDirective, LineClass};

/// Findings of one pass over a single comment block.
#[derive(Debug, Default)]
pub(crate) struct BlockScan {
    /// The block with directive lines removed and blank lines dropped,
    /// remaining lines joined by line breaks in their original form.
    pub cleaned: Comments,

    /// Value of the last valid name directive in the block, if any.
    pub name_override: Option<String>,

    /// Valid tags in line order.
    pub tags: Vec<Tag>,

    /// Recognized directives whose values failed validation, in line order.
    pub invalid: Vec<InvalidDirective>,
}

/// Scan one comment block and produce its cleaned text plus any findings.
///
/// An empty block short-circuits to an empty scan.
pub(crate) fn rewrite(block: &Comments) -> BlockScan {
    let mut scan = BlockScan::default();
    if block.is_empty() {
        return scan;
    }

    let mut kept: Vec<&str> = Vec::new();
    for line in block.as_str().lines() {
        if line.is_empty() {
            continue;
        }

        match directive::classify(normalize(line)) {
            LineClass::Prose => kept.push(line),
            LineClass::Name(value) => scan.name_override = Some(value),
            LineClass::Tag(tag) => scan.tags.push(tag),
            LineClass::Invalid(invalid) => {
                scan.invalid.push(invalid);
                kept.push(line);
            }
        }
    }

    scan.cleaned = Comments::from(kept.join("\n"));
    scan
}

/// Trim a line and strip a single leading `*` continuation marker.
fn normalize(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_prefix('*').unwrap_or(trimmed).trim()
}
