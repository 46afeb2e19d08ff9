//! Extraction engine: walks one schema tree and applies comment directives.
//!
//! The walk is a single-threaded, synchronous pass over a mutably borrowed
//! [`SourceFile`](crate::schema::SourceFile). Control flow, leaf-first:
//!
//! - `directive`: classifies one normalized comment line
//! - `comments`: rewrites one comment block, dropping consumed lines
//! - `field`: rewrites a field's blocks and applies its rename
//! - `model`: builds one model per message, pruning empty subtrees
//! - [`extract_file`]: drives the walk and flattens models into the
//!   per-source-unit descriptor
//!
//! Malformed directive values never fail the walk; they come back as
//! [`Diagnostic`] values next to the descriptor.

mod comments;
mod directive;
mod field;
mod model;

use crate::descriptor::{FileDescriptor, Model};
use crate::diagnostics::Diagnostic;
use crate::schema::SourceFile;

/// Result of one source-unit walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Every model with at least one customized field, indexed flat.
    pub descriptor: FileDescriptor,

    /// Skipped directives in traversal order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract directives from every message of one source file.
///
/// The schema tree is rewritten in place: renamed identifiers and cleaned
/// comment text end up back in `file`, while the extracted tag metadata is
/// returned as the descriptor.
pub fn extract_file(file: &mut SourceFile) -> Extraction {
    let mut diagnostics = Vec::new();
    let mut descriptor = FileDescriptor::new(file.proto_path.clone(), file.go_path.clone());

    for message in &mut file.messages {
        let model = Model::build(message, &mut diagnostics);
        descriptor.add(model);
    }

    Extraction {
        descriptor,
        diagnostics,
    }
}

impl FileDescriptor {
    /// Flatten one model tree into the descriptor: the model itself is
    /// added only when it has fields, nested models are added recursively
    /// regardless of whether their parent was.
    fn add(&mut self, mut model: Model) {
        let nested = std::mem::take(&mut model.models);

        if !model.fields.is_empty() {
            self.models.insert(model.name.clone(), model);
        }

        for child in nested.into_values() {
            self.add(child);
        }
    }
}
