//! Per-field extraction.
//!
//! A field's three comment locations are rewritten independently, in a
//! fixed order: every detached leading block, then the leading block, then
//! the trailing block. Each slot is overwritten in place with its cleaned
//! text. Tags accumulate across blocks in that order; for name overrides
//! the last valid directive wins. When an override was found the schema
//! field's generated identifier and its qualified identifier are rewritten.

use crate::descriptor::Field;
use crate::diagnostics::Diagnostic;
use crate::schema;

use super::comments::{self, BlockScan};

impl Field {
    /// Extract directives from one schema field, rewriting its comments and
    /// identifiers in place.
    pub(crate) fn extract(
        schema_field: &mut schema::Field,
        parent_name: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut field = Field::new(schema_field.name.clone());
        if schema_field.comments.is_empty() {
            return field;
        }

        for block in &mut schema_field.comments.leading_detached {
            let scan = comments::rewrite(block);
            field.absorb(scan, block, diagnostics);
        }

        let scan = comments::rewrite(&schema_field.comments.leading);
        field.absorb(scan, &mut schema_field.comments.leading, diagnostics);

        let scan = comments::rewrite(&schema_field.comments.trailing);
        field.absorb(scan, &mut schema_field.comments.trailing, diagnostics);

        if let Some(go_name) = &field.go_name {
            schema_field.go_name = go_name.clone();
            schema_field.go_ident = format!("{}_{}", parent_name, go_name);
        }

        field
    }

    /// Fold one block's findings into the field and overwrite the block
    /// with its cleaned text.
    fn absorb(
        &mut self,
        scan: BlockScan,
        block: &mut schema::Comments,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        *block = scan.cleaned;

        if let Some(value) = scan.name_override {
            self.go_name = Some(value);
        }
        self.tags.extend(scan.tags);

        for invalid in scan.invalid {
            diagnostics.push(invalid.into_diagnostic(&self.name));
        }
    }
}
