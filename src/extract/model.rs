//! Recursive model building.
//!
//! One model is built per schema message. Fields enter the model's map only
//! when extraction found at least one tag for them; the map key is the
//! override name when a rename happened, the original name otherwise.
//! Nested messages are built recursively and retained only when they carry
//! fields of their own or non-empty nested models, so empty subtrees are
//! pruned at every level.

use crate::descriptor::{Field, Model};
use crate::diagnostics::Diagnostic;
use crate::schema;

impl Model {
    /// Build the model for one message, extracting every field in
    /// declaration order and recursing into nested messages.
    pub(crate) fn build(
        message: &mut schema::Message,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut model = Model::new(message.name.clone());

        for schema_field in &mut message.fields {
            let field = Field::extract(schema_field, &model.name, diagnostics);
            if !field.tags.is_empty() {
                model.fields.insert(field.key().to_string(), field);
            }
        }

        for nested_message in &mut message.messages {
            let nested = Model::build(nested_message, diagnostics);
            if !nested.fields.is_empty() || !nested.models.is_empty() {
                model.models.insert(nested.name.clone(), nested);
            }
        }

        model
    }
}
