//! Extracted field metadata, one descriptor per source unit.
//!
//! Everything in this module is output data: the extraction walk fills these
//! types and downstream templating consumes them. Maps are `BTreeMap` so
//! iteration and serialization order are deterministic. Tag order, by
//! contrast, is meaningful and preserved as discovered, since consumers may
//! emit tags in declaration order.

use std::collections::BTreeMap;

use serde::Serialize;

/// One key/value metadata pair attached to a field via a tag directive.
///
/// Kind and value are opaque here; duplicates of the same kind are allowed
/// and kept in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub kind: String,
    pub value: String,
}

impl Tag {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Extraction result for one schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name as declared in the schema source.
    pub name: String,

    /// Validated replacement identifier, if a name directive supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_name: Option<String>,

    /// Tags in discovery order.
    pub tags: Vec<Tag>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            go_name: None,
            tags: Vec::new(),
        }
    }

    /// Key under which this field is externally visible: the override name
    /// when present, the original name otherwise.
    pub fn key(&self) -> &str {
        self.go_name.as_deref().unwrap_or(&self.name)
    }
}

/// Extraction result for one schema message.
///
/// `fields` holds only customized fields (at least one tag each), keyed by
/// [`Field::key`]. Nested models live in `models` during the walk and are
/// flattened away before the descriptor is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    pub fields: BTreeMap<String, Field>,

    #[serde(skip)]
    pub(crate) models: BTreeMap<String, Model>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            models: BTreeMap::new(),
        }
    }
}

/// Per-source-unit aggregate: every model that carries at least one
/// customized field, indexed flat by model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub proto_path: String,
    pub go_path: String,
    pub models: BTreeMap<String, Model>,
}

impl FileDescriptor {
    pub fn new(proto_path: impl Into<String>, go_path: impl Into<String>) -> Self {
        Self {
            proto_path: proto_path.into(),
            go_path: go_path.into(),
            models: BTreeMap::new(),
        }
    }
}
