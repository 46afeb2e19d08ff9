//! Parsed schema tree handed over by the compiler front end.
//!
//! These types mirror the shape a protoc front end produces for one source
//! file: an ordered list of messages, each with ordered fields and nested
//! messages, where every field carries its raw doc-comment text in three
//! locations (detached leading blocks, the leading block, the trailing
//! block). The extraction pass owns the tree for the duration of one walk
//! and mutates it in place: identifier slots are rewritten and comment
//! slots are overwritten with their cleaned text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One block of comment text, line breaks preserved as authored.
///
/// Lines may still carry a leading `*` continuation marker typical of
/// block-comment bodies; normalization happens during extraction, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comments(String);

impl Comments {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Comments {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Comments {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Comments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three comment locations attached to one schema field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSet {
    /// Comment blocks separated from the field by blank lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leading_detached: Vec<Comments>,

    /// The comment block directly above the field.
    #[serde(default, skip_serializing_if = "Comments::is_empty")]
    pub leading: Comments,

    /// The comment on the same line as the field.
    #[serde(default, skip_serializing_if = "Comments::is_empty")]
    pub trailing: Comments,
}

impl CommentSet {
    pub fn is_empty(&self) -> bool {
        self.leading_detached.is_empty() && self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// One schema field with its mutable identifier slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name as declared in the schema source.
    pub name: String,

    /// Generated identifier assigned by the front end, rewritten when a
    /// name directive overrides it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub go_name: String,

    /// Qualified generated identifier (`Parent_Name`), rewritten together
    /// with `go_name`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub go_ident: String,

    #[serde(default, skip_serializing_if = "CommentSet::is_empty")]
    pub comments: CommentSet,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One schema message: ordered fields plus nested messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Generated identifier of the message. For nested messages the front
    /// end already qualifies it with the outer message names.
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One source unit: a schema file with its generated-code path metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    #[serde(default)]
    pub proto_path: String,

    #[serde(default)]
    pub go_path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}
