//! Prototag - comment-directive extraction for protobuf schemas
//!
//! Prototag scans the doc comments of protobuf message fields for a small
//! directive language, renames generated field identifiers, collects
//! per-field key/value tags, and strips the consumed directive lines from
//! the comment text that will be re-emitted. Two directive forms exist:
//!
//! - `@go.name=<value>` replaces the field's generated identifier (the
//!   qualified form `Parent_<value>` is kept consistent automatically)
//! - `@<kind>.tag=<value>` attaches a key/value tag to the field
//!
//! Malformed directive values degrade to plain documentation text with an
//! advisory warning; extraction itself never fails on comment content.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (JSON filter driver)
//! - `descriptor`: Extracted output types (tags, fields, models)
//! - `diagnostics`: Warnings for skipped directive values
//! - `extract`: The extraction engine (directive grammar, comment
//!   rewriting, recursive model building)
//! - `schema`: Input schema tree handed over by the compiler front end

pub mod cli;
pub mod descriptor;
pub mod diagnostics;
pub mod extract;
pub mod schema;
