//! Data models for Fieldgate.

mod document;

pub use document::{DocumentKind, FieldSet};
