//! Service layer for Fieldgate business logic.
//!
//! Domain logic separated from HTTP concerns, usable by the CLI, the web
//! server, or other interfaces.

pub mod analyze;

pub use analyze::{AnalysisService, DocumentAnalyzer};
