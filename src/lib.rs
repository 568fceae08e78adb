//! Fieldgate - document field extraction gateway.
//!
//! Relays invoice, receipt, and business card documents to a cloud
//! document-intelligence service and returns the extracted field sets.

pub mod cli;
pub mod config;
pub mod docintel;
pub mod models;
pub mod server;
pub mod services;
