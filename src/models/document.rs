//! Document kinds and extracted field payloads.

use std::fmt;

/// Extracted field set for a single analyzed document.
///
/// The shape of each field (kind, value, confidence, bounding regions,
/// spans) is defined entirely by the document-intelligence service; the
/// payload is relayed to callers unmodified.
pub type FieldSet = serde_json::Map<String, serde_json::Value>;

/// The kinds of document the gateway can analyze.
///
/// Each kind maps to one of the service's prebuilt analysis models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DocumentKind {
    /// Invoices (prebuilt-invoice model)
    Invoice,
    /// Sales receipts (prebuilt-receipt model)
    Receipt,
    /// Business cards (prebuilt-businessCard model)
    BusinessCard,
}

impl DocumentKind {
    /// The prebuilt model identifier understood by the service.
    pub fn model_id(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "prebuilt-invoice",
            DocumentKind::Receipt => "prebuilt-receipt",
            DocumentKind::BusinessCard => "prebuilt-businessCard",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Receipt => "receipt",
            DocumentKind::BusinessCard => "business-card",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ids() {
        assert_eq!(DocumentKind::Invoice.model_id(), "prebuilt-invoice");
        assert_eq!(DocumentKind::Receipt.model_id(), "prebuilt-receipt");
        assert_eq!(
            DocumentKind::BusinessCard.model_id(),
            "prebuilt-businessCard"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentKind::BusinessCard.to_string(), "business-card");
    }
}
