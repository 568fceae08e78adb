//! Long-running analyze operation types.
//!
//! Submitting a document returns an operation URL that must be polled
//! until the service reports a terminal state.

use serde::Deserialize;

use super::DocIntelError;
use crate::models::FieldSet;

/// Handle for an in-flight analysis operation.
#[derive(Debug, Clone)]
pub struct AnalyzeOperation {
    /// Absolute URL to poll for operation status.
    pub(crate) operation_url: String,
}

impl AnalyzeOperation {
    pub fn new(operation_url: String) -> Self {
        Self { operation_url }
    }

    pub fn url(&self) -> &str {
        &self.operation_url
    }
}

/// Status of an analyze operation as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

impl OperationStatus {
    /// Whether the operation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Succeeded | OperationStatus::Failed)
    }
}

/// One poll response from the operation URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationState {
    pub status: OperationStatus,
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResult>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// The result envelope of a succeeded operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    #[serde(default)]
    pub documents: Vec<AnalyzedDocument>,
}

impl AnalyzeResult {
    /// Extract the field set of the first analyzed document.
    ///
    /// The service may legitimately return zero documents (e.g. the input
    /// was readable but matched nothing); that is a distinct failure from
    /// transport or processing errors.
    pub fn into_first_document_fields(self) -> Result<FieldSet, DocIntelError> {
        self.documents
            .into_iter()
            .next()
            .map(|doc| doc.fields)
            .ok_or(DocIntelError::EmptyResult)
    }
}

/// A single analyzed document within the result envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedDocument {
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub fields: FieldSet,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Error object reported by the service for a failed operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

impl ServiceError {
    /// Flatten code and message into one display string.
    pub fn to_message(&self) -> String {
        match &self.code {
            Some(code) => format!("{}: {}", code, self.message),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_running() {
        let state: OperationState =
            serde_json::from_str(r#"{"status": "running", "createdDateTime": "2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(state.status, OperationStatus::Running);
        assert!(!state.status.is_terminal());
        assert!(state.analyze_result.is_none());
    }

    #[test]
    fn test_deserialize_succeeded_with_fields() {
        let body = r#"{
            "status": "succeeded",
            "analyzeResult": {
                "apiVersion": "2024-11-30",
                "documents": [{
                    "docType": "invoice",
                    "confidence": 0.97,
                    "fields": {
                        "InvoiceId": {"kind": "string", "value": "INV-100", "confidence": 0.971}
                    }
                }]
            }
        }"#;
        let state: OperationState = serde_json::from_str(body).unwrap();
        assert_eq!(state.status, OperationStatus::Succeeded);

        let fields = state
            .analyze_result
            .unwrap()
            .into_first_document_fields()
            .unwrap();
        assert_eq!(fields["InvoiceId"]["value"], "INV-100");
    }

    #[test]
    fn test_deserialize_failed_with_error() {
        let body = r#"{
            "status": "failed",
            "error": {"code": "InvalidRequest", "message": "Could not download the file"}
        }"#;
        let state: OperationState = serde_json::from_str(body).unwrap();
        assert_eq!(state.status, OperationStatus::Failed);
        assert!(state.status.is_terminal());
        assert_eq!(
            state.error.unwrap().to_message(),
            "InvalidRequest: Could not download the file"
        );
    }

    #[test]
    fn test_empty_documents_is_empty_result() {
        let result = AnalyzeResult { documents: vec![] };
        assert!(matches!(
            result.into_first_document_fields(),
            Err(DocIntelError::EmptyResult)
        ));
    }

    #[test]
    fn test_first_document_wins() {
        let body = r#"{
            "documents": [
                {"fields": {"Total": {"kind": "number", "value": 1}}},
                {"fields": {"Total": {"kind": "number", "value": 2}}}
            ]
        }"#;
        let result: AnalyzeResult = serde_json::from_str(body).unwrap();
        let fields = result.into_first_document_fields().unwrap();
        assert_eq!(fields["Total"]["value"], 1);
    }
}
