//! Client for the cloud document-intelligence service.
//!
//! Implements the service's asynchronous analyze protocol: submitting a
//! document URL returns an operation location, which is polled until the
//! service reports a terminal state.

mod config;
mod operation;

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use config::DocIntelConfig;
pub use operation::{
    AnalyzeOperation, AnalyzeResult, AnalyzedDocument, OperationState, OperationStatus,
    ServiceError,
};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header carrying the operation URL on a successful submission.
const OPERATION_LOCATION_HEADER: &str = "Operation-Location";

/// Errors that can occur while talking to the document-intelligence service.
#[derive(Debug, Error)]
pub enum DocIntelError {
    /// Endpoint or API key missing from configuration
    #[error("document intelligence endpoint or API key is not configured")]
    NotConfigured,

    /// Failed to reach the service
    #[error("connection error: {0}")]
    Connection(String),

    /// Service returned a non-success HTTP status
    #[error("service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a service response
    #[error("failed to parse service response: {0}")]
    Parse(String),

    /// Submission accepted but no operation location returned
    #[error("service accepted the document but returned no operation location")]
    MissingOperationLocation,

    /// The analysis operation reached the failed state
    #[error("analysis failed: {0}")]
    OperationFailed(String),

    /// The analysis succeeded but produced no documents
    #[error("expected at least one document in the result")]
    EmptyResult,

    /// The operation did not reach a terminal state within the deadline
    #[error("analysis did not complete within {0} seconds")]
    PollTimeout(u64),
}

/// Client for the document-intelligence analyze API.
pub struct DocIntelClient {
    config: DocIntelConfig,
    client: Client,
}

impl DocIntelClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DocIntelConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Get the config.
    pub fn config(&self) -> &DocIntelConfig {
        &self.config
    }

    /// Submit a document URL for analysis under the given prebuilt model.
    ///
    /// Returns the operation handle to poll for completion.
    pub async fn begin_analyze(
        &self,
        model_id: &str,
        document_url: &str,
    ) -> Result<AnalyzeOperation, DocIntelError> {
        if !self.config.is_configured() {
            return Err(DocIntelError::NotConfigured);
        }

        let url = self.analyze_url(model_id);

        debug!("Submitting document to {} for analysis", model_id);
        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key())
            .json(&serde_json::json!({ "urlSource": document_url }))
            .send()
            .await
            .map_err(|e| DocIntelError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(DocIntelError::Api { status, message });
        }

        let operation_url = resp
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
            .ok_or(DocIntelError::MissingOperationLocation)?;

        Ok(AnalyzeOperation::new(operation_url))
    }

    /// Poll the operation once, returning its current state and the
    /// service's suggested delay before the next poll, if any.
    async fn poll_once(
        &self,
        operation: &AnalyzeOperation,
    ) -> Result<(OperationState, Option<Duration>), DocIntelError> {
        let resp = self
            .client
            .get(operation.url())
            .header(API_KEY_HEADER, self.api_key())
            .send()
            .await
            .map_err(|e| DocIntelError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(DocIntelError::Api { status, message });
        }

        let retry_after = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);

        let state: OperationState = resp
            .json()
            .await
            .map_err(|e| DocIntelError::Parse(e.to_string()))?;

        Ok((state, retry_after))
    }

    /// Poll the operation until it reaches a terminal state.
    ///
    /// Polls at the configured interval (deferring to the service's
    /// `Retry-After` hint when present) until the operation succeeds,
    /// fails, or the overall deadline elapses. A submitted job is never
    /// resubmitted.
    pub async fn wait_for_completion(
        &self,
        operation: &AnalyzeOperation,
    ) -> Result<AnalyzeResult, DocIntelError> {
        let interval = Duration::from_millis(self.config.poll_interval_ms);
        let deadline = tokio::time::Instant::now()
            + Duration::from_secs(self.config.poll_timeout_secs);

        loop {
            let (state, retry_after) = self.poll_once(operation).await?;

            match state.status {
                OperationStatus::Succeeded => {
                    info!("Analysis operation succeeded");
                    return state.analyze_result.ok_or_else(|| {
                        DocIntelError::Parse("succeeded operation carried no result".to_string())
                    });
                }
                OperationStatus::Failed => {
                    let message = state
                        .error
                        .map(|e| e.to_message())
                        .unwrap_or_else(|| "analysis failed".to_string());
                    warn!("Analysis operation failed: {}", message);
                    return Err(DocIntelError::OperationFailed(message));
                }
                OperationStatus::NotStarted | OperationStatus::Running => {
                    let delay = retry_after.unwrap_or(interval);
                    if tokio::time::Instant::now() + delay > deadline {
                        return Err(DocIntelError::PollTimeout(self.config.poll_timeout_secs));
                    }
                    debug!("Operation still {:?}, polling again", state.status);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Build the analyze submission URL for a prebuilt model.
    fn analyze_url(&self, model_id: &str) -> String {
        format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            model_id,
            self.config.api_version
        )
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }
}
