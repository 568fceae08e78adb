//! Document analysis service.
//!
//! Wraps the document-intelligence client behind the [`DocumentAnalyzer`]
//! seam so HTTP handlers and the CLI can share one implementation, and
//! tests can substitute their own.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::docintel::{DocIntelClient, DocIntelConfig, DocIntelError};
use crate::models::{DocumentKind, FieldSet};

/// Analyzes a document URL and yields the extracted field set.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Submit the URL under the kind's model, wait for the analysis to
    /// finish, and return the first document's fields.
    async fn analyze(&self, kind: DocumentKind, url: &str) -> Result<FieldSet, DocIntelError>;
}

/// The real analyzer, backed by the document-intelligence service.
pub struct AnalysisService {
    client: DocIntelClient,
}

impl AnalysisService {
    /// Create a new analysis service with the given client configuration.
    pub fn new(config: DocIntelConfig) -> Self {
        Self {
            client: DocIntelClient::new(config),
        }
    }

    /// Convenience constructor returning the trait object the server state
    /// carries.
    pub fn shared(config: DocIntelConfig) -> Arc<dyn DocumentAnalyzer> {
        Arc::new(Self::new(config))
    }

    /// Get the underlying client.
    pub fn client(&self) -> &DocIntelClient {
        &self.client
    }
}

#[async_trait]
impl DocumentAnalyzer for AnalysisService {
    async fn analyze(&self, kind: DocumentKind, url: &str) -> Result<FieldSet, DocIntelError> {
        info!("Analyzing {} document", kind);

        let operation = self.client.begin_analyze(kind.model_id(), url).await?;
        let result = self.client.wait_for_completion(&operation).await?;

        result.into_first_document_fields()
    }
}
