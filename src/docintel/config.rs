//! Document-intelligence client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the document-intelligence client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocIntelConfig {
    /// Service endpoint base URL, e.g. `https://myresource.cognitiveservices.azure.com`
    #[serde(default)]
    pub endpoint: String,
    /// API key for the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// REST API version sent on every analyze request
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Delay between status polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Overall deadline for an analysis to reach a terminal state, in seconds
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_api_version() -> String {
    "2024-11-30".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_poll_timeout_secs() -> u64 {
    120
}

impl Default for DocIntelConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl DocIntelConfig {
    /// Base default without env overrides (used internally to avoid recursion).
    fn base_default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: None,
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `DOCINTEL_ENDPOINT`: service endpoint base URL
    /// - `DOCINTEL_API_KEY`: API key
    /// - `DOCINTEL_API_VERSION`: REST API version
    /// - `DOCINTEL_TIMEOUT_SECS`: per-request HTTP timeout
    /// - `DOCINTEL_POLL_INTERVAL_MS`: delay between status polls
    /// - `DOCINTEL_POLL_TIMEOUT_SECS`: overall analysis deadline
    ///
    /// `AZURE_FORM_RECOGNIZER_ENDPOINT` and `AZURE_FORM_RECOGNIZER_KEY` are
    /// accepted as fallbacks when the `DOCINTEL_*` variables are unset.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("DOCINTEL_ENDPOINT") {
            self.endpoint = val;
        } else if let Ok(val) = std::env::var("AZURE_FORM_RECOGNIZER_ENDPOINT") {
            self.endpoint = val;
        }

        if let Ok(val) = std::env::var("DOCINTEL_API_KEY") {
            self.api_key = Some(val);
        } else if let Ok(val) = std::env::var("AZURE_FORM_RECOGNIZER_KEY") {
            self.api_key = Some(val);
        }

        if let Ok(val) = std::env::var("DOCINTEL_API_VERSION") {
            self.api_version = val;
        }
        if let Ok(val) = std::env::var("DOCINTEL_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.request_timeout_secs = n;
            }
        }
        if let Ok(val) = std::env::var("DOCINTEL_POLL_INTERVAL_MS") {
            if let Ok(n) = val.parse() {
                self.poll_interval_ms = n;
            }
        }
        if let Ok(val) = std::env::var("DOCINTEL_POLL_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.poll_timeout_secs = n;
            }
        }
        self
    }

    /// Whether both endpoint and key are present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }
}
