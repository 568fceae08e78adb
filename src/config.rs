//! Configuration management for Fieldgate.

use crate::docintel::DocIntelConfig;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Runtime settings for the gateway.
///
/// Everything is sourced from the environment (with `.env` support via
/// dotenvy in `main`); there is no config file.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Document-intelligence service configuration.
    pub docintel: DocIntelConfig,
}

impl Settings {
    /// Load settings from the environment.
    pub fn load() -> Self {
        Self {
            docintel: DocIntelConfig::default(),
        }
    }
}
