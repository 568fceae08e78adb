//! Fieldgate - document field extraction gateway.
//!
//! A thin HTTP gateway that forwards document URLs to a cloud
//! document-intelligence service and relays the extracted fields.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if fieldgate::cli::is_verbose() {
        "fieldgate=info"
    } else {
        "fieldgate=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    fieldgate::cli::run().await
}
