//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod analyze;
mod serve;

use clap::{Parser, Subcommand};

use crate::config::{Settings, DEFAULT_BIND};
use crate::models::DocumentKind;

#[derive(Parser)]
#[command(name = "fieldgate")]
#[command(about = "Document field extraction gateway")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: String,
    },

    /// Analyze a single document URL and print the extracted fields
    Analyze {
        /// Document kind to analyze as
        #[arg(value_enum)]
        kind: DocumentKind,
        /// URL of the document to analyze
        url: String,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Analyze { kind, url } => analyze::cmd_analyze(&settings, kind, &url).await,
    }
}
