//! One-shot document analysis command.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::models::DocumentKind;
use crate::services::{AnalysisService, DocumentAnalyzer};

/// Analyze a single document URL and print the extracted fields as JSON.
pub async fn cmd_analyze(settings: &Settings, kind: DocumentKind, url: &str) -> anyhow::Result<()> {
    if !settings.docintel.is_configured() {
        anyhow::bail!(
            "document intelligence is not configured; set DOCINTEL_ENDPOINT and DOCINTEL_API_KEY"
        );
    }

    let service = AnalysisService::new(settings.docintel.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Analyzing {} at {}...", kind, url));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = service.analyze(kind, url).await;
    pb.finish_and_clear();

    match result {
        Ok(fields) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(fields))?
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Analysis failed: {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
