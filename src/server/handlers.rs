//! HTTP request handlers for the analysis routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;

use super::AppState;
use crate::models::DocumentKind;

/// Request body for the analysis routes.
///
/// The URL is optional at the parsing layer so that an absent field, an
/// empty body, and a malformed body all surface as the same validation
/// failure.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Analyze an invoice document.
pub async fn analyze_invoice(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    run_analysis(state, DocumentKind::Invoice, body).await
}

/// Analyze a receipt document.
pub async fn analyze_receipt(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    run_analysis(state, DocumentKind::Receipt, body).await
}

/// Analyze a business card document.
pub async fn analyze_business_card(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    run_analysis(state, DocumentKind::BusinessCard, body).await
}

/// Shared dispatch: validate the URL, invoke the analyzer, translate the
/// outcome to a response.
///
/// Status mapping: 400 with a JSON message when the URL is missing or
/// empty (before any external call), 200 with the field set relayed
/// unmodified, 500 with a plain-text message for any analyzer failure.
async fn run_analysis(
    state: AppState,
    kind: DocumentKind,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    let url = body
        .and_then(|Json(request)| request.url)
        .filter(|url| !url.is_empty());

    let Some(url) = url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": "url parameter is missing" })),
        )
            .into_response();
    };

    match state.analyzer.analyze(kind, &url).await {
        Ok(fields) => (StatusCode::OK, Json(serde_json::Value::Object(fields))).into_response(),
        Err(e) => {
            error!("{} analysis failed: {}", kind, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}
