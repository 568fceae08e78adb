//! Web server exposing the document analysis routes.
//!
//! Three POST routes forward document URLs to the document-intelligence
//! service and relay the extracted field sets:
//! - `/analyze-invoice`
//! - `/analyze-receipt`
//! - `/analyze-business-card`

mod handlers;
mod routes;

pub use handlers::AnalyzeRequest;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::{AnalysisService, DocumentAnalyzer};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn DocumentAnalyzer>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            analyzer: AnalysisService::shared(settings.docintel.clone()),
        }
    }

    /// Build state around a specific analyzer (used by tests).
    pub fn with_analyzer(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::docintel::DocIntelError;
    use crate::models::{DocumentKind, FieldSet};

    /// Analyzer stub returning a canned field set per document kind.
    struct StubAnalyzer;

    #[async_trait]
    impl DocumentAnalyzer for StubAnalyzer {
        async fn analyze(
            &self,
            kind: DocumentKind,
            _url: &str,
        ) -> Result<FieldSet, DocIntelError> {
            let fields = json!({
                "DocKind": { "kind": "string", "value": kind.to_string(), "confidence": 0.99 }
            });
            match fields {
                serde_json::Value::Object(map) => Ok(map),
                _ => unreachable!(),
            }
        }
    }

    /// Analyzer stub that always fails with the given error.
    struct FailingAnalyzer(fn() -> DocIntelError);

    #[async_trait]
    impl DocumentAnalyzer for FailingAnalyzer {
        async fn analyze(
            &self,
            _kind: DocumentKind,
            _url: &str,
        ) -> Result<FieldSet, DocIntelError> {
            Err(self.0())
        }
    }

    fn test_app(analyzer: Arc<dyn DocumentAnalyzer>) -> axum::Router {
        create_router(AppState::with_analyzer(analyzer))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_field_is_bad_request() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(post_json("/analyze-invoice", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "url parameter is missing");
    }

    #[tokio::test]
    async fn test_empty_url_is_bad_request() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(post_json("/analyze-receipt", r#"{"url": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(post_json("/analyze-business-card", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_absent_body_is_bad_request() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/analyze-invoice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_success_relays_field_set() {
        let app = test_app(Arc::new(StubAnalyzer));

        let response = app
            .oneshot(post_json(
                "/analyze-invoice",
                r#"{"url": "https://example.com/invoice.pdf"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["DocKind"]["value"], "invoice");
        assert_eq!(json["DocKind"]["confidence"], 0.99);
    }

    #[tokio::test]
    async fn test_each_route_uses_its_own_kind() {
        for (uri, expected) in [
            ("/analyze-invoice", "invoice"),
            ("/analyze-receipt", "receipt"),
            ("/analyze-business-card", "business-card"),
        ] {
            let app = test_app(Arc::new(StubAnalyzer));
            let response = app
                .oneshot(post_json(uri, r#"{"url": "https://example.com/doc.pdf"}"#))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = body_string(response).await;
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["DocKind"]["value"], expected, "route {}", uri);
        }
    }

    #[tokio::test]
    async fn test_analyzer_error_is_plain_text_500() {
        let app = test_app(Arc::new(FailingAnalyzer(|| DocIntelError::Api {
            status: 401,
            message: "invalid subscription key".to_string(),
        })));

        let response = app
            .oneshot(post_json(
                "/analyze-receipt",
                r#"{"url": "https://example.com/receipt.png"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.starts_with("Error: "));
        assert!(body.contains("invalid subscription key"));
    }

    #[tokio::test]
    async fn test_empty_result_error_reaches_caller() {
        let app = test_app(Arc::new(FailingAnalyzer(|| DocIntelError::EmptyResult)));

        let response = app
            .oneshot(post_json(
                "/analyze-invoice",
                r#"{"url": "https://example.com/invoice.pdf"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert_eq!(body, "Error: expected at least one document in the result");
    }
}
