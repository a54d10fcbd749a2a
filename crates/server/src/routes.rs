//! Route handlers for the analysis API.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::state::AppState;

/// Error message returned for any failed analysis, regardless of cause.
const SCRAPE_FAILED_MESSAGE: &str = "Failed to scrape or analyze article";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// `POST /analyze` — run the full pipeline on one URL.
///
/// Success and failure both answer 200: the upstream contract distinguishes
/// them only by body shape (a full report vs `{"url", "error"}`), and
/// existing clients depend on that.
pub async fn analyze(State(state): State<AppState>, Json(req): Json<AnalyzeRequest>) -> Json<Value> {
    match state.analyzer.analyze_url(&req.url).await {
        Ok(report) => Json(report.to_json()),
        Err(e) => {
            tracing::warn!(url = %req.url, error = %e, "analysis failed");
            Json(json!({ "url": req.url, "error": SCRAPE_FAILED_MESSAGE }))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use newsprobe_core::{Analyzer, AnalyzerConfig};
    use tower::ServiceExt;

    use crate::create_router;
    use crate::state::AppState;

    fn test_app() -> axum::Router {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        create_router(AppState::new(analyzer))
    }

    async fn post_analyze(url: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"url": "{url}"}}"#)))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_connection_error_yields_error_record() {
        // Loopback port 1 refuses immediately, keeping the test offline.
        let (status, body) = post_analyze("http://127.0.0.1:1/article").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "http://127.0.0.1:1/article");
        assert_eq!(body["error"], "Failed to scrape or analyze article");
        assert!(body.get("headline").is_none());
        assert!(body.get("sentiment").is_none());
    }

    #[tokio::test]
    async fn test_missing_url_field_is_client_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_invalid_url_yields_error_record_not_failure() {
        let (status, body) = post_analyze("not a url").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "Failed to scrape or analyze article");
    }
}
