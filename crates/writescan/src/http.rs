//! HTTP API: `POST /analyze`.
//!
//! The body is parsed by hand rather than through axum's `Json` extractor so
//! that every failure (malformed JSON, wrong shapes, oversized bodies) comes
//! back in the same `{ "error": ..., "status": "error" }` envelope.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use writescan_core::{AnalysisError, AnalysisReport, analysis};

/// Slack added to the body limit for the JSON envelope around `text`.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Worst-case JSON expansion of one input byte (`\u0000`).
const JSON_ESCAPE_FACTOR: usize = 6;

/// Server-wide settings shared with every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiSettings {
    /// Maximum size of `text` in bytes. `None` disables the check.
    pub max_input_bytes: Option<usize>,
}

impl ApiSettings {
    fn body_limit(self) -> DefaultBodyLimit {
        match self.max_input_bytes {
            Some(max) => DefaultBodyLimit::max(
                max.saturating_mul(JSON_ESCAPE_FACTOR)
                    .saturating_add(BODY_OVERHEAD_BYTES),
            ),
            None => DefaultBodyLimit::disable(),
        }
    }
}

/// Errors returned by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `text` was missing, falsy, or blank.
    #[error("No text provided")]
    Validation,

    /// The request or its `text` exceeded the configured limit.
    #[error("{0}")]
    TooLarge(String),

    /// Anything else: malformed JSON, wrong types, task failures.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => Self::Validation,
            AnalysisError::InputTooLarge { .. } => Self::TooLarge(err.to_string()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge(rejection.body_text())
        } else {
            Self::Internal(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation => json!({ "error": self.to_string() }),
            Self::TooLarge(_) | Self::Internal(_) => {
                json!({ "error": self.to_string(), "status": "error" })
            }
        };
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %body["error"], "request failed");
        }
        (status, Json(body)).into_response()
    }
}

/// Successful response: the report fields plus `"status": "success"`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    report: AnalysisReport,
    status: &'static str,
}

/// Build the application router.
pub fn router(settings: ApiSettings) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/api/analyze", post(analyze))
        .layer(settings.body_limit())
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(settings))
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(host: &str, port: u16, settings: ApiSettings) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;

    info!(%addr, max_input_bytes = ?settings.max_input_bytes, "HTTP server listening");

    axum::serve(listener, router(settings))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}

#[instrument(skip_all)]
async fn analyze(
    State(settings): State<Arc<ApiSettings>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = extract_text(&body?)?;
    let limit = settings.max_input_bytes;
    debug!(text_len = text.len(), "analyzing request text");

    let report = tokio::task::spawn_blocking(move || {
        analysis::analyze_text_with_limit(&text, limit)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(AnalyzeResponse {
        report,
        status: "success",
    }))
}

/// Pull the `text` field out of a request body.
///
/// Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) count as missing.
/// Any other non-string value is an internal error.
fn extract_text(body: &[u8]) -> Result<String, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ApiError::Internal(format!(
                "request body must be a JSON object, got {}",
                kind(&other)
            )));
        }
    };

    match fields.remove("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        None => Err(ApiError::Validation),
        Some(value) if is_falsy(&value) => Err(ApiError::Validation),
        Some(value) => Err(ApiError::Internal(format!(
            "text must be a string, got {}",
            kind(&value)
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis(),
        "request handled"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(ApiSettings {
            max_input_bytes: Some(writescan_core::DEFAULT_MAX_INPUT_BYTES),
        })
    }

    async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn analyze_returns_report() {
        let body = json!({ "text": "The cat sat. The dog ran fast and happy." }).to_string();
        let (status, json) = post_json(app(), "/analyze", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["basic_stats"]["word_count"], 9);
        assert_eq!(json["basic_stats"]["sentence_count"], 2);
        assert_eq!(json["basic_stats"]["paragraph_count"], 1);
        assert_eq!(json["ai_analysis"]["tone_and_style"], "Balanced and neutral");
    }

    #[tokio::test]
    async fn api_prefixed_route_is_served() {
        let body = json!({ "text": "Hello there." }).to_string();
        let (status, json) = post_json(app(), "/api/analyze", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
    }

    #[tokio::test]
    async fn missing_or_falsy_text_is_bad_request() {
        for body in [
            r#"{}"#,
            r#"{"text": ""}"#,
            r#"{"text": null}"#,
            r#"{"text": false}"#,
            r#"{"text": 0}"#,
            r#"{"text": []}"#,
            r#"{"text": {}}"#,
            r#"{"text": "   \n\t "}"#,
        ] {
            let (status, json) = post_json(app(), "/analyze", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json, json!({ "error": "No text provided" }), "body: {body}");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_internal_error() {
        let (status, json) = post_json(app(), "/analyze", "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["status"], "error");
        assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn wrong_shapes_are_internal_errors() {
        for body in [r#"["text"]"#, r#"{"text": 42}"#, r#"{"text": ["a"]}"#] {
            let (status, json) = post_json(app(), "/analyze", body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
            assert_eq!(json["status"], "error", "body: {body}");
        }
    }

    #[tokio::test]
    async fn oversized_text_is_rejected() {
        let app = router(ApiSettings {
            max_input_bytes: Some(10),
        });
        let body = json!({ "text": "hello world and more" }).to_string();
        let (status, json) = post_json(app, "/analyze", body).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["status"], "error");
        assert_eq!(
            json["error"],
            "input too large: 20 bytes (limit: 10 bytes)"
        );
    }

    #[tokio::test]
    async fn blank_text_over_limit_is_bad_request() {
        let app = router(ApiSettings {
            max_input_bytes: Some(10),
        });
        let body = json!({ "text": " ".repeat(100) }).to_string();
        let (status, json) = post_json(app, "/analyze", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "No text provided" }));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let app = router(ApiSettings {
            max_input_bytes: Some(1),
        });
        let body = json!({ "text": "a".repeat(100 * 1024) }).to_string();
        let (status, json) = post_json(app, "/analyze", body).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn disabled_limit_accepts_large_text() {
        let app = router(ApiSettings::default());
        let body = json!({ "text": "word ".repeat(20_000) }).to_string();
        let (status, json) = post_json(app, "/analyze", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["basic_stats"]["word_count"], 20_000);
    }

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(0.0)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!(" ")));
        assert!(!is_falsy(&json!([0])));
    }
}
