//! HTTP route handlers and router assembly.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//! GET    /                        - Redirect to /admin
//! GET    /admin                   - Admin dashboard document
//!
//! # API (rate limited)
//! GET    /api/dashboard-data      - Full store snapshot
//! POST   /api/products            - Create product (multipart, optional image)
//! PUT    /api/products/{id}       - Update product (multipart, optional image)
//! DELETE /api/products/{id}       - Delete product
//! POST   /api/broadcasts          - Record broadcast
//!
//! # Static
//! GET    /uploads/{filename}      - Uploaded file bytes
//! ```
//!
//! Unmatched routes return a JSON 404; handler panics are converted to the
//! generic JSON 500 by the catch-panic layer.

pub mod broadcasts;
pub mod dashboard;
pub mod pages;
pub mod products;

use std::any::Any;

use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::http::{StatusCode, header};
use axum::{
    Json, Router,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use http_body_util::Full;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{api_rate_limiter, cors_layer, security_headers_middleware};
use crate::state::AppState;

/// Request body cap: 10 MiB (the legacy JSON/urlencoded limit).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard-data", get(dashboard::snapshot))
        .route("/products", post(products::create))
        .route("/products/{id}", put(products::update).delete(products::remove))
        .route("/broadcasts", post(broadcasts::create))
        .layer(api_rate_limiter())
}

/// Build the full application router over the given state.
///
/// Everything except the Sentry layers lives here so tests can drive the
/// exact production middleware stack in-process.
pub fn app(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                status = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
            )
        })
        .on_response(
            |response: &axum::http::Response<_>, latency: std::time::Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                span.record("latency_ms", latency.as_millis() as u64);
                DefaultOnResponse::default().on_response(response, latency, span);
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        .nest("/api", api_routes())
        .nest_service("/uploads", ServeDir::new(state.config().upload_dir()))
        .fallback(not_found)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(state.config()))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .with_state(state)
}

/// Health check response body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// Liveness health check endpoint.
///
/// Reports healthy whenever the process is serving; there are no external
/// dependencies to probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

/// JSON 404 for unmatched routes.
async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_owned())
}

/// Convert a handler panic into the generic JSON 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %details, "handler panicked");

    let body = serde_json::json!({ "error": AppError::GENERIC_SERVER_ERROR }).to_string();
    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static panic response is valid")
}
