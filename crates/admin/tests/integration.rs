//! Integration tests driving the full admin router in-process.
//!
//! Each test builds an isolated `AppState` (freshly seeded store, temp upload
//! directory) and sends requests through the production middleware stack via
//! `tower::ServiceExt::oneshot` - no listening socket involved.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use botshop_admin::config::AdminConfig;
use botshop_admin::routes;
use botshop_admin::services::upload::MAX_UPLOAD_BYTES;
use botshop_admin::state::AppState;

const BOUNDARY: &str = "----botshop-test-boundary";

/// Build the app over a fresh state. The `TempDir` keeps the upload
/// directory alive for the duration of the test.
fn app() -> (axum::Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = AdminConfig {
        upload_dir: dir.path().to_path_buf(),
        ..AdminConfig::default()
    };
    (routes::app(AppState::new(config)), dir)
}

/// Send a request and return (status, body text).
async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// Send a request and parse the response body as JSON.
async fn send_json(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, text) = send(app, request).await;
    let value = serde_json::from_str(&text).unwrap_or_else(|e| panic!("bad JSON ({e}): {text}"));
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn snapshot(app: &axum::Router) -> Value {
    let (status, value) = send_json(app, get("/api/dashboard-data")).await;
    assert_eq!(status, StatusCode::OK);
    value
}

/// Encode `multipart/form-data` with the given text fields and optional
/// `image` file part.
fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn product_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "X"),
        ("price", "1.00"),
        ("category", "Supplements"),
        ("stock", "1"),
        ("description", "d"),
    ]
}

#[tokio::test]
async fn seeded_snapshot_matches_fixture_counts() {
    let (app, _dir) = app();
    let data = snapshot(&app).await;

    let counts = [
        ("bots", 1),
        ("products", 2),
        ("users", 2),
        ("orders", 1),
        ("categories", 2),
        ("paymentMethods", 1),
        ("shippingOptions", 2),
        ("broadcasts", 0),
        ("settings", 3),
        ("contacts", 1),
    ];
    for (key, expected) in counts {
        let collection = data[key].as_array().unwrap_or_else(|| panic!("{key} missing"));
        assert_eq!(collection.len(), expected, "collection {key}");
    }
}

#[tokio::test]
async fn snapshot_reads_are_idempotent() {
    let (app, _dir) = app();
    let first = snapshot(&app).await;
    let second = snapshot(&app).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_product_without_image() {
    let (app, _dir) = app();

    let request = multipart_request("POST", "/api/products", multipart_body(&product_fields(), None));
    let (status, created) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "X");
    assert_eq!(created["price"], "1.00");
    assert_eq!(created["botId"], "1");
    assert!(created["image"].is_null());

    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_ne!(id, "1");
    assert_ne!(id, "2");

    let data = snapshot(&app).await;
    let products = data["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().any(|p| p["id"] == *id));
}

#[tokio::test]
async fn uploaded_image_is_served_back() {
    let (app, _dir) = app();
    let image: &[u8] = b"png bytes, not a real image";

    let request = multipart_request(
        "POST",
        "/api/products",
        multipart_body(&product_fields(), Some(("photo.png", image))),
    );
    let (status, created) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let path = created["image"].as_str().unwrap();
    assert!(path.starts_with("/uploads/image-"), "path: {path}");
    assert!(path.ends_with(".png"), "path: {path}");

    let (status, body) = send(&app, get(path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_bytes(), image);
}

#[tokio::test]
async fn update_product_merges_only_sent_fields() {
    let (app, _dir) = app();

    let request = multipart_request(
        "PUT",
        "/api/products/1",
        multipart_body(&[("stock", "7")], None),
    );
    let (status, updated) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stock"], 7);
    // Fields not sent are preserved, including the stored image path.
    assert_eq!(updated["name"], "Whey Protein Isolate");
    assert_eq!(updated["image"], "/uploads/whey-protein.jpg");
}

#[tokio::test]
async fn update_unknown_product_returns_404() {
    let (app, _dir) = app();

    let request = multipart_request(
        "PUT",
        "/api/products/999",
        multipart_body(&[("name", "ghost")], None),
    );
    let (status, body) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
    assert_eq!(snapshot(&app).await["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_acknowledges_unknown_ids() {
    let (app, _dir) = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/999")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(snapshot(&app).await["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_removes_existing_product() {
    let (app, _dir) = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let products = snapshot(&app).await["products"].clone();
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert!(products.iter().all(|p| p["id"] != "1"));
}

#[tokio::test]
async fn broadcast_counts_current_users() {
    let (app, _dir) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/broadcasts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"Hello"}"#))
        .unwrap();
    let (status, created) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "Hello");
    assert_eq!(created["recipients"], 2);
    assert_eq!(created["status"], "sent");

    let broadcasts = snapshot(&app).await["broadcasts"].clone();
    assert_eq!(broadcasts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_store_mutation() {
    let (app, dir) = app();

    let oversized = vec![0_u8; MAX_UPLOAD_BYTES + 1];
    let request = multipart_request(
        "POST",
        "/api/products",
        multipart_body(&product_fields(), Some(("big.bin", &oversized))),
    );
    let (status, body) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File too large");
    assert_eq!(snapshot(&app).await["products"].as_array().unwrap().len(), 2);
    // Nothing was written to the upload directory either.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn root_redirects_to_admin() {
    let (app, _dir) = app();
    let resp = app.clone().oneshot(get("/")).await.unwrap();

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn admin_page_serves_document() {
    let (app, _dir) = app();
    let (status, text) = send(&app, get("/admin")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("<!DOCTYPE html>"));
    assert!(text.contains("Admin"));
}

#[tokio::test]
async fn unknown_routes_return_json_404() {
    let (app, _dir) = app();

    for uri in ["/nope", "/api/nope"] {
        let (status, body) = send_json(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
        assert_eq!(body["error"], "Route not found", "uri {uri}");
    }
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _dir) = app();
    let (status, body) = send_json(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn api_quota_throttles_after_burst() {
    let (app, _dir) = app();

    // The whole window quota is available as a burst; the request after it
    // is throttled.
    for _ in 0..100 {
        let (status, _) = send(&app, get("/api/dashboard-data")).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(&app, get("/api/dashboard-data")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}
