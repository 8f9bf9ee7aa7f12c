//! CORS layer construction.

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use tower_http::cors::CorsLayer;

use crate::config::AdminConfig;

/// Build the CORS layer from configuration.
///
/// With `FRONTEND_URL` set, only that origin is allowed and credentials are
/// permitted. Without it the layer is fully permissive (wildcard origin, no
/// credentials - browsers refuse the combination anyway).
#[must_use]
pub fn cors_layer(config: &AdminConfig) -> CorsLayer {
    let Some(origin) = config.frontend_url.as_deref() else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => {
            tracing::warn!(
                frontend_url = %origin,
                "FRONTEND_URL is not a valid header value; falling back to permissive CORS"
            );
            CorsLayer::permissive()
        }
    }
}
