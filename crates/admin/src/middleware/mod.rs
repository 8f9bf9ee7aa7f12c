//! HTTP middleware stack for the admin panel.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, applied in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Catch-panic (generic 500 body for handler panics)
//! 4. Body size limit (10 MiB, the legacy JSON/urlencoded cap)
//! 5. Compression
//! 6. CORS (origin from `FRONTEND_URL`, permissive otherwise)
//! 7. Security headers
//! 8. Rate limiting (governor, `/api` only)

pub mod cors;
pub mod rate_limit;
pub mod security_headers;

pub use cors::cors_layer;
pub use rate_limit::api_rate_limiter;
pub use security_headers::security_headers_middleware;
