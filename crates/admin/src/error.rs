//! Unified error handling for the admin panel.
//!
//! Provides a single `AppError` type that every route handler returns.
//! Client-caused failures keep their message; anything unexpected collapses
//! to a generic 500 body with details kept server-side (tracing, and Sentry
//! when configured).

use axum::extract::multipart::MultipartError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::upload::UploadError;
use crate::store::StoreError;

/// The wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Reading a multipart body failed.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Storing an upload failed.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The generic body every server-side failure responds with.
    pub const GENERIC_SERVER_ERROR: &'static str = "Something went wrong!";

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Upload(UploadError::TooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upload(UploadError::Io(_)) | Self::Store(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors; clients only ever see the generic body.
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let status = self.status();
        let message = match &self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::Multipart(_) => "Malformed form data".to_owned(),
            Self::Upload(UploadError::TooLarge(_)) => "File too large".to_owned(),
            Self::Upload(UploadError::Io(_)) | Self::Store(_) | Self::Internal(_) => {
                Self::GENERIC_SERVER_ERROR.to_owned()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
