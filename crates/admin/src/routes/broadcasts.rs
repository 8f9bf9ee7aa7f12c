//! Broadcast route handlers.
//!
//! A broadcast is a log entry, not a dispatch: no message leaves the
//! process. The recipient count is the size of the user collection at send
//! time.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use botshop_core::types::Broadcast;

use crate::error::AppError;
use crate::state::AppState;

/// Broadcast creation request body.
#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    /// Message to all users. Absent messages are accepted as empty; the API
    /// performs no presence validation.
    #[serde(default)]
    pub message: String,
}

/// Record a broadcast to all current users.
#[instrument(skip(state, request))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<BroadcastRequest>,
) -> Result<Json<Broadcast>, AppError> {
    let broadcast = state.store().record_broadcast(request.message)?;
    tracing::info!(
        id = %broadcast.id,
        recipients = broadcast.recipients,
        "broadcast recorded"
    );
    Ok(Json(broadcast))
}
