//! Dashboard snapshot route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use botshop_core::types::Dashboard;

use crate::error::AppError;
use crate::state::AppState;

/// Return the full store contents as one document.
///
/// The client fetches this once after its local login and renders every tab
/// from the copy; there is no pagination, filtering, or partial projection.
#[instrument(skip(state))]
pub async fn snapshot(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    Ok(Json(state.store().snapshot()?))
}
