//! Leaderboard document endpoint

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::state::AppState;

/// The document exactly as the frontend consumes it
pub async fn get_document(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.document().clone())
}
