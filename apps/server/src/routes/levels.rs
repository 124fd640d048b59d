//! Level listing

use axum::{extract::State, Json};

use crate::models::LevelsResponse;
use crate::AppState;

/// GET /api/levels
pub async fn list(State(state): State<AppState>) -> Json<LevelsResponse> {
    Json(LevelsResponse {
        levels: state.runtime.levels(),
    })
}
