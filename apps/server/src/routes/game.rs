//! Game session endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/game
pub async fn current(State(state): State<AppState>) -> Json<SessionState> {
    Json(state.runtime.snapshot())
}

/// POST /api/game/start
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<SessionState>> {
    let level = request.level.trim();
    if level.is_empty() {
        return Err(ApiError::BadRequest("level is required".to_string()));
    }

    state
        .runtime
        .start(level)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown level: {}", level)))
}

/// POST /api/game/cards/{card_id}/select
pub async fn select_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Json<SessionState> {
    Json(state.runtime.select(&card_id))
}

/// POST /api/game/reset
pub async fn reset(State(state): State<AppState>) -> Json<SessionState> {
    Json(state.runtime.reset())
}

/// GET /api/best-times
pub async fn best_times(State(state): State<AppState>) -> Json<BestTimes> {
    Json(state.runtime.best_times())
}
