//! Settings endpoints

use axum::{extract::State, Json};
use flashmatch_core::storage::{load_theme, save_theme};

use crate::error::Result;
use crate::models::ThemeSetting;
use crate::AppState;

/// GET /api/settings/theme
pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeSetting> {
    Json(ThemeSetting {
        theme: load_theme(state.storage.as_ref()),
    })
}

/// PUT /api/settings/theme
pub async fn update_theme(
    State(state): State<AppState>,
    Json(request): Json<ThemeSetting>,
) -> Result<Json<ThemeSetting>> {
    save_theme(state.storage.as_ref(), request.theme)?;
    tracing::debug!("Theme set to {}", request.theme.as_str());
    Ok(Json(request))
}
