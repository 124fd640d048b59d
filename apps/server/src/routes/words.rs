//! Word review endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/words?word=Cook%20(v/n)
pub async fn details(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<WordDetails>> {
    let details = state.dictionary.word_details(&query.word).await?;
    Ok(Json(details))
}

/// GET /api/words/pronunciation?word=Cook%20(v/n)
/// Always succeeds; lookup failures fall back to speech synthesis.
pub async fn pronunciation(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Json<PronunciationPlan> {
    Json(state.dictionary.pronunciation(&query.word).await)
}
