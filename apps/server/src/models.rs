//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from flashmatch-core
pub use flashmatch_core::{
    BestTimes, Card, GameStatus, PronunciationPlan, SessionState, Theme, WordDetails,
};

/// Request body for POST /api/game/start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub level: String,
}

/// Response for GET /api/levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsResponse {
    pub levels: Vec<String>,
}

/// Query for the word review endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordQuery {
    pub word: String,
}

/// Theme preference body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSetting {
    pub theme: Theme,
}
