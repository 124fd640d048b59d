//! Core types for the matching game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of pairs dealt in every round, regardless of pool size.
pub const PAIRS_PER_ROUND: usize = 6;

/// A Thai-English translation pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub en: String,
    pub th: String,
}

impl VocabularyEntry {
    pub fn new(en: impl Into<String>, th: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            th: th.into(),
        }
    }
}

/// Card face language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Th,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }
}

/// One face of a pair on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub pair_id: usize,
    pub content: String,
    pub lang: Language,
    pub is_flipped: bool,
    pub is_matched: bool,
    pub is_shaking: bool,
    pub is_correct: bool,
}

impl Card {
    /// Create a face-down card. Ids follow the `{lang}-{pair}` pattern.
    pub fn new(pair_id: usize, lang: Language, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{}", lang.as_str(), pair_id),
            pair_id,
            content: content.into(),
            lang,
            is_flipped: false,
            is_matched: false,
            is_shaking: false,
            is_correct: false,
        }
    }

    /// Whether the card can still be picked by the player.
    pub fn is_selectable(&self) -> bool {
        !(self.is_matched || self.is_flipped || self.is_correct)
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Best completion time in seconds, keyed by level name.
pub type BestTimes = BTreeMap<String, u32>;

/// Serializable view of the live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub level: Option<String>,
    pub cards: Vec<Card>,
    pub flipped_cards: Vec<Card>,
    pub matched_pairs: usize,
    pub status: GameStatus,
    pub timer_seconds: u32,
    pub played_words: Vec<VocabularyEntry>,
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
