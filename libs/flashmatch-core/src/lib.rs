//! Core library for the Thai-English matching game.
//!
//! Provides:
//! - The game engine (dealing, card selection, pair resolution, timer ticks)
//! - Vocabulary bank of levels and translation pairs
//! - Best-time bookkeeping over a pluggable key-value storage
//! - Dictionary response normalization and pronunciation planning
//! - Shared types (Card, SessionState, VocabularyEntry, etc.)

pub mod best_times;
pub mod error;
pub mod lookup;
pub mod pronunciation;
pub mod session;
pub mod storage;
pub mod types;
pub mod vocabulary;

pub use best_times::{record_time, PersistenceStore, StoredBestTimes};
pub use error::{LookupError, StorageError, VocabularyError};
pub use lookup::{clean_term, summarize, DictionaryEntry, WordDetails};
pub use pronunciation::{plan_pronunciation, PronunciationPlan};
pub use session::{GameSession, GameTiming, Resolution, ResolutionKind, SettleOutcome};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use types::{
    BestTimes, Card, GameStatus, Language, SessionState, Theme, VocabularyEntry, PAIRS_PER_ROUND,
};
pub use vocabulary::VocabularyBank;
