//! Error types for flashmatch-core.

use thiserror::Error;

/// Errors raised while building a vocabulary bank.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level {level} has {count} entries, at least {required} are needed")]
    LevelTooSmall {
        level: String,
        count: usize,
        required: usize,
    },

    #[error("vocabulary bank has no levels")]
    Empty,
}

/// Errors from the dictionary lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("nothing to look up")]
    EmptyTerm,

    #[error("network error: {0}")]
    Network(String),

    #[error("word not found: {0}")]
    NotFound(String),

    #[error("dictionary returned status {status}")]
    Upstream { status: u16 },

    #[error("could not decode dictionary response: {0}")]
    Decode(String),
}

/// Errors from a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_too_small_message() {
        let error = VocabularyError::LevelTooSmall {
            level: "C1".to_string(),
            count: 4,
            required: 6,
        };
        assert_eq!(
            error.to_string(),
            "level C1 has 4 entries, at least 6 are needed"
        );
    }

    #[test]
    fn upstream_message() {
        let error = LookupError::Upstream { status: 503 };
        assert_eq!(error.to_string(), "dictionary returned status 503");
    }
}
