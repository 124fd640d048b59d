//! Choosing how a word should be pronounced.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::lookup::{first_audio, DictionaryEntry};

/// Locale used for synthesized speech.
pub const SPEECH_LANG: &str = "en-US";

/// Instruction handed to the client, which plays it fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PronunciationPlan {
    /// Play a recorded clip.
    Remote { url: String },
    /// Synthesize speech for the text.
    Speech { text: String, lang: String },
}

impl PronunciationPlan {
    pub fn speech(text: impl Into<String>) -> Self {
        Self::Speech {
            text: text.into(),
            lang: SPEECH_LANG.to_string(),
        }
    }
}

/// Pick the first recorded clip from a lookup, or fall back to speech for
/// `term` when the lookup failed or carried no audio.
pub fn plan_pronunciation(
    term: &str,
    lookup: Result<&[DictionaryEntry], &LookupError>,
) -> PronunciationPlan {
    match lookup {
        Ok(entries) => match first_audio(entries) {
            Some(url) => PronunciationPlan::Remote {
                url: url.to_string(),
            },
            None => PronunciationPlan::speech(term),
        },
        Err(e) => {
            tracing::warn!("Pronunciation lookup for {} failed, using speech: {}", term, e);
            PronunciationPlan::speech(term)
        }
    }
}
