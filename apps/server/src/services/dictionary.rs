//! Client for the public dictionary API.

use flashmatch_core::lookup::{clean_term, summarize, DictionaryEntry, WordDetails};
use flashmatch_core::pronunciation::{plan_pronunciation, PronunciationPlan};
use flashmatch_core::LookupError;
use reqwest::{Client, StatusCode, Url};

/// Looks words up and turns the responses into review panel data.
#[derive(Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    /// Create a client. `base_url` is the endpoint the word is appended to.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch raw entries for an already-cleaned term.
    pub async fn entries(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        if term.is_empty() {
            return Err(LookupError::EmptyTerm);
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| LookupError::Network(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Network(format!("cannot append to {}", self.base_url)))?
            .push(term);

        tracing::debug!("Looking up {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(term.to_string()));
        }
        if !resp.status().is_success() {
            return Err(LookupError::Upstream {
                status: resp.status().as_u16(),
            });
        }

        let entries: Vec<DictionaryEntry> = resp
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        if entries.is_empty() {
            return Err(LookupError::NotFound(term.to_string()));
        }
        Ok(entries)
    }

    /// Definitions for a vocabulary string such as `"Cook (v/n)"`.
    pub async fn word_details(&self, display: &str) -> Result<WordDetails, LookupError> {
        let term = clean_term(display);
        let entries = self.entries(&term).await?;
        Ok(summarize(display, &entries))
    }

    /// How to pronounce a vocabulary string. Never fails: lookup problems
    /// fall back to synthesized speech.
    pub async fn pronunciation(&self, display: &str) -> PronunciationPlan {
        let term = clean_term(display);
        let result = self.entries(&term).await;
        plan_pronunciation(&term, result.as_deref())
    }
}
