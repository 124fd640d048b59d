//! Environment configuration.

use std::path::PathBuf;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const APP_DIR: &str = "flashmatch";

/// Server settings read from the environment.
///
/// Variables:
/// - HOST, PORT: listen address (default 0.0.0.0:3000)
/// - FLASHMATCH_DATA_DIR: where the key-value file lives
/// - DICTIONARY_API_URL: dictionary base URL, the word is appended as a path segment
/// - FLASHMATCH_VOCABULARY: optional JSON vocabulary bank replacing the built-in one
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub dictionary_url: String,
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {}: {}", port, e))?,
            Err(_) => 3000,
        };

        let data_dir = std::env::var("FLASHMATCH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let dictionary_url = std::env::var("DICTIONARY_API_URL")
            .unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string());

        let vocabulary_path = std::env::var("FLASHMATCH_VOCABULARY").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            data_dir,
            dictionary_url,
            vocabulary_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
