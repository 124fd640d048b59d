//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the real router over in-memory storage
//! - An in-process stand-in for the dictionary API

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use axum_test::TestServer;
use flashmatch_core::{MemoryStorage, VocabularyBank};

use flashmatch_server::services::dictionary::DictionaryClient;
use flashmatch_server::{app, AppState};

/// Test context holding the router and the storage behind it.
pub struct TestContext {
    pub storage: Arc<MemoryStorage>,
    app: axum::Router,
}

impl TestContext {
    /// Context with the built-in vocabulary and a dictionary that is never reachable.
    pub fn new() -> Self {
        Self::with_dictionary("http://127.0.0.1:9")
    }

    /// Context whose dictionary lookups go to `dictionary_url`.
    pub fn with_dictionary(dictionary_url: &str) -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), dictionary_url)
    }

    /// Context over existing storage, as after a restart.
    pub fn with_storage(storage: Arc<MemoryStorage>, dictionary_url: &str) -> Self {
        let state = AppState::new(
            VocabularyBank::default(),
            storage.clone(),
            DictionaryClient::new(dictionary_url),
        );
        Self {
            storage,
            app: app(state),
        }
    }

    /// Test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to build test server")
    }
}

/// Serve canned dictionary responses on a random local port.
///
/// - `cook`: two entries, verb and noun meanings, audio on the second entry
/// - `cat`: one entry without audio
/// - `broken`: 500
/// - anything else: 404
pub async fn spawn_dictionary_mock() -> String {
    let router = Router::new().route("/entries/en/{word}", get(mock_entry));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind dictionary mock");
    let addr = listener.local_addr().expect("mock address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}/entries/en", addr)
}

async fn mock_entry(Path(word): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    match word.to_lowercase().as_str() {
        "cook" => (StatusCode::OK, Json(fixtures::cook_response())),
        "cat" => (StatusCode::OK, Json(fixtures::cat_response())),
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": "boom" })),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "title": "No Definitions Found" })),
        ),
    }
}
