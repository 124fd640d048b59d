pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use flashmatch_core::{GameSession, KeyValueStorage, StoredBestTimes, VocabularyBank};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::dictionary::DictionaryClient;
use crate::services::game::GameRuntime;
use crate::services::storage::FileStorage;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub runtime: GameRuntime,
    pub dictionary: Arc<DictionaryClient>,
    pub storage: Arc<dyn KeyValueStorage>,
}

impl AppState {
    /// Wire a session over `storage`, whose best times it loads and updates.
    pub fn new(
        bank: VocabularyBank,
        storage: Arc<dyn KeyValueStorage>,
        dictionary: DictionaryClient,
    ) -> Self {
        let session = GameSession::new(
            Arc::new(bank),
            Box::new(StoredBestTimes::new(storage.clone())),
        );
        Self {
            runtime: GameRuntime::new(session),
            dictionary: Arc::new(dictionary),
            storage,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let bank = match &config.vocabulary_path {
            Some(path) => {
                tracing::info!("Loading vocabulary from {}", path.display());
                VocabularyBank::from_json(&std::fs::read_to_string(path)?)?
            }
            None => VocabularyBank::default(),
        };
        let storage = FileStorage::open(&config.data_dir)?;

        Ok(Self::new(
            bank,
            Arc::new(storage),
            DictionaryClient::new(config.dictionary_url.clone()),
        ))
    }
}

/// Build the full router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Level routes
        .route("/api/levels", get(routes::levels::list))
        // Game routes
        .route("/api/game", get(routes::game::current))
        .route("/api/game/start", post(routes::game::start))
        .route(
            "/api/game/cards/{card_id}/select",
            post(routes::game::select_card),
        )
        .route("/api/game/reset", post(routes::game::reset))
        .route("/api/best-times", get(routes::game::best_times))
        // Word review routes
        .route("/api/words", get(routes::words::details))
        .route(
            "/api/words/pronunciation",
            get(routes::words::pronunciation),
        )
        // Settings routes
        .route(
            "/api/settings/theme",
            get(routes::settings::get_theme).put(routes::settings::update_theme),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = app(state);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_check() -> &'static str {
    "OK"
}
