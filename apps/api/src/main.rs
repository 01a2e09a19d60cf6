mod config;
mod covers;
mod errors;
mod firestore;
mod generate;
mod llm_client;
mod middleware;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::firestore::{DocumentStore, FirestoreClient};
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client
    let generator: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!(
        "Generation client initialized (model: {})",
        llm_client::MODEL
    );

    // Initialize the document store
    let store: Arc<dyn DocumentStore> = Arc::new(FirestoreClient::new(
        config.firestore_project_id.clone(),
        config.firestore_bearer_token.clone(),
    ));
    info!(
        "Firestore client initialized (project: {})",
        config.firestore_project_id
    );

    // Build app state
    let state = AppState { generator, store };

    // Build router (CORS is applied inside build_router)
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
