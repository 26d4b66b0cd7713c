use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use tts::{GroqClient, TtsService};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");
    let addr = config.socket_addr().expect("Invalid address");

    tracing::info!("TTS relay server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Provider: {} (model {})", config.base_url, config.model);

    let provider = GroqClient::new(
        &config.base_url,
        &config.api_key,
        &config.model,
        config.provider_timeout_secs,
    )
    .expect("Failed to create provider client");

    let tts = TtsService::new(Arc::new(provider), config.output_dir.clone())
        .expect("Failed to create output directory");
    tracing::info!("Output directory: {}", tts.output_dir().display());

    let state = Arc::new(AppState { tts });

    let app = create_router(state, config.static_dir.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
