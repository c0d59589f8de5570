use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    tracing::info!("Gemini TTS Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Upstream: {} ({} schema)", config.tts_url, config.schema);
    tracing::info!("Voice: {}", config.voice_name);
    tracing::info!("Static directory: {}", config.static_dir.display());
    if !config.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; /status and /tts will report errors");
    }

    // Create app state
    let state = Arc::new(AppState::new(config));

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
