use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::tts::{GeminiClient, StatusProber, TtsService};

pub struct AppState {
    pub config: Arc<Config>,
    pub prober: StatusProber,
    pub tts: TtsService,
}

impl AppState {
    /// Wire both components to one upstream client built from `config`.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = GeminiClient::new(Arc::clone(&config));

        Self {
            prober: StatusProber::new(client.clone()),
            tts: TtsService::new(client),
            config,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let static_files =
        ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/status", get(handlers::status))
        .route("/tts", post(handlers::tts))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
