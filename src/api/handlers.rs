use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::TtsRequest;
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::StatusReport;

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.prober.check_status().await)
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    request: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let audio = state.tts.synthesize(&request.text).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, audio.mime_type)],
        audio.bytes,
    )
        .into_response())
}
