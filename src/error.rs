use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Text is empty")]
    EmptyText,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Connection error: {0}")]
    Transport(reqwest::Error),

    #[error("API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Audio data was not obtained from the API response")]
    NoAudio,

    #[error("Failed to decode audio data: {0}")]
    Decode(#[from] base64::DecodeError),
}

// The request URL carries the API key as a query parameter.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.without_url())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyText | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey
            | AppError::Transport(_)
            | AppError::Upstream { .. }
            | AppError::InvalidResponse(_)
            | AppError::NoAudio
            | AppError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", status.as_u16(), message);
        } else {
            tracing::warn!("Request rejected: {} - {}", status.as_u16(), message);
        }

        (
            status,
            Json(ErrorResponse {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert_eq!(AppError::EmptyText.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::BadRequest("bad json".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_error_message_carries_code_and_body() {
        let err = AppError::Upstream {
            status: 429,
            body: "quota exceeded".into(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "API error: 429 - quota exceeded");
    }

    #[test]
    fn test_missing_key_is_server_error() {
        assert_eq!(
            AppError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
