use std::sync::Arc;

use reqwest::StatusCode;

use crate::config::Config;
use crate::error::AppError;
use crate::tts::schema;

/// Thin wrapper over the upstream `generateContent` endpoint.
///
/// Cloning is cheap: the HTTP connection pool and the configuration are both
/// shared.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl GeminiClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.config.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }

    /// Send a single synthesis request for `text` and return the body of a
    /// 200 response. Any other status becomes [`AppError::Upstream`].
    pub async fn generate(&self, text: &str) -> Result<String, AppError> {
        let api_key = self.api_key()?;
        let payload = schema::build_request(self.config.schema, text, &self.config.voice_name);

        tracing::debug!(
            schema = %self.config.schema,
            voice = %self.config.voice_name,
            chars = text.chars().count(),
            "Sending synthesis request"
        );

        let response = self
            .http
            .post(&self.config.tts_url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            tracing::warn!("Upstream returned {}", status);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.text().await?)
    }
}
