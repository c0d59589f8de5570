use serde::Serialize;

use crate::tts::client::GeminiClient;

/// Text sent when probing the upstream. Never shown to users.
pub const PROBE_PHRASE: &str = "こんにちは";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: ProbeStatus,
    pub message: String,
}

impl StatusReport {
    pub fn ok() -> Self {
        Self {
            status: ProbeStatus::Ok,
            message: "API connection OK".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Error,
            message: message.into(),
        }
    }
}

/// Checks that the upstream is reachable and accepts our key.
pub struct StatusProber {
    client: GeminiClient,
}

impl StatusProber {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// One probe request, no retries. Failures are reported in the returned
    /// value rather than as an error.
    pub async fn check_status(&self) -> StatusReport {
        match self.client.generate(PROBE_PHRASE).await {
            Ok(_) => {
                tracing::debug!("Status probe succeeded");
                StatusReport::ok()
            }
            Err(e) => {
                tracing::warn!("Status probe failed: {}", e);
                StatusReport::error(e.to_string())
            }
        }
    }
}
