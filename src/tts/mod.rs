pub mod client;
pub mod extract;
pub mod schema;
pub mod status;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::error::AppError;

pub use client::GeminiClient;
pub use status::{StatusProber, StatusReport};

pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

pub struct TtsService {
    client: GeminiClient,
}

impl TtsService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, AppError> {
        // 1. Validate before touching the network
        if text.trim().is_empty() {
            return Err(AppError::EmptyText);
        }

        // 2. Call upstream (fails fast without a key)
        let body = self.client.generate(text).await?;

        // 3. Locate the payload
        let response: Value = serde_json::from_str(&body)?;
        let (strategy, encoded) = extract::extract_audio(&response).ok_or(AppError::NoAudio)?;
        tracing::debug!(strategy, encoded_len = encoded.len(), "Extracted audio payload");

        // 4. Decode
        let bytes = decode_audio(encoded)?;
        tracing::info!("Synthesized {} bytes of audio", bytes.len());

        Ok(SynthesizedAudio {
            bytes,
            mime_type: AUDIO_MIME_TYPE,
        })
    }
}

/// Decode a base64 audio payload. An empty result counts as no audio.
pub fn decode_audio(encoded: &str) -> Result<Vec<u8>, AppError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    if bytes.is_empty() {
        return Err(AppError::NoAudio);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::Config;

    const ENDPOINT: &str = "/v1beta/models/test-tts:generateContent";

    fn service(api_key: Option<&str>, server: &MockServer) -> TtsService {
        let config = Config::new(
            api_key.map(str::to_string),
            format!("{}{}", server.uri(), ENDPOINT),
        );
        TtsService::new(GeminiClient::new(Arc::new(config)))
    }

    #[test]
    fn test_decode_audio() {
        assert_eq!(decode_audio("AAEC").unwrap(), vec![0, 1, 2]);
        assert_eq!(decode_audio(" AAEC\n").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_decode_audio_rejects_garbage() {
        assert!(matches!(decode_audio("not base64!!"), Err(AppError::Decode(_))));
        assert!(matches!(decode_audio("   "), Err(AppError::NoAudio)));
    }

    #[tokio::test]
    async fn test_blank_text_rejected_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tts = service(Some("test-key"), &server);

        for text in ["", "   ", "\n\t"] {
            assert!(matches!(tts.synthesize(text).await, Err(AppError::EmptyText)));
        }
    }

    #[tokio::test]
    async fn test_missing_key_rejected_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = service(None, &server).synthesize("hello").await;

        assert!(matches!(result, Err(AppError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_synthesize_decodes_candidate_audio() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "inline_data": { "mime_type": "audio/mpeg", "data": "SUQzBA==" } }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let audio = service(Some("test-key"), &server)
            .synthesize("hello")
            .await
            .unwrap();

        assert_eq!(audio.bytes, b"ID3\x04".to_vec());
        assert_eq!(audio.mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_synthesize_rejects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = service(Some("test-key"), &server).synthesize("hello").await;

        assert!(matches!(result, Err(AppError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_synthesize_rejects_undecodable_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "contents": [{ "parts": [{ "audio": { "content": "%%%" } }] }]
            })))
            .mount(&server)
            .await;

        let result = service(Some("test-key"), &server).synthesize("hello").await;

        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
