use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::tts::schema::RequestSchema;

pub const DEFAULT_TTS_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-tts:generateContent";
pub const DEFAULT_VOICE_NAME: &str = "ja-JP-Neural2-C";
pub const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub tts_url: String,
    pub voice_name: String,
    pub schema: RequestSchema,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Build a configuration for the given key and endpoint with every other
    /// setting at its default.
    pub fn new(api_key: Option<String>, tts_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            tts_url: tts_url.into(),
            voice_name: DEFAULT_VOICE_NAME.to_string(),
            schema: RequestSchema::default(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Only `PORT` and `GEMINI_REQUEST_SCHEMA` can fail to parse; everything
    /// else falls back to a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("GEMINI_API_KEY").ok();
        let tts_url = env::var("GEMINI_TTS_URL").unwrap_or_else(|_| DEFAULT_TTS_URL.to_string());

        let mut config = Self::new(api_key, tts_url);

        if let Ok(voice) = env::var("TTS_VOICE_NAME") {
            if !voice.trim().is_empty() {
                config.voice_name = voice;
            }
        }

        if let Ok(schema) = env::var("GEMINI_REQUEST_SCHEMA") {
            config.schema = schema.parse()?;
        }

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        config.port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        if let Ok(dir) = env::var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
