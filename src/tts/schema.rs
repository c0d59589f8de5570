//! Upstream request payload.
//!
//! The Gemini speech API has moved the voice selection block between
//! revisions. Everything that knows about that lives here, selected by
//! [`RequestSchema`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const AUDIO_MODALITY: &str = "AUDIO";

/// Where `speech_config` sits in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestSchema {
    /// `generation_config.speech_config`
    #[default]
    Nested,
    /// `speech_config` next to `generation_config`
    TopLevel,
}

impl FromStr for RequestSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested" => Ok(Self::Nested),
            "top-level" | "toplevel" | "top_level" => Ok(Self::TopLevel),
            other => Err(format!(
                "Unknown request schema '{other}' (expected 'nested' or 'top-level')"
            )),
        }
    }
}

impl fmt::Display for RequestSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested => f.write_str("nested"),
            Self::TopLevel => f.write_str("top-level"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

/// Build the synthesis request for `text` spoken by `voice_name`.
pub fn build_request(
    schema: RequestSchema,
    text: &str,
    voice_name: &str,
) -> GenerateContentRequest {
    let speech_config = SpeechConfig {
        voice_config: VoiceConfig {
            prebuilt_voice_config: PrebuiltVoiceConfig {
                voice_name: voice_name.to_string(),
            },
        },
    };

    let (nested, top_level) = match schema {
        RequestSchema::Nested => (Some(speech_config), None),
        RequestSchema::TopLevel => (None, Some(speech_config)),
    };

    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec![AUDIO_MODALITY.to_string()],
            speech_config: nested,
        },
        speech_config: top_level,
    }
}
