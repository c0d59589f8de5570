//! Locating the encoded audio inside an upstream response.
//!
//! Strategies are tried in [`STRATEGIES`] order; the first one returning a
//! non-empty string wins.

use serde_json::Value;

pub struct Strategy {
    pub name: &'static str,
    pub extract: fn(&Value) -> Option<&str>,
}

pub const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "candidates.inline_data",
        extract: candidate_inline_data,
    },
    Strategy {
        name: "contents.audio",
        extract: legacy_audio_content,
    },
];

/// Run every strategy in order and return the first payload found, together
/// with the name of the strategy that found it.
pub fn extract_audio(response: &Value) -> Option<(&'static str, &str)> {
    STRATEGIES.iter().find_map(|strategy| {
        (strategy.extract)(response)
            .filter(|data| !data.is_empty())
            .map(|data| (strategy.name, data))
    })
}

/// `candidates[0].content.parts[*].inline_data.data`
///
/// The API also answers in camelCase (`inlineData`), so both spellings are
/// accepted. Parts without audio (e.g. text parts) are skipped.
pub fn candidate_inline_data(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?
        .iter()
        .find_map(|part| {
            part.get("inline_data")
                .or_else(|| part.get("inlineData"))?
                .get("data")?
                .as_str()
                .filter(|data| !data.is_empty())
        })
}

/// `contents[0].parts[0].audio.content`
pub fn legacy_audio_content(response: &Value) -> Option<&str> {
    response
        .get("contents")?
        .get(0)?
        .get("parts")?
        .get(0)?
        .get("audio")?
        .get("content")?
        .as_str()
}
