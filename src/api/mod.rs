pub mod handlers;
pub mod routes;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
}
