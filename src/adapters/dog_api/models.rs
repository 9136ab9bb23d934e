//! Dog CEO API response models.
//!
//! The API wraps every payload in a `{status, message}` envelope. On success
//! `message` holds the data; on error it usually holds a human-readable
//! explanation.

use serde::Deserialize;
use serde_json::Value;

/// Response envelope returned by `/breed/{name}/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct DogApiResponse {
    /// "success" or "error". Missing is treated as an error.
    #[serde(default)]
    pub status: Option<String>,
    /// Sub-breed array on success, explanation string on error.
    #[serde(default)]
    pub message: Value,
}

impl DogApiResponse {
    /// Whether the envelope reports `"status": "success"`.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// The `message` field when it is a plain string.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_str()
    }
}
