//! Gemini-backed narrator.
//!
//! Sends the tutoring prompt to the `generateContent` REST endpoint with a
//! blocking reqwest client and returns the first candidate's text.

use std::env;
use std::time::Duration;

use mechlab_core::narration::{NarrationError, Narrator, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variables checked for the key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub struct GeminiNarrator {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiNarrator {
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Result<Self, NarrationError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("Mechlab/{}", CURRENT_VERSION))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| NarrationError::Transport {
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(GeminiNarrator {
            client,
            api_key: api_key.into(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    /// Build from the environment (`GEMINI_API_KEY`, falling back to `API_KEY`)
    pub fn from_env(model: Option<String>) -> Result<Self, NarrationError> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| NarrationError::MissingApiKey {
                variable: API_KEY_VARS[0].to_string(),
            })?;
        Self::new(api_key, model)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Narrator for GeminiNarrator {
    fn narrate(&self, prompt: &str) -> Result<String, NarrationError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        log::debug!("requesting narration from {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(|e| NarrationError::Transport {
                reason: format!("Network error: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrationError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().map_err(|e| NarrationError::InvalidResponse {
            reason: format!("Failed to parse response: {}", e),
        })?;

        extract_text(parsed)
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> Result<String, NarrationError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(NarrationError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{
                "parts":[{"text":"**Hello** "},{"text":"world"}],
                "role":"model"
            }}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "**Hello** world");
    }

    #[test]
    fn test_extract_text_empty() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(extract_text(response), Err(NarrationError::EmptyResponse)));

        let response: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(matches!(extract_text(response), Err(NarrationError::EmptyResponse)));
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_endpoint_uses_model() {
        let narrator = GeminiNarrator::new("k", Some("gemini-test".into())).unwrap();
        assert!(narrator.endpoint().ends_with("/gemini-test:generateContent"));
        let narrator = GeminiNarrator::new("k", None).unwrap();
        assert!(narrator.endpoint().contains(DEFAULT_MODEL));
    }
}
