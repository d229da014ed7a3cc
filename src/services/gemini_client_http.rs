//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::{AppError, GenerationApiConfig};
use crate::ports::{GenerationClient, MALFORMED_RESPONSE_FALLBACK};

const UNKNOWN_ERROR: &str = "Unknown error";
const FIRST_CANDIDATE_TEXT: &str = "/candidates/0/content/parts/0/text";

/// HTTP client for the Gemini generation API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    ///
    /// The key is not checked locally; an empty key is rejected by the remote.
    pub fn new(api_key: String, config: &GenerationApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        if api_key.trim().is_empty() {
            warn!("No API key configured; the generation endpoint will reject requests");
        }

        Ok(Self { api_key, endpoint: config.endpoint()?, client })
    }

    /// Endpoint without the key query parameter.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn user_text(text: &'a str) -> Self {
        Self { contents: [Content { role: "user", parts: [Part { text }] }] }
    }
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        debug!(endpoint = %self.endpoint, instruction_chars = instruction.chars().count(), "Sending generation request");

        let response = self
            .client
            .post(self.request_url())
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateContentRequest::user_text(instruction))
            .send()
            .map_err(|e| AppError::Unexpected(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::Unexpected(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            let error = AppError::Remote {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message: remote_error_message(&body),
            };
            warn!(status = status.as_u16(), "Generation request rejected: {}", error);
            return Err(error);
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::Unexpected(format!("Failed to parse response: {}", e)))?;
        Ok(extract_prompt_text(&payload))
    }
}

/// `error.message` of an error body, or the generic fallback.
fn remote_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|payload| payload.pointer("/error/message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// First candidate's first part text, trimmed, or the malformed-response fallback.
fn extract_prompt_text(payload: &Value) -> String {
    match payload.pointer(FIRST_CANDIDATE_TEXT).and_then(Value::as_str) {
        Some(text) => text.trim().to_string(),
        None => {
            info!("Generation response had no candidate text");
            MALFORMED_RESPONSE_FALLBACK.to_string()
        }
    }
}
