//! Gemini `generateContent` client.

use super::prompt::build_prompt;
use super::traits::{NarrativeGenerator, NarrativeRequest};
use crate::config::NarrativeConfig;
use crate::error::{AuditError, RemoteErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model used for the analysis.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default REST endpoint, without the model path.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response we read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Connection settings for [`GeminiNarrator`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Build from the narrative settings, reading the API key from the
    /// environment variable they name.
    pub fn from_settings(settings: &NarrativeConfig) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AuditError::narrative(
                    "configuring Gemini client",
                    RemoteErrorKind::MissingCredentials(format!(
                        "environment variable {} is not set",
                        settings.api_key_env
                    )),
                )
            })?;

        Ok(Self {
            api_key,
            model: settings.model.clone(),
            endpoint: settings.endpoint.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Narrative generator backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiNarrator {
    config: GeminiConfig,
    #[cfg(feature = "remote")]
    client: reqwest::blocking::Client,
}

impl GeminiNarrator {
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        #[cfg(feature = "remote")]
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            config,
            #[cfg(feature = "remote")]
            client,
        }
    }

    pub fn from_settings(settings: &NarrativeConfig) -> Result<Self> {
        GeminiConfig::from_settings(settings).map(Self::new)
    }

    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    #[cfg(feature = "remote")]
    fn request(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.config.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                AuditError::narrative("calling Gemini", RemoteErrorKind::NetworkError(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::narrative(
                "calling Gemini",
                RemoteErrorKind::ApiError(format!("generateContent returned {status}")),
            ));
        }

        let parsed: GenerateResponse = response.json().map_err(|e| {
            AuditError::narrative("decoding Gemini response", RemoteErrorKind::InvalidResponse(e.to_string()))
        })?;
        Ok(parsed.text())
    }

    #[cfg(not(feature = "remote"))]
    fn request(&self, _prompt: &str) -> Result<String> {
        Err(AuditError::narrative(
            "calling Gemini",
            RemoteErrorKind::ProviderUnavailable("remote feature not enabled".to_string()),
        ))
    }
}

impl NarrativeGenerator for GeminiNarrator {
    fn generate(&self, request: &NarrativeRequest<'_>) -> Result<String> {
        let prompt = build_prompt(request);
        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "requesting narrative");
        self.request(&prompt)
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}
