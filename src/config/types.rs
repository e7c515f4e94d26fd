//! Configuration types for packaging-audit.
//!
//! Provides structured configuration for the narrative service, submission
//! delivery and report output.

use crate::narrative::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Narrative analysis service
    pub narrative: NarrativeConfig,
    /// Submission delivery (webhook, local log)
    pub telemetry: TelemetryConfig,
    /// Report output
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Enable or disable the narrative analysis.
    pub const fn narrative(mut self, enabled: bool) -> Self {
        self.config.narrative.enabled = enabled;
        self
    }

    /// Set the narrative model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.narrative.model = model.into();
        self
    }

    /// Set the submission webhook URL.
    pub fn webhook_url(mut self, url: Option<String>) -> Self {
        self.config.telemetry.webhook_url = url;
        self
    }

    /// Append submissions to a local NDJSON log.
    pub fn log_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.telemetry.log_file = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Write the report to a file instead of stdout.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the minimum passing overall score.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.output.min_score = min_score;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Narrative analysis settings.
///
/// The API key itself is never stored here; `api_key_env` names the
/// environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Request a narrative analysis for each submission
    pub enabled: bool,
    /// Model name
    pub model: String,
    /// REST endpoint, without the `/models/...` path
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// HTTP request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Submission delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TelemetryConfig {
    /// URL that receives each submission as a JSON POST
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Local NDJSON file each submission is appended to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Webhook request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            log_file: None,
            timeout_secs: 10,
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Exit with code 1 when the overall score is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 10.0))]
    pub min_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .narrative(false)
            .webhook_url(Some("https://hooks.example/audit".to_string()))
            .output_format(ReportFormat::Json)
            .min_score(Some(6.0))
            .build();

        assert!(!config.narrative.enabled);
        assert_eq!(
            config.telemetry.webhook_url.as_deref(),
            Some("https://hooks.example/audit")
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.output.min_score, Some(6.0));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.narrative.enabled);
        assert_eq!(config.narrative.model, "gemini-3-flash-preview");
        assert_eq!(config.narrative.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.telemetry.timeout_secs, 10);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("narrative:\n  model: gemini-pro\n").unwrap();
        assert_eq!(config.narrative.model, "gemini-pro");
        assert!(config.narrative.enabled);
        assert_eq!(config.narrative.timeout_secs, 60);
    }
}
