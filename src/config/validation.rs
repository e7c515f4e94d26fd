//! Configuration validation for packaging-audit.

use super::types::{AppConfig, NarrativeConfig, OutputConfig, TelemetryConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.narrative.validate());
        errors.extend(self.telemetry.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for NarrativeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.model.trim().is_empty() {
            errors.push(ConfigError::new("narrative.model", "Model name must not be empty"));
        }
        if !is_http_url(&self.endpoint) {
            errors.push(ConfigError::new(
                "narrative.endpoint",
                format!("Endpoint must be an http(s) URL, got '{}'", self.endpoint),
            ));
        }
        if self.api_key_env.trim().is_empty() {
            errors.push(ConfigError::new(
                "narrative.api_key_env",
                "Name of the API key variable must not be empty",
            ));
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new("narrative.timeout_secs", "Timeout must be at least 1 second"));
        }
        errors
    }
}

impl Validatable for TelemetryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(url) = &self.webhook_url {
            if !is_http_url(url) {
                errors.push(ConfigError::new(
                    "telemetry.webhook_url",
                    format!("Webhook must be an http(s) URL, got '{url}'"),
                ));
            }
        }
        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "telemetry.log_file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new("telemetry.timeout_secs", "Timeout must be at least 1 second"));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(file_path) = &self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if let Some(min) = self.min_score {
            if !(0.0..=10.0).contains(&min) {
                errors.push(ConfigError::new(
                    "output.min_score",
                    format!("Minimum score must be between 0 and 10, got {min}"),
                ));
            }
        }
        errors
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("https://") || value.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_narrative_validation() {
        let config = NarrativeConfig {
            model: String::new(),
            endpoint: "ftp://example".to_string(),
            timeout_secs: 0,
            ..NarrativeConfig::default()
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["narrative.model", "narrative.endpoint", "narrative.timeout_secs"]
        );
    }

    #[test]
    fn test_webhook_validation() {
        let config = TelemetryConfig {
            webhook_url: Some("not a url".to_string()),
            ..TelemetryConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "telemetry.webhook_url");
    }

    #[test]
    fn test_min_score_range() {
        let config = OutputConfig {
            min_score: Some(11.0),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new("output.min_score", "out of range");
        assert_eq!(error.to_string(), "output.min_score: out of range");
    }
}
