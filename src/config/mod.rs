//! Configuration module for packaging-audit.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use packaging_audit::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Offline);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .narrative(false)
//!     .min_score(Some(6.0))
//!     .build();
//!
//! // Load from file
//! use packaging_audit::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.packaging-audit.yaml` file in the working directory or
//! `~/.config/packaging-audit/`:
//!
//! ```yaml
//! narrative:
//!   api_key_env: GEMINI_API_KEY
//! telemetry:
//!   webhook_url: https://script.google.com/macros/s/.../exec
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{AppConfig, AppConfigBuilder, NarrativeConfig, OutputConfig, TelemetryConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.packaging-audit.yaml`.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::AuditError::config(format!("schema serialization: {e}")))
}
