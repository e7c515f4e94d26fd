//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".packaging-audit.yaml",
    ".packaging-audit.yml",
    "packaging-audit.yaml",
    "packaging-audit.yml",
];

/// Directory name used under the user config directory.
const CONFIG_DIR_NAME: &str = "packaging-audit";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/packaging-audit/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Per-user configuration directory, if the platform has one.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this is how CLI
    /// flags are layered over the file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Narrative config
        if !other.narrative.enabled {
            self.narrative.enabled = false;
        }
        if other.narrative.model != defaults.narrative.model {
            self.narrative.model.clone_from(&other.narrative.model);
        }
        if other.narrative.endpoint != defaults.narrative.endpoint {
            self.narrative.endpoint.clone_from(&other.narrative.endpoint);
        }
        if other.narrative.api_key_env != defaults.narrative.api_key_env {
            self.narrative.api_key_env.clone_from(&other.narrative.api_key_env);
        }
        if other.narrative.timeout_secs != defaults.narrative.timeout_secs {
            self.narrative.timeout_secs = other.narrative.timeout_secs;
        }

        // Telemetry config
        if other.telemetry.webhook_url.is_some() {
            self.telemetry.webhook_url.clone_from(&other.telemetry.webhook_url);
        }
        if other.telemetry.log_file.is_some() {
            self.telemetry.log_file.clone_from(&other.telemetry.log_file);
        }
        if other.telemetry.timeout_secs != defaults.telemetry.timeout_secs {
            self.telemetry.timeout_secs = other.telemetry.timeout_secs;
        }

        // Output config - only override if explicitly set
        if other.output.format != crate::reports::ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.min_score.is_some() {
            self.output.min_score = other.output.min_score;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Packaging Audit Configuration
# Place this file at .packaging-audit.yaml in your working directory or ~/.config/packaging-audit/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Packaging Audit Configuration File
# ==================================
#
# Place it at:
#   - .packaging-audit.yaml in the working directory
#   - ~/.config/packaging-audit/packaging-audit.yaml for global config
#
# CLI arguments always override file settings.

# Narrative analysis
narrative:
  # Request a written analysis for each submission
  enabled: true
  model: gemini-3-flash-preview
  endpoint: https://generativelanguage.googleapis.com/v1beta
  # Environment variable holding the API key (the key is never stored here)
  api_key_env: GEMINI_API_KEY
  timeout_secs: 60

# Submission delivery
telemetry:
  # Each submission is POSTed here as JSON
  # webhook_url: https://script.google.com/macros/s/.../exec
  # Each submission is appended here as one JSON line
  # log_file: ./submissions.ndjson
  timeout_secs: 10

# Output configuration
output:
  # Format: auto, tui, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: audit-report.md
  no_color: false
  # Exit with code 1 when the overall score is below this value
  # min_score: 4.5
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
