//! Named configuration presets.

use super::types::{AppConfig, NarrativeConfig, OutputConfig, TelemetryConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Narrative analysis on, no submission delivery
    Default,
    /// No network calls at all
    Offline,
    /// JSON output with a score gate, for scripted runs
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Offline => "offline",
            Self::Ci => "ci",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "offline" | "local" => Some(Self::Offline),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Narrative analysis enabled, results shown in the terminal",
            Self::Offline => "Scores only; no narrative request and no webhook",
            Self::Ci => "Offline scoring with JSON output and a minimum score of 4.5",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Offline, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Offline => Self::offline_preset(),
            ConfigPreset::Ci => Self::ci_preset(),
        }
    }

    /// Offline preset: the narrative and every remote sink are off.
    #[must_use]
    pub fn offline_preset() -> Self {
        Self {
            narrative: NarrativeConfig {
                enabled: false,
                ..NarrativeConfig::default()
            },
            telemetry: TelemetryConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// CI preset: offline, JSON output, fail below the `Medium` threshold.
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                min_score: Some(crate::scoring::MEDIUM_THRESHOLD),
                ..OutputConfig::default()
            },
            ..Self::offline_preset()
        }
    }
}
