//! Narrative generator trait and its no-op implementation.

use crate::error::Result;
use crate::model::{CompletedAnswers, UserProfile};
use crate::scoring::MaturityLevel;

/// Everything a generator gets to write the analysis from.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    pub profile: &'a UserProfile,
    pub answers: &'a CompletedAnswers,
    pub maturity: MaturityLevel,
    pub overall_score: f64,
}

/// Source of the free-form strategic analysis attached to a result.
///
/// Implementations return the raw text (or an error); substituting the
/// fallback sentences is the caller's job.
///
/// # Example
///
/// ```ignore
/// use packaging_audit::narrative::{GeminiNarrator, NarrativeGenerator, NoOpNarrator};
///
/// let narrator: Box<dyn NarrativeGenerator> = if config.narrative.enabled {
///     Box::new(GeminiNarrator::from_settings(&config.narrative)?)
/// } else {
///     Box::new(NoOpNarrator)
/// };
/// ```
pub trait NarrativeGenerator: Send + Sync {
    /// Produce the analysis text for a scored audit.
    fn generate(&self, request: &NarrativeRequest<'_>) -> Result<String>;

    /// Name of the generator (e.g. "Gemini").
    fn name(&self) -> &'static str;

    /// Whether this generator produces anything at all.
    ///
    /// Results scored with a disabled generator carry no analysis.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// A generator that never produces a narrative.
///
/// Used when narrative generation is switched off or no API key is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNarrator;

impl NarrativeGenerator for NoOpNarrator {
    fn generate(&self, _request: &NarrativeRequest<'_>) -> Result<String> {
        Ok(String::new())
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// A generator that always returns the same text.
///
/// Handy for offline demos and for tests of the surrounding flow.
#[derive(Debug, Clone, Default)]
pub struct StaticNarrator {
    text: String,
}

impl StaticNarrator {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl NarrativeGenerator for StaticNarrator {
    fn generate(&self, _request: &NarrativeRequest<'_>) -> Result<String> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}
