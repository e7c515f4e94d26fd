//! Narrative analysis of a scored audit.
//!
//! A [`NarrativeGenerator`] writes a three-section strategic analysis from
//! the profile, raw answers and score. Generation never blocks scoring:
//! [`resolve_narrative`] turns an empty reply or an error into a fixed
//! fallback sentence.

mod gemini;
mod prompt;
mod render;
mod traits;

pub use gemini::{GeminiConfig, GeminiNarrator, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use prompt::build_prompt;
pub use render::{narrative_headers, narrative_lines, NarrativeLine, HEADER_MARKER};
pub use traits::{NarrativeGenerator, NarrativeRequest, NoOpNarrator, StaticNarrator};

use crate::error::Result;

/// Shown when the service replies with no text.
pub const EMPTY_NARRATIVE_FALLBACK: &str =
    "Diagnostic summary currently under refinement by our analysts.";

/// Shown when the service call fails.
pub const FAILED_NARRATIVE_FALLBACK: &str = "Strategic analysis encountered a processing delay. Please proceed with the automated score breakdown below.";

/// Map a generator outcome to the text attached to the result.
#[must_use]
pub fn resolve_narrative(outcome: Result<String>) -> String {
    match outcome {
        Ok(text) if text.trim().is_empty() => EMPTY_NARRATIVE_FALLBACK.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Narrative generation failed: {err}");
            FAILED_NARRATIVE_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuditError, RemoteErrorKind};

    #[test]
    fn test_resolve_passes_text_through() {
        assert_eq!(resolve_narrative(Ok("### I. A".to_string())), "### I. A");
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(resolve_narrative(Ok("  \n".to_string())), EMPTY_NARRATIVE_FALLBACK);
    }

    #[test]
    fn test_resolve_error() {
        let err = AuditError::narrative("calling Gemini", RemoteErrorKind::ApiError("429".to_string()));
        assert_eq!(resolve_narrative(Err(err)), FAILED_NARRATIVE_FALLBACK);
    }
}
