//! Submission stage: score, narrate, deliver.

use crate::config::AppConfig;
use crate::narrative::{
    resolve_narrative, GeminiNarrator, NarrativeGenerator, NarrativeRequest, NoOpNarrator,
};
use crate::reports::AuditReport;
use crate::scoring::AuditScorer;
use crate::session::SubmissionTicket;
use crate::telemetry::{build_submission_sink, dispatch, DeliveryHandle, SubmissionPayload, SubmissionSink};
use std::sync::Arc;

/// Progress messages logged while a submission is processed, in order.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Consulting The Brand Custodian database...",
    "Applying The Mark of Authenticity benchmarks...",
    "Initializing Luban Lock security protocols...",
    "Protecting originality, Empowering growth...",
    "Synchronizing diagnostic data with CRM...",
    "Synthesizing Strategic Maturity Report...",
];

/// A processed submission.
///
/// `delivery` tracks the background telemetry thread; join it before the
/// process exits.
#[derive(Debug)]
pub struct Submission {
    pub report: AuditReport,
    pub delivery: DeliveryHandle,
}

/// Orchestrates scoring, the narrative call and submission delivery.
pub struct AuditPipeline {
    scorer: AuditScorer,
    narrator: Box<dyn NarrativeGenerator>,
    sink: Arc<dyn SubmissionSink>,
}

impl AuditPipeline {
    /// Create a pipeline with explicit collaborators.
    pub fn new(narrator: Box<dyn NarrativeGenerator>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            scorer: AuditScorer::new(),
            narrator,
            sink,
        }
    }

    /// Build the narrator and sink described by `config`.
    ///
    /// A missing API key downgrades to no narrative and an unusable
    /// telemetry target is skipped, so this never fails.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(build_narrator(config), build_submission_sink(&config.telemetry))
    }

    /// Name of the narrative generator in use.
    #[must_use]
    pub fn narrator_name(&self) -> &'static str {
        self.narrator.name()
    }

    /// Process a frozen submission.
    ///
    /// Never fails: narrative errors become a fallback sentence and
    /// delivery errors are logged by the background thread.
    pub fn submit(&self, ticket: &SubmissionTicket) -> Submission {
        let mut messages = LOADING_MESSAGES.iter();
        let mut stage = || {
            if let Some(message) = messages.next() {
                tracing::info!("{message}");
            }
        };

        stage();
        stage();
        let mut result = self.scorer.score(&ticket.answers);

        stage();
        if self.narrator.is_enabled() {
            stage();
            let request = NarrativeRequest {
                profile: &ticket.profile,
                answers: &ticket.answers,
                maturity: result.maturity,
                overall_score: result.overall_score,
            };
            tracing::debug!(narrator = self.narrator.name(), "requesting narrative");
            let analysis = resolve_narrative(self.narrator.generate(&request));
            result = result.with_analysis(analysis);
        } else {
            stage();
        }

        stage();
        let payload = SubmissionPayload::new(ticket.profile.clone(), ticket.answers, result.clone());
        let delivery = dispatch(Arc::clone(&self.sink), payload);

        stage();
        let report = AuditReport::from_submission(ticket, result);
        tracing::info!(
            report_id = %report.report_id,
            score = %report.result.display_score(),
            maturity = %report.result.maturity,
            "audit scored"
        );

        Submission { report, delivery }
    }
}

fn build_narrator(config: &AppConfig) -> Box<dyn NarrativeGenerator> {
    if !config.narrative.enabled {
        return Box::new(NoOpNarrator);
    }
    if !cfg!(feature = "remote") {
        tracing::warn!("Narrative requested but the remote feature is not enabled");
        return Box::new(NoOpNarrator);
    }
    match GeminiNarrator::from_settings(&config.narrative) {
        Ok(narrator) => Box::new(narrator),
        Err(e) => {
            tracing::warn!("Narrative disabled: {e}");
            Box::new(NoOpNarrator)
        }
    }
}
