//! Report output stage.
//!
//! Chooses the effective format, then either opens the results dashboard
//! or renders the report to stdout or a file.

use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, AuditReport, ReportFormat};
use anyhow::Result;

use super::submit::Submission;
use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Output a finished audit to the configured destination.
pub fn output_report(config: &OutputConfig, report: &AuditReport, quiet: bool) -> Result<()> {
    let output_target = OutputTarget::from_option(config.file.clone());
    let effective_output = auto_detect_format(config.format, &output_target);

    if effective_output == ReportFormat::Tui {
        if matches!(output_target, OutputTarget::File(_)) {
            tracing::warn!("The dashboard cannot be written to a file; writing a summary instead");
        } else {
            return crate::tui::run_results(report).map_err(Into::into);
        }
    }

    let use_color = should_use_color(config.no_color) && output_target.is_terminal();
    let reporter = create_reporter_with_options(effective_output, use_color);
    let text = reporter.generate(report)?;

    write_output(&text, &output_target, quiet)
}

/// Output a processed submission, then wait for its delivery.
///
/// The delivery thread is joined even when output fails.
pub fn finish_submission(
    config: &OutputConfig,
    submission: Submission,
    quiet: bool,
) -> Result<AuditReport> {
    let Submission { report, delivery } = submission;
    let output = output_report(config, &report, quiet);
    delivery.wait();
    output.map(|()| report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLevel, CompletedAnswers, UserProfile};
    use crate::narrative::NoOpNarrator;
    use crate::pipeline::AuditPipeline;
    use crate::scoring::AuditScorer;
    use crate::session::SubmissionTicket;
    use crate::telemetry::{SubmissionPayload, SubmissionSink};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn report() -> AuditReport {
        let answers = CompletedAnswers::uniform(AnswerLevel::Advanced);
        let ticket = SubmissionTicket {
            profile: UserProfile {
                company: "Acme".to_string(),
                ..UserProfile::default()
            },
            answers,
            submitted_at: chrono::Utc::now(),
        };
        AuditReport::from_submission(&ticket, AuditScorer::new().score(&answers))
    }

    #[test]
    fn test_output_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.md");
        let config = OutputConfig {
            format: ReportFormat::Markdown,
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        output_report(&config, &report(), true).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("# Infrastructure Maturity Report"));
    }

    #[test]
    fn test_tui_to_file_falls_back_to_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.txt");
        let config = OutputConfig {
            format: ReportFormat::Tui,
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        output_report(&config, &report(), true).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Infrastructure Maturity Report"));
        assert!(!text.contains('\x1b'));
    }

    #[derive(Default)]
    struct SlowSink(AtomicBool);

    impl SubmissionSink for SlowSink {
        fn deliver(&self, _payload: &SubmissionPayload) -> anyhow::Result<()> {
            std::thread::sleep(Duration::from_millis(200));
            self.0.store(true, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "slow"
        }
    }

    fn ticket() -> SubmissionTicket {
        SubmissionTicket {
            profile: UserProfile {
                company: "Acme".to_string(),
                ..UserProfile::default()
            },
            answers: CompletedAnswers::uniform(AnswerLevel::Basic),
            submitted_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_waits_for_delivery_when_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(SlowSink::default());
        let pipeline = AuditPipeline::new(Box::new(NoOpNarrator), sink.clone());
        let config = OutputConfig {
            format: ReportFormat::Json,
            file: Some(dir.path().join("missing").join("report.json")),
            ..OutputConfig::default()
        };

        let result = finish_submission(&config, pipeline.submit(&ticket()), true);
        assert!(result.is_err());
        assert!(sink.0.load(Ordering::SeqCst));
    }

    #[test]
    fn test_returns_report_after_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(SlowSink::default());
        let pipeline = AuditPipeline::new(Box::new(NoOpNarrator), sink.clone());
        let config = OutputConfig {
            format: ReportFormat::Json,
            file: Some(dir.path().join("report.json")),
            ..OutputConfig::default()
        };

        let report = finish_submission(&config, pipeline.submit(&ticket()), true).unwrap();
        assert!(sink.0.load(Ordering::SeqCst));
        assert_eq!(report.result.display_score(), "2.0");
    }
}
