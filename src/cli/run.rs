//! Run command handler.
//!
//! Implements the `run` subcommand: the interactive audit from the profile
//! step through to the results.

use super::interview::Interviewer;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, finish_submission, score_exit_code, AuditPipeline, Submission};
use crate::session::AuditSession;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Run the interactive audit, returning the desired exit code.
///
/// Prompts go to stderr so stdout carries only the report. The caller is
/// responsible for calling `std::process::exit()` with the returned code
/// when it is non-zero.
pub fn run_audit(config: &AppConfig, quiet: bool) -> Result<i32> {
    let pipeline = AuditPipeline::from_config(config);
    tracing::debug!(narrator = pipeline.narrator_name(), "starting audit");

    let stdin = std::io::stdin();
    let mut interviewer = Interviewer::new(stdin.lock(), std::io::stderr());
    let mut session = AuditSession::new();

    let Some(submission) = conduct(&mut interviewer, &mut session, &pipeline)? else {
        tracing::info!("Audit abandoned before submission");
        return Ok(exit_codes::SUCCESS);
    };

    let report = finish_submission(&config.output, submission, quiet)?;
    Ok(score_exit_code(report.result.overall_score, config.output.min_score))
}

/// Interview the respondent and process the submission.
///
/// Leaves `session` in [`crate::session::AuditStep::Results`] on success.
/// Returns `None` when the respondent quits.
pub fn conduct<R: BufRead, W: Write>(
    interviewer: &mut Interviewer<R, W>,
    session: &mut AuditSession,
    pipeline: &AuditPipeline,
) -> Result<Option<Submission>> {
    let Some(ticket) = interviewer.run(session)? else {
        return Ok(None);
    };

    let submission = pipeline.submit(&ticket);
    session.complete_submission(submission.report.result.clone())?;
    Ok(Some(submission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::StaticNarrator;
    use crate::session::AuditStep;
    use crate::telemetry::NullSink;
    use std::io::Cursor;
    use std::sync::Arc;

    fn pipeline() -> AuditPipeline {
        AuditPipeline::new(
            Box::new(StaticNarrator::new("### I. Position\nSteady.")),
            Arc::new(NullSink),
        )
    }

    #[test]
    fn test_conduct_reaches_results() {
        let input = format!(
            "Acme Foods\nJane Doe\nCMO\njane@acme.example\n\n{}",
            "3\n".repeat(20)
        );
        let mut interviewer = Interviewer::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut session = AuditSession::new();

        let submission = conduct(&mut interviewer, &mut session, &pipeline())
            .unwrap()
            .expect("submission");
        submission.delivery.wait();

        assert_eq!(session.step(), AuditStep::Results);
        assert_eq!(session.result(), Some(&submission.report.result));
        assert_eq!(submission.report.result.display_score(), "9.0");
        assert_eq!(
            submission.report.result.ai_analysis.as_deref(),
            Some("### I. Position\nSteady.")
        );
    }

    #[test]
    fn test_conduct_quit() {
        let input = "Acme Foods\nJane Doe\n\njane@acme.example\n\nq\n";
        let mut interviewer = Interviewer::new(Cursor::new(input.as_bytes()), Vec::new());
        let mut session = AuditSession::new();

        let outcome = conduct(&mut interviewer, &mut session, &pipeline()).unwrap();
        assert!(outcome.is_none());
        assert!(session.result().is_none());
    }
}
