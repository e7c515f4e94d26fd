//! Score command handler.
//!
//! Implements the `score` subcommand: scores a saved answer file without
//! the interview.

use crate::config::AppConfig;
use crate::pipeline::{
    finish_submission, load_answer_file, score_exit_code, AuditPipeline, PipelineError,
};
use anyhow::Result;
use std::path::Path;

/// Score an answer file, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(answers_path: &Path, config: &AppConfig, quiet: bool) -> Result<i32> {
    let file = load_answer_file(answers_path, quiet).map_err(|source| PipelineError::LoadFailed {
        path: answers_path.display().to_string(),
        source,
    })?;
    let ticket = file
        .into_ticket()
        .map_err(|source| PipelineError::SubmissionRejected { source })?;

    let pipeline = AuditPipeline::from_config(config);
    let submission = pipeline.submit(&ticket);

    let report = finish_submission(&config.output, submission, quiet)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(score_exit_code(report.result.overall_score, config.output.min_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use crate::reports::ReportFormat;

    const ANSWERS: &str = "\
profile:
  company: Acme Foods
  name: Jane Doe
  email: jane@acme.example
answers:
  strategic: [5, 5, 5, 5]
  operational: [5, 5, 5, 5, 5, 5, 5, 5]
  capabilities: [5, 5, 5, 5, 5, 5, 5, 5]
";

    fn offline_json(dir: &Path, min_score: Option<f64>) -> AppConfig {
        let mut config = AppConfig::offline_preset();
        config.output.format = ReportFormat::Json;
        config.output.file = Some(dir.join("report.json"));
        config.output.min_score = min_score;
        config
    }

    #[test]
    fn test_score_answer_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, ANSWERS).unwrap();

        let config = offline_json(dir.path(), Some(4.5));
        let code = run_score(&path, &config, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
                .unwrap();
        assert_eq!(report["result"]["maturity"], "Medium");
        assert_eq!(report["profile"]["company"], "Acme Foods");
        assert!(report["result"]["aiAnalysis"].is_null());
    }

    #[test]
    fn test_score_below_minimum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, ANSWERS).unwrap();

        let config = offline_json(dir.path(), Some(7.5));
        assert_eq!(
            run_score(&path, &config, true).unwrap(),
            exit_codes::BELOW_MIN_SCORE
        );
    }

    #[test]
    fn test_score_incomplete_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, ANSWERS.replace("[5, 5, 5, 5]\n", "[5, null, 5, 5]\n")).unwrap();

        let err = run_score(&path, &offline_json(dir.path(), None), true).unwrap_err();
        let pipeline_err = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert!(matches!(pipeline_err, PipelineError::SubmissionRejected { .. }));
    }

    #[test]
    fn test_score_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_score(
            &dir.path().join("absent.yaml"),
            &offline_json(dir.path(), None),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Loading answers failed for"));
    }
}
