//! Pipeline orchestration for audit submissions.
//!
//! This module provides the shared answers → score → narrative → deliver →
//! report workflow used by the CLI command handlers.

mod answers;
mod output;
mod report_id;
mod report_stage;
mod submit;

pub use answers::{load_answer_file, AnswerFile};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_id::{report_id, REPORT_ID_PREFIX};
pub use report_stage::{finish_submission, output_report};
pub use submit::{AuditPipeline, Submission, LOADING_MESSAGES};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an answer file
    #[error("Loading answers failed for {path}: {source}")]
    LoadFailed {
        path: String,
        source: anyhow::Error,
    },

    /// The answers could not be turned into a submission
    #[error("Submission rejected: {source}")]
    SubmissionRejected {
        #[source]
        source: crate::error::AuditError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for scripted use
pub mod exit_codes {
    /// Success (score at or above `--min-score`, or no threshold)
    pub const SUCCESS: i32 = 0;
    /// The overall score is below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Exit code for a score checked against an optional minimum.
#[must_use]
pub fn score_exit_code(overall_score: f64, min_score: Option<f64>) -> i32 {
    match min_score {
        Some(min) if overall_score < min => {
            tracing::warn!("Overall score {overall_score:.1} is below the minimum of {min:.1}");
            exit_codes::BELOW_MIN_SCORE
        }
        _ => exit_codes::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_MIN_SCORE, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_score_exit_code() {
        assert_eq!(score_exit_code(5.0, None), exit_codes::SUCCESS);
        assert_eq!(score_exit_code(5.0, Some(5.0)), exit_codes::SUCCESS);
        assert_eq!(score_exit_code(4.9, Some(5.0)), exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::LoadFailed {
            path: "answers.yaml".to_string(),
            source: anyhow::anyhow!("missing file"),
        };
        assert_eq!(
            err.to_string(),
            "Loading answers failed for answers.yaml: missing file"
        );
    }
}
