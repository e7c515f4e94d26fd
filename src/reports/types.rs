//! Report type definitions.

use crate::model::{AnswerSet, UserProfile};
use crate::scoring::{AuditResult, SCORING_ENGINE_VERSION};
use crate::session::SubmissionTicket;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive results dashboard
    Tui,
    /// Colored terminal summary
    Summary,
    /// Structured JSON output
    Json,
    /// Printable Markdown report
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// A finished audit, as rendered by every reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Short identifier shown on the report (`TRX-…`)
    pub report_id: String,
    pub submitted_at: DateTime<Utc>,
    pub scoring_engine_version: String,
    pub profile: UserProfile,
    /// Raw answers
    pub scores: AnswerSet,
    pub result: AuditResult,
}

impl AuditReport {
    /// Assemble the report for a scored submission.
    pub fn from_submission(ticket: &SubmissionTicket, result: AuditResult) -> Self {
        Self {
            report_id: crate::pipeline::report_id(&ticket.profile, ticket.submitted_at),
            submitted_at: ticket.submitted_at,
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            profile: ticket.profile.clone(),
            scores: ticket.answers.into(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_serde_names() {
        let format: ReportFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, ReportFormat::Markdown);
        assert_eq!(serde_json::to_string(&ReportFormat::Tui).unwrap(), "\"tui\"");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
