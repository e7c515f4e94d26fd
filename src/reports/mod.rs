//! Report generation for scored audits.
//!
//! This module renders an [`AuditReport`] in several formats:
//! - Summary: colored terminal output
//! - JSON: the full report for programmatic use
//! - Markdown: a printable report
//!
//! The interactive dashboard lives in [`crate::tui`].
//!
//! # Security
//!
//! Profile fields are respondent-supplied; the [`escape`] module must be
//! used before embedding them in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{AuditReport, ReportFormat};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a finished audit
    fn generate(&self, report: &AuditReport) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(&self, report: &AuditReport, writer: &mut dyn Write) -> Result<(), ReportError> {
        let text = self.generate(report)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary | ReportFormat::Tui => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AuditReport;
    use crate::model::{AnswerLevel, CompletedAnswers, UserProfile};
    use crate::scoring::AuditScorer;
    use crate::session::SubmissionTicket;
    use chrono::{TimeZone, Utc};

    pub fn profile() -> UserProfile {
        UserProfile {
            company: "Acme | Foods".to_string(),
            name: "Jane Doe".to_string(),
            title: "CMO".to_string(),
            email: "jane@acme.example".to_string(),
            phone: String::new(),
        }
    }

    pub fn report(level: AnswerLevel, analysis: Option<&str>) -> AuditReport {
        let answers = CompletedAnswers::uniform(level);
        let ticket = SubmissionTicket {
            profile: profile(),
            answers,
            submitted_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap(),
        };
        let mut result = AuditScorer::new().score(&answers);
        if let Some(text) = analysis {
            result = result.with_analysis(text);
        }
        AuditReport::from_submission(&ticket, result)
    }
}
