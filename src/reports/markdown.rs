//! Markdown report generator.
//!
//! Produces a printable maturity report: profile table, score, category
//! table, narrative and numbered initiatives.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{AuditReport, ReportError, ReportFormat, ReportGenerator};
use std::fmt::Write;

/// Markdown report generator.
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, report: &AuditReport) -> Result<String, ReportError> {
        let result = &report.result;
        let profile = &report.profile;
        let mut md = String::new();

        writeln!(md, "# Infrastructure Maturity Report")?;
        writeln!(md)?;
        writeln!(md, "| Field | Value |")?;
        writeln!(md, "|-------|-------|")?;
        writeln!(md, "| Client | {} |", escape_markdown_table(&profile.company))?;
        writeln!(
            md,
            "| Contact | {} |",
            escape_markdown_table(&profile.representative())
        )?;
        writeln!(md, "| Auth ID | {} |", report.report_id)?;
        writeln!(
            md,
            "| Date | {} |",
            report.submitted_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(md, "| Engine | v{} |", report.scoring_engine_version)?;
        writeln!(md)?;

        writeln!(md, "## Score: {} / 10 ({} Maturity)", result.display_score(), result.maturity)?;
        writeln!(md)?;
        writeln!(md, "**Diagnostic Synthesis:** {}", result.maturity.synthesis())?;
        writeln!(md)?;

        writeln!(md, "## Actual Resilience vs Industry Leader Goal")?;
        writeln!(md)?;
        writeln!(md, "| Category | Score | Goal | Gap |")?;
        writeln!(md, "|----------|------:|-----:|----:|")?;
        for entry in &result.radar_data {
            writeln!(
                md,
                "| {} | {:.1} | {} | {:.1} |",
                entry.name,
                entry.score,
                entry.goal,
                entry.gap().max(0.0)
            )?;
        }
        writeln!(md)?;

        if let Some(analysis) = &result.ai_analysis {
            writeln!(md, "## AI Executive Summary")?;
            writeln!(md)?;
            // Narrative headers already use `###`, which nests under this section.
            writeln!(md, "{}", analysis.trim_end())?;
            writeln!(md)?;
        }

        writeln!(md, "## Priority Initiatives")?;
        writeln!(md)?;
        for (i, rec) in result.recommendations.iter().enumerate() {
            writeln!(
                md,
                "{:02}. **{}** ({}, {} Impact)",
                i + 1,
                escape_markdown_inline(&rec.title),
                rec.category,
                rec.impact
            )?;
            writeln!(md, "    {}", rec.description)?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerLevel;
    use crate::reports::test_support;

    #[test]
    fn test_markdown_report() {
        let report = test_support::report(AnswerLevel::Basic, None);
        let md = MarkdownReporter::new().generate(&report).unwrap();

        assert!(md.starts_with("# Infrastructure Maturity Report\n"));
        assert!(md.contains("| Client | Acme \\| Foods |"));
        assert!(md.contains("| Contact | Jane Doe (CMO) |"));
        assert!(md.contains("## Score: 2.0 / 10 (Low Maturity)"));
        assert!(md.contains("| Data Capture | 2.0 | 9 | 7.0 |"));
        assert!(md.contains("01. **Serialization Audit** (Foundation, High Impact)"));
        assert!(md.contains("04. **Smart Passports** (Compliance, Medium Impact)"));
        assert!(!md.contains("AI Executive Summary"));
    }

    #[test]
    fn test_markdown_narrative_section() {
        let report = test_support::report(AnswerLevel::Advanced, Some("### Outlook\nStrong.\n"));
        let md = MarkdownReporter::new().generate(&report).unwrap();

        assert!(md.contains("## AI Executive Summary\n\n### Outlook\nStrong.\n"));
        assert!(md.contains("01. **AI Predictive Flow**"));
    }
}
