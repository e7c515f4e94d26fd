//! JSON report generator.

use super::{AuditReport, ReportError, ReportFormat, ReportGenerator};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &AuditReport) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerLevel;
    use crate::reports::test_support;

    #[test]
    fn test_json_shape() {
        let report = test_support::report(AnswerLevel::Intermediate, Some("### Outlook\nSteady."));
        let text = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["reportId"], report.report_id.as_str());
        assert_eq!(value["scoringEngineVersion"], "1.0");
        assert_eq!(value["profile"]["company"], "Acme | Foods");
        assert_eq!(value["scores"]["strategic"][0], 5);
        assert_eq!(value["result"]["overallScore"], 5.0);
        assert_eq!(value["result"]["maturity"], "Medium");
        assert_eq!(value["result"]["radarData"].as_array().unwrap().len(), 9);
        assert_eq!(value["result"]["aiAnalysis"], "### Outlook\nSteady.");
    }

    #[test]
    fn test_compact_json_parses_back() {
        let report = test_support::report(AnswerLevel::Basic, None);
        let text = JsonReporter::new().pretty(false).generate(&report).unwrap();
        assert!(!text.contains('\n'));

        let parsed: AuditReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
        assert!(parsed.result.ai_analysis.is_none());
    }
}
