//! Audit scorer and the result snapshot it produces.

use super::aggregate::{aggregate, CategoryScores};
use super::maturity::MaturityLevel;
use super::radar::{radar_data, RadarEntry};
use super::recommend::{recommend, Recommendation};
use crate::model::CompletedAnswers;
use serde::{Deserialize, Serialize};

/// Version of the scoring rules, reported alongside exported results.
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// The scored outcome of one audit.
///
/// Field names are camelCase on the wire so exported results and
/// telemetry payloads keep the shape existing consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct AuditResult {
    /// Mean of the nine category scores, unrounded
    pub overall_score: f64,
    pub maturity: MaturityLevel,
    /// Actual vs goal per category, in chart order
    pub radar_data: Vec<RadarEntry>,
    /// Recommendations in rule evaluation order
    pub recommendations: Vec<Recommendation>,
    /// Narrative analysis, attached after scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

impl AuditResult {
    /// Overall score rounded to one decimal for display.
    #[must_use]
    pub fn display_score(&self) -> String {
        format!("{:.1}", self.overall_score)
    }

    /// Attach the narrative analysis.
    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.ai_analysis = Some(analysis.into());
        self
    }

    /// Category scores recovered from the radar dataset.
    #[must_use]
    pub fn category_scores(&self) -> Vec<f64> {
        self.radar_data.iter().map(|e| e.score).collect()
    }
}

/// Pure scoring engine.
///
/// Holds no I/O collaborators; the narrative and telemetry calls live in
/// the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditScorer;

impl AuditScorer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score a fully answered survey.
    pub fn score(&self, answers: &CompletedAnswers) -> AuditResult {
        let categories = aggregate(answers);
        self.score_categories(&categories)
    }

    /// Score pre-aggregated category values.
    pub fn score_categories(&self, categories: &CategoryScores) -> AuditResult {
        let overall_score = categories.overall();
        let maturity = MaturityLevel::from_score(overall_score);
        tracing::debug!(overall_score, %maturity, "scored audit");

        AuditResult {
            overall_score,
            maturity,
            radar_data: radar_data(categories),
            recommendations: recommend(categories),
            ai_analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerLevel;

    fn titles(result: &AuditResult) -> Vec<&str> {
        result
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect()
    }

    #[test]
    fn test_all_intermediate() {
        let result = AuditScorer::new().score(&CompletedAnswers::uniform(AnswerLevel::Intermediate));
        assert_eq!(result.overall_score, 5.0);
        assert_eq!(result.maturity, MaturityLevel::Medium);
        assert!(result.radar_data.iter().all(|e| e.score == 5.0));
        assert_eq!(
            titles(&result),
            [
                "Serialization Audit",
                "Direct CRM Bridge",
                "Digital Authentication",
                "Smart Passports"
            ]
        );
    }

    #[test]
    fn test_all_advanced() {
        let result = AuditScorer::new().score(&CompletedAnswers::uniform(AnswerLevel::Advanced));
        assert_eq!(result.overall_score, 9.0);
        assert_eq!(result.maturity, MaturityLevel::High);
        assert_eq!(titles(&result), ["AI Predictive Flow"]);
    }

    #[test]
    fn test_all_basic() {
        let result = AuditScorer::new().score(&CompletedAnswers::uniform(AnswerLevel::Basic));
        assert_eq!(result.overall_score, 2.0);
        assert_eq!(result.maturity, MaturityLevel::Low);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_mixed_profile_without_triggered_rules() {
        let mut answers = CompletedAnswers::uniform(AnswerLevel::Basic);
        answers.strategic = [AnswerLevel::Advanced; 4];
        // Data Capture, Security, Engagement and Compliance pair indices 0, 2, 4, 5
        for i in [0, 2, 4, 5] {
            answers.operational[i] = AnswerLevel::Advanced;
            answers.capabilities[i] = AnswerLevel::Advanced;
        }
        let result = AuditScorer::new().score(&answers);

        assert_eq!(
            result.category_scores(),
            vec![9.0, 9.0, 2.0, 9.0, 2.0, 9.0, 9.0, 2.0, 2.0]
        );
        assert!((result.overall_score - 53.0 / 9.0).abs() < 1e-9);
        assert_eq!(result.maturity, MaturityLevel::Medium);
        assert_eq!(titles(&result), ["AI Predictive Flow"]);
        assert_eq!(result.display_score(), "5.9");
    }

    #[test]
    fn test_result_json_shape() {
        let result = AuditScorer::new()
            .score(&CompletedAnswers::uniform(AnswerLevel::Advanced))
            .with_analysis("### I. Summary");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallScore"], 9.0);
        assert_eq!(json["maturity"], "High");
        assert_eq!(json["radarData"][0]["name"], "Strategy");
        assert_eq!(json["radarData"][0]["goal"], 10.0);
        assert_eq!(json["recommendations"][0]["impact"], "Medium");
        assert_eq!(json["aiAnalysis"], "### I. Summary");
    }

    #[test]
    fn test_analysis_omitted_when_absent() {
        let result = AuditScorer::new().score(&CompletedAnswers::uniform(AnswerLevel::Basic));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("aiAnalysis").is_none());
    }
}
