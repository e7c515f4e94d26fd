//! Submission payload sent to telemetry sinks.

use crate::model::{AnswerSet, CompletedAnswers, UserProfile};
use crate::scoring::AuditResult;
use serde::{Deserialize, Serialize};

/// Everything recorded about one completed audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub profile: UserProfile,
    /// Raw answers, as 2/5/9 per question
    pub scores: AnswerSet,
    pub result: AuditResult,
}

impl SubmissionPayload {
    #[must_use]
    pub fn new(profile: UserProfile, answers: CompletedAnswers, result: AuditResult) -> Self {
        Self {
            profile,
            scores: answers.into(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerLevel;
    use crate::scoring::AuditScorer;

    #[test]
    fn test_payload_shape() {
        let answers = CompletedAnswers::uniform(AnswerLevel::Intermediate);
        let result = AuditScorer::new().score(&answers);
        let payload = SubmissionPayload::new(UserProfile::default(), answers, result);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["scores"]["strategic"], serde_json::json!([5, 5, 5, 5]));
        assert_eq!(json["scores"]["capabilities"].as_array().unwrap().len(), 8);
        assert_eq!(json["result"]["overallScore"], 5.0);
        assert_eq!(json["profile"]["company"], "");
    }
}
