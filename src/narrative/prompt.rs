//! Prompt construction for the narrative service.

use super::traits::NarrativeRequest;
use crate::model::Section;

fn join_scores(request: &NarrativeRequest<'_>, section: Section) -> String {
    request
        .answers
        .scores(section)
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the analysis prompt for one audit.
#[must_use]
pub fn build_prompt(request: &NarrativeRequest<'_>) -> String {
    let profile = request.profile;
    let company = profile.company.trim();

    format!(
        "Act as a senior Supply Chain Data Architect and Global Brand Custodian for Trustori.
Analyze the following packaging infrastructure audit data for:
Client: {company}
Representative: {representative}

Data Context (Scores 1-10, where 10 is Industry Best Practice):
- Maturity Classification: {maturity}
- Aggregate Performance Score: {score:.1}/10
- Strategic Readiness (Leadership Mindset): {strategic}
- Operational Resilience (Risk Mitigation): {operational}
- System Interoperability (Capabilities): {capabilities}

Provide a structured strategic roadmap in exactly three sections using Markdown:

### I. EXECUTIVE POSTURE
Describe where {company} sits relative to Fortune 500 leaders. Be authoritative. If scores are low, emphasize the competitive disadvantage of \"Blind Packaging\". If high, emphasize the opportunity for \"Market Dominance through Data\".

### II. CRITICAL RISK VECTOR
Pinpoint the single most dangerous gap in their current data loop (e.g., lack of 1st-party data, vulnerability to grey markets, or manual compliance burdens). Explain the financial and brand reputation cost of inaction.

### III. THE TRUSTORI ADVANTAGE: FIRST MOVE
Provide a concrete, actionable \"First 90 Days\" recommendation. Focus on shifting packaging from a \"Static Cost Center\" to an \"Active Data Asset\". Use bold headers for key terms.

Tone: Sophisticated, urgent but professional, visionary. Do not use generic AI greetings or conclusions.
",
        representative = profile.representative(),
        maturity = request.maturity,
        score = request.overall_score,
        strategic = join_scores(request, Section::Strategic),
        operational = join_scores(request, Section::Operational),
        capabilities = join_scores(request, Section::Capabilities),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLevel, CompletedAnswers, UserProfile};
    use crate::scoring::MaturityLevel;

    #[test]
    fn test_prompt_carries_audit_data() {
        let profile = UserProfile {
            company: "Acme Foods".to_string(),
            name: "Sam Lee".to_string(),
            title: "COO".to_string(),
            email: "sam@acme.example".to_string(),
            phone: String::new(),
        };
        let mut answers = CompletedAnswers::uniform(AnswerLevel::Intermediate);
        answers.strategic[0] = AnswerLevel::Advanced;
        let request = NarrativeRequest {
            profile: &profile,
            answers: &answers,
            maturity: MaturityLevel::Medium,
            overall_score: 5.444,
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("Client: Acme Foods"));
        assert!(prompt.contains("Representative: Sam Lee (COO)"));
        assert!(prompt.contains("Maturity Classification: Medium"));
        assert!(prompt.contains("Aggregate Performance Score: 5.4/10"));
        assert!(prompt.contains("(Leadership Mindset): 9, 5, 5, 5\n"));
        assert!(prompt.contains("(Capabilities): 5, 5, 5, 5, 5, 5, 5, 5\n"));
        assert!(prompt.contains("### I. EXECUTIVE POSTURE"));
        assert!(prompt.contains("### III. THE TRUSTORI ADVANTAGE: FIRST MOVE"));
        assert!(prompt.contains("Describe where Acme Foods sits"));
    }
}
