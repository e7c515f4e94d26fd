//! Threshold rules that turn category scores into recommendations.

use super::aggregate::CategoryScores;
use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Categories scoring strictly below this trigger their rule.
pub const RECOMMENDATION_THRESHOLD: f64 = 6.0;

/// Minimum number of recommendations before the catch-all is appended.
pub const MIN_RECOMMENDATIONS: usize = 2;

/// Expected impact of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Thematic tag attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationTag {
    Foundation,
    Growth,
    Security,
    Compliance,
    Advanced,
}

impl RecommendationTag {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Growth => "Growth",
            Self::Security => "Security",
            Self::Compliance => "Compliance",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for RecommendationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An actionable improvement for the audited brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: RecommendationTag,
    pub impact: Impact,
}

/// Static recommendation content.
#[derive(Debug, Clone, Copy)]
struct Template {
    title: &'static str,
    description: &'static str,
    tag: RecommendationTag,
    impact: Impact,
}

impl Template {
    fn build(&self) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.tag,
            impact: self.impact,
        }
    }
}

/// A threshold rule: fires when `trigger` scores below the threshold.
#[derive(Debug, Clone, Copy)]
struct Rule {
    trigger: Category,
    template: Template,
}

/// Threshold rules in evaluation order.
const RULES: [Rule; 4] = [
    Rule {
        trigger: Category::DataCapture,
        template: Template {
            title: "Serialization Audit",
            description: "Deploy unit-level unique IDs (UIDs) to establish the Luban Lock foundation for tracking.",
            tag: RecommendationTag::Foundation,
            impact: Impact::High,
        },
    },
    Rule {
        trigger: Category::Engagement,
        template: Template {
            title: "Direct CRM Bridge",
            description: "Utilize the Mark of Authenticity to own 1st-party data instead of relying on retailer reports.",
            tag: RecommendationTag::Growth,
            impact: Impact::High,
        },
    },
    Rule {
        trigger: Category::Security,
        template: Template {
            title: "Digital Authentication",
            description: "Layer encrypted digital signatures to eliminate the risk of structural replication.",
            tag: RecommendationTag::Security,
            impact: Impact::High,
        },
    },
    Rule {
        trigger: Category::Compliance,
        template: Template {
            title: "Smart Passports",
            description: "Automate material tracking to meet emerging global ESG regulations without manual overhead.",
            tag: RecommendationTag::Compliance,
            impact: Impact::Medium,
        },
    },
];

const CATCH_ALL: Template = Template {
    title: "AI Predictive Flow",
    description: "Integrate scan-velocity data into predictive demand models for surgical supply chain rerouting.",
    tag: RecommendationTag::Advanced,
    impact: Impact::Medium,
};

/// Evaluate every threshold rule in order, then pad with the catch-all
/// when fewer than [`MIN_RECOMMENDATIONS`] fired.
#[must_use]
pub fn recommend(scores: &CategoryScores) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| scores.get(rule.trigger) < RECOMMENDATION_THRESHOLD)
        .map(|rule| rule.template.build())
        .collect();

    if recs.len() < MIN_RECOMMENDATIONS {
        recs.push(CATCH_ALL.build());
    }
    recs
}
