//! The audit question bank.
//!
//! Each question offers three options mapped to [`AnswerLevel`]s, with a
//! label and a feedback line per option.

use super::answer::{AnswerLevel, Section};
use serde::Serialize;

/// A single Likert question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub explanation: &'static str,
    pub labels: [&'static str; 3],
    pub feedbacks: [&'static str; 3],
}

impl Question {
    /// Option label for a level.
    #[must_use]
    pub const fn label(&self, level: AnswerLevel) -> &'static str {
        self.labels[level.ordinal()]
    }

    /// Feedback line shown after choosing a level.
    #[must_use]
    pub const fn feedback(&self, level: AnswerLevel) -> &'static str {
        self.feedbacks[level.ordinal()]
    }
}

/// Questions of a section, in answer order.
#[must_use]
pub const fn questions_for(section: Section) -> &'static [Question] {
    match section {
        Section::Strategic => &STRATEGIC_QUESTIONS,
        Section::Operational => &OPERATIONAL_QUESTIONS,
        Section::Capabilities => &CAPABILITY_QUESTIONS,
    }
}

pub const STRATEGIC_QUESTIONS: [Question; 4] = [
    Question {
        id: "a1",
        text: "How critical is direct 1st-party consumer data to your brand's future growth?",
        explanation: "Evaluates if you rely on retail partners or seek direct relationships with end-users for revenue growth.",
        labels: ["Low Priority", "Moderate", "Critical Focus"],
        feedbacks: [
            "Data isn't a core focus currently.",
            "Important, but secondary to sales.",
            "Data drives our entire business strategy.",
        ],
    },
    Question {
        id: "a2",
        text: "Is packaging viewed by leadership as a digital asset or just a physical cost?",
        explanation: "Is packaging leveraged as a digital touchpoint for marketing and data collection?",
        labels: ["Sunk Cost", "Informational", "Digital Asset"],
        feedbacks: [
            "Packaging is just a protective shell.",
            "We use it for basic info.",
            "Packaging is a critical digital touchpoint.",
        ],
    },
    Question {
        id: "a3",
        text: "How urgently do you need to address grey market diversion or counterfeiting?",
        explanation: "Assessment of brand protection risks and revenue loss from unauthorized sales.",
        labels: ["Not Concerned", "Monitoring", "High Urgency"],
        feedbacks: [
            "Not a major issue currently.",
            "We are monitoring instances.",
            "Impacts revenue/brand significantly.",
        ],
    },
    Question {
        id: "a4",
        text: "Is automated ESG and Compliance tracking a strategic priority?",
        explanation: "Evaluates the need for real-time origin, material, and lifecycle tracking.",
        labels: ["Not Priority", "Exploring", "Top Priority"],
        feedbacks: [
            "Handled manually or reactively.",
            "Looking into digitization.",
            "Top strategic priority.",
        ],
    },
];

pub const OPERATIONAL_QUESTIONS: [Question; 8] = [
    Question {
        id: "p1",
        text: "Do you know who buys your product?",
        explanation: "Evaluates ownership of direct 1st-party consumer data.",
        labels: ["Retailer Data", "Anonymous", "Direct 1st Party"],
        feedbacks: [
            "Blind (Retailer owns data)",
            "Hazy (Web traffic only)",
            "Visible (Direct insights)",
        ],
    },
    Question {
        id: "p2",
        text: "Can you instantly spot diverted stock?",
        explanation: "Visibility into Grey Market activities.",
        labels: ["No Visibility", "Manual Check", "Real-Time Alerts"],
        feedbacks: ["Unknown visibility", "Reactive checks", "Controlled alerts"],
    },
    Question {
        id: "p3",
        text: "Is your security easy to replicate?",
        explanation: "Barrier to entry for counterfeiters.",
        labels: ["Simple Print", "Hologram", "Digital Layer"],
        feedbacks: [
            "High Risk (Print/Sticker)",
            "Moderate (Hologram)",
            "Secure (Digital layer)",
        ],
    },
    Question {
        id: "p4",
        text: "Can you recall specific bad units?",
        explanation: "Precision of recall capabilities.",
        labels: ["Full Batch", "Lot Level", "Unit Level"],
        feedbacks: [
            "Wasteful (Full batch)",
            "Segmented (Lot level)",
            "Surgical (Unit isolation)",
        ],
    },
    Question {
        id: "p5",
        text: "Is your packaging a sunk cost?",
        explanation: "Turning static labels into active assets.",
        labels: ["Static Label", "Info Link", "Active Asset"],
        feedbacks: ["Sunk Cost", "Informational", "Loyalty Generator"],
    },
    Question {
        id: "p6",
        text: "Are audits manual and painful?",
        explanation: "Efficiency of compliance and reporting.",
        labels: ["Manual", "Digital Docs", "Automated"],
        feedbacks: ["Manual (High risk)", "Batch reports", "Automated (Passports)"],
    },
    Question {
        id: "p7",
        text: "Is your green impact measurable?",
        explanation: "Ability to prove sustainability claims.",
        labels: ["Unmeasured", "Estimates", "Unit Proven"],
        feedbacks: [
            "Greenwashing risk",
            "Estimated averages",
            "Unit-level tracking",
        ],
    },
    Question {
        id: "p8",
        text: "Can you reroute stock instantly?",
        explanation: "Supply chain agility and visibility.",
        labels: ["Frozen", "Delayed", "Agile"],
        feedbacks: ["Slow (Frozen)", "Delayed reviews", "Agile rerouting"],
    },
];

pub const CAPABILITY_QUESTIONS: [Question; 8] = [
    Question {
        id: "s1",
        text: "Do you capture direct consumer emails?",
        explanation: "Capability to harvest contact info via packaging.",
        labels: ["None", "Passive Web", "CRM Sync"],
        feedbacks: ["No data flow", "Passive traffic", "Active CRM integration"],
    },
    Question {
        id: "s2",
        text: "How granular is your location tracking?",
        explanation: "Depth of visibility across the chain.",
        labels: ["Warehouse", "Milestone", "Real-Time Unit"],
        feedbacks: [
            "Warehouse only",
            "Milestone scanning",
            "Real-time unit tracking",
        ],
    },
    Question {
        id: "s3",
        text: "How strong is your authentication?",
        explanation: "Technology verifying product authenticity.",
        labels: ["Weak/None", "Basic QR", "Encrypted"],
        feedbacks: ["No digital layer", "Basic QR", "Robust encrypted layer"],
    },
    Question {
        id: "s4",
        text: "Is each unit uniquely identified?",
        explanation: "Level of serialization maturity.",
        labels: ["Batch/SKU", "Case Level", "Unique Item ID"],
        feedbacks: ["Batch/SKU only", "Case/Pallet ID", "Unique ID per unit"],
    },
    Question {
        id: "s5",
        text: "Does your engagement drive loyalty?",
        explanation: "Effectiveness of post-purchase interaction.",
        labels: ["No Incentive", "Generic Info", "Rewards"],
        feedbacks: ["No incentives", "Standard info", "Personalized rewards"],
    },
    Question {
        id: "s6",
        text: "Is your compliance automated?",
        explanation: "Digital Product Passport readiness.",
        labels: ["Paper", "Digital PDF", "Smart Data"],
        feedbacks: ["Paper-based", "Digital archives", "Smart data exchange"],
    },
    Question {
        id: "s7",
        text: "Do you have material lifecycle data?",
        explanation: "Circular economy readiness and tracing.",
        labels: ["Estimates", "Batch Certs", "Circular Trace"],
        feedbacks: [
            "Estimates only",
            "Batch certificates",
            "End-to-end circular trace",
        ],
    },
    Question {
        id: "s8",
        text: "Are you making real-time decisions?",
        explanation: "Data latency and decision intelligence.",
        labels: ["Old Reports", "Dashboard", "Predictive AI"],
        feedbacks: ["Lagged reports", "Live dashboards", "Predictive AI-driven"],
    },
];
