//! Steps of the audit flow.

use crate::model::Section;
use serde::{Deserialize, Serialize};

/// Number of user-facing steps (profile plus three survey sections).
pub const TOTAL_STEPS: usize = 4;

/// Where the respondent currently is in the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuditStep {
    #[default]
    ProfileEntry,
    StrategicSurvey,
    OperationalSurvey,
    CapabilitySurvey,
    Submitting,
    Results,
}

impl AuditStep {
    /// Heading shown for the step.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ProfileEntry => "Executive Identification",
            Self::StrategicSurvey => Section::Strategic.title(),
            Self::OperationalSurvey => Section::Operational.title(),
            Self::CapabilitySurvey => Section::Capabilities.title(),
            Self::Submitting => "Synthesizing Report",
            Self::Results => "Audit Results",
        }
    }

    /// 1-based step number; the two terminal states count as the last step.
    #[must_use]
    pub const fn number(&self) -> usize {
        match self {
            Self::ProfileEntry => 1,
            Self::StrategicSurvey => 2,
            Self::OperationalSurvey => 3,
            Self::CapabilitySurvey | Self::Submitting | Self::Results => TOTAL_STEPS,
        }
    }

    /// The survey section answered at this step.
    #[must_use]
    pub const fn section(&self) -> Option<Section> {
        match self {
            Self::StrategicSurvey => Some(Section::Strategic),
            Self::OperationalSurvey => Some(Section::Operational),
            Self::CapabilitySurvey => Some(Section::Capabilities),
            _ => None,
        }
    }

    /// Step reached by `advance`, if any.
    pub(crate) const fn next(self) -> Option<Self> {
        match self {
            Self::ProfileEntry => Some(Self::StrategicSurvey),
            Self::StrategicSurvey => Some(Self::OperationalSurvey),
            Self::OperationalSurvey => Some(Self::CapabilitySurvey),
            _ => None,
        }
    }

    /// Step reached by `back`, if any.
    pub(crate) const fn previous(self) -> Option<Self> {
        match self {
            Self::StrategicSurvey => Some(Self::ProfileEntry),
            Self::OperationalSurvey => Some(Self::StrategicSurvey),
            Self::CapabilitySurvey => Some(Self::OperationalSurvey),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuditStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ProfileEntry => "profile entry",
            Self::StrategicSurvey => "strategic survey",
            Self::OperationalSurvey => "operational survey",
            Self::CapabilitySurvey => "capability survey",
            Self::Submitting => "submitting",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_are_inverse() {
        let mut step = AuditStep::ProfileEntry;
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
        }
        assert_eq!(step, AuditStep::CapabilitySurvey);
    }

    #[test]
    fn test_titles() {
        assert_eq!(AuditStep::ProfileEntry.title(), "Executive Identification");
        assert_eq!(AuditStep::OperationalSurvey.title(), "Operational Resiliency");
    }

    #[test]
    fn test_terminal_steps_have_no_section() {
        assert_eq!(AuditStep::Submitting.section(), None);
        assert_eq!(AuditStep::Results.section(), None);
        assert_eq!(AuditStep::ProfileEntry.section(), None);
    }
}
