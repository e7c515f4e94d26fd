//! The audit session state machine.

use super::step::{AuditStep, TOTAL_STEPS};
use crate::error::{AnswerErrorKind, AuditError, Result, SessionErrorKind};
use crate::model::{AnswerLevel, AnswerSet, CompletedAnswers, Section, UserProfile};
use crate::scoring::AuditResult;
use chrono::{DateTime, Utc};

/// Snapshot handed out when submission begins.
///
/// Holds everything the pipeline needs; the session itself stays frozen in
/// [`AuditStep::Submitting`] until the result comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub profile: UserProfile,
    pub answers: CompletedAnswers,
    pub submitted_at: DateTime<Utc>,
}

/// One respondent's walk through the audit.
#[derive(Debug, Clone, Default)]
pub struct AuditSession {
    step: AuditStep,
    profile: UserProfile,
    answers: AnswerSet,
    result: Option<AuditResult>,
}

impl AuditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> AuditStep {
        self.step
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The scored result, once the session reached [`AuditStep::Results`].
    #[must_use]
    pub const fn result(&self) -> Option<&AuditResult> {
        self.result.as_ref()
    }

    /// Fraction of the four user-facing steps reached, in `0.25..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / TOTAL_STEPS as f64
    }

    /// Replace the profile. Only allowed while on the profile step.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        if self.step != AuditStep::ProfileEntry {
            return Err(AuditError::illegal_transition("edit profile", self.step));
        }
        self.profile = profile;
        Ok(())
    }

    /// Record an answer for question `index` of the active section.
    pub fn answer(&mut self, index: usize, level: AnswerLevel) -> Result<()> {
        let section = self.active_section()?;
        if index >= section.len() {
            return Err(AuditError::answers(
                "answering question",
                AnswerErrorKind::IndexOutOfRange {
                    section: section.to_string(),
                    index,
                },
            ));
        }
        self.answers.set(section, index, level.into())
    }

    /// The section answered at the current step.
    pub fn active_section(&self) -> Result<Section> {
        self.step.section().ok_or_else(|| {
            AuditError::session(
                "selecting section",
                SessionErrorKind::NoActiveSection(self.step.to_string()),
            )
        })
    }

    /// Whether the current step's requirements are met.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.check_current_step().is_ok()
    }

    /// Move to the next step.
    ///
    /// The profile step requires a valid profile; survey steps require every
    /// question of their section answered. The capability survey is left via
    /// [`Self::begin_submission`] instead.
    pub fn advance(&mut self) -> Result<AuditStep> {
        let next = self
            .step
            .next()
            .ok_or_else(|| AuditError::illegal_transition("advance", self.step))?;
        self.check_current_step()?;
        tracing::debug!(from = %self.step, to = %next, "advancing audit");
        self.step = next;
        Ok(next)
    }

    /// Return to the previous step. Answers are kept.
    pub fn back(&mut self) -> Result<AuditStep> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| AuditError::illegal_transition("go back", self.step))?;
        self.step = previous;
        Ok(previous)
    }

    /// Freeze the session and hand out the submission snapshot.
    ///
    /// Only valid from the capability survey with all sections complete.
    /// There is no way back to the survey once this succeeds, other than
    /// [`Self::reset`].
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket> {
        if self.step != AuditStep::CapabilitySurvey {
            return Err(AuditError::illegal_transition("submit", self.step));
        }
        self.check_current_step()?;
        let answers = self.answers.complete()?;
        self.step = AuditStep::Submitting;
        tracing::info!(company = %self.profile.company, "audit submitted");

        Ok(SubmissionTicket {
            profile: self.profile.clone(),
            answers,
            submitted_at: Utc::now(),
        })
    }

    /// Store the scored result and show it.
    pub fn complete_submission(&mut self, result: AuditResult) -> Result<()> {
        if self.step != AuditStep::Submitting {
            return Err(AuditError::illegal_transition("complete submission", self.step));
        }
        self.result = Some(result);
        self.step = AuditStep::Results;
        Ok(())
    }

    /// Discard everything and start over at the profile step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_current_step(&self) -> Result<()> {
        match self.step.section() {
            None if self.step == AuditStep::ProfileEntry => self.profile.validate(),
            None => Ok(()),
            Some(section) => match self.answers.first_unanswered(section) {
                None => Ok(()),
                Some(index) => Err(AuditError::session(
                    format!("leaving {}", self.step),
                    SessionErrorKind::Incomplete(format!(
                        "{} question {} is unanswered",
                        section.title(),
                        index + 1
                    )),
                )),
            },
        }
    }
}
