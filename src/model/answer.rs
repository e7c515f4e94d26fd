//! Survey answers and answer-set validation.
//!
//! Answers are `Unanswered` until the respondent picks one of the three
//! Likert levels. On the wire an answered item is its numeric score (2, 5
//! or 9) and an unanswered item is `null`; the legacy `-1` sentinel is
//! accepted on input.

use crate::error::{AnswerErrorKind, AuditError, Result};
use serde::{Deserialize, Serialize};

/// Number of questions in the strategic section.
pub const STRATEGIC_LEN: usize = 4;
/// Number of questions in the operational section.
pub const OPERATIONAL_LEN: usize = 8;
/// Number of questions in the capabilities section.
pub const CAPABILITIES_LEN: usize = 8;

/// One of the three discrete Likert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum AnswerLevel {
    /// Lowest maturity option (score 2)
    Basic,
    /// Middle option (score 5)
    Intermediate,
    /// Highest maturity option (score 9)
    Advanced,
}

impl AnswerLevel {
    /// All levels in display order.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Intermediate, Self::Advanced];

    /// Numeric score contributed by this level.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Basic => 2,
            Self::Intermediate => 5,
            Self::Advanced => 9,
        }
    }

    /// Position of this level among the three options (0..=2).
    ///
    /// Used to pick the matching label and feedback text of a question.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Basic => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Level for a 0-based option position.
    #[must_use]
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Basic),
            1 => Some(Self::Intermediate),
            2 => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Level for a numeric score.
    #[must_use]
    pub const fn from_score(score: i64) -> Option<Self> {
        match score {
            2 => Some(Self::Basic),
            5 => Some(Self::Intermediate),
            9 => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl TryFrom<i64> for AnswerLevel {
    type Error = AuditError;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_score(value).ok_or_else(|| {
            AuditError::answers("decoding answer", AnswerErrorKind::InvalidLevel(value))
        })
    }
}

impl From<AnswerLevel> for i64 {
    fn from(level: AnswerLevel) -> Self {
        i64::from(level.score())
    }
}

impl std::fmt::Display for AnswerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.score())
    }
}

/// A single survey answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<i64>", into = "Option<i64>")]
pub enum Answer {
    #[default]
    Unanswered,
    Answered(AnswerLevel),
}

impl Answer {
    /// The chosen level, if any.
    #[must_use]
    pub const fn level(self) -> Option<AnswerLevel> {
        match self {
            Self::Unanswered => None,
            Self::Answered(level) => Some(level),
        }
    }

    #[must_use]
    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

impl From<AnswerLevel> for Answer {
    fn from(level: AnswerLevel) -> Self {
        Self::Answered(level)
    }
}

impl TryFrom<Option<i64>> for Answer {
    type Error = AuditError;

    fn try_from(value: Option<i64>) -> Result<Self> {
        match value {
            None | Some(-1) => Ok(Self::Unanswered),
            Some(score) => AnswerLevel::try_from(score).map(Self::Answered),
        }
    }
}

impl From<Answer> for Option<i64> {
    fn from(answer: Answer) -> Self {
        answer.level().map(i64::from)
    }
}

/// The three survey sections, in survey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Strategic,
    Operational,
    Capabilities,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Strategic, Self::Operational, Self::Capabilities];

    /// Number of questions in this section.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Strategic => STRATEGIC_LEN,
            Self::Operational => OPERATIONAL_LEN,
            Self::Capabilities => CAPABILITIES_LEN,
        }
    }

    /// Heading shown while the section is being answered.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Strategic => "Strategic Posture",
            Self::Operational => "Operational Resiliency",
            Self::Capabilities => "Technical Capability",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strategic => "strategic",
            Self::Operational => "operational",
            Self::Capabilities => "capabilities",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable answers for all three sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub strategic: Vec<Answer>,
    pub operational: Vec<Answer>,
    pub capabilities: Vec<Answer>,
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSet {
    /// A fresh set with every question unanswered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategic: vec![Answer::Unanswered; STRATEGIC_LEN],
            operational: vec![Answer::Unanswered; OPERATIONAL_LEN],
            capabilities: vec![Answer::Unanswered; CAPABILITIES_LEN],
        }
    }

    /// Answers of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Answer] {
        match section {
            Section::Strategic => &self.strategic,
            Section::Operational => &self.operational,
            Section::Capabilities => &self.capabilities,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Answer> {
        match section {
            Section::Strategic => &mut self.strategic,
            Section::Operational => &mut self.operational,
            Section::Capabilities => &mut self.capabilities,
        }
    }

    /// Record an answer for question `index` of `section`.
    pub fn set(&mut self, section: Section, index: usize, answer: Answer) -> Result<()> {
        let slot = self.section_mut(section).get_mut(index).ok_or_else(|| {
            AuditError::answers(
                "recording answer",
                AnswerErrorKind::IndexOutOfRange {
                    section: section.to_string(),
                    index,
                },
            )
        })?;
        *slot = answer;
        Ok(())
    }

    /// Whether every question of `section` has been answered.
    #[must_use]
    pub fn is_complete(&self, section: Section) -> bool {
        self.first_unanswered(section).is_none()
    }

    /// Index of the first unanswered question in `section`.
    #[must_use]
    pub fn first_unanswered(&self, section: Section) -> Option<usize> {
        self.section(section).iter().position(|a| !a.is_answered())
    }

    /// Whether all three sections are complete.
    #[must_use]
    pub fn is_fully_answered(&self) -> bool {
        Section::ALL.iter().all(|&s| self.is_complete(s))
    }

    /// Convert into a [`CompletedAnswers`], failing on the first gap.
    pub fn complete(&self) -> Result<CompletedAnswers> {
        Ok(CompletedAnswers {
            strategic: collect_section(self.section(Section::Strategic), Section::Strategic)?,
            operational: collect_section(
                self.section(Section::Operational),
                Section::Operational,
            )?,
            capabilities: collect_section(
                self.section(Section::Capabilities),
                Section::Capabilities,
            )?,
        })
    }

    /// Number of answered questions across all sections.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        Section::ALL
            .iter()
            .map(|&s| self.section(s).iter().filter(|a| a.is_answered()).count())
            .sum()
    }
}

fn collect_section<const N: usize>(
    answers: &[Answer],
    section: Section,
) -> Result<[AnswerLevel; N]> {
    if answers.len() != N {
        return Err(AuditError::answers(
            "completing answers",
            AnswerErrorKind::WrongLength {
                section: section.to_string(),
                expected: N,
                actual: answers.len(),
            },
        ));
    }
    let mut levels = [AnswerLevel::Basic; N];
    for (index, (slot, answer)) in levels.iter_mut().zip(answers).enumerate() {
        *slot = answer
            .level()
            .ok_or_else(|| AuditError::unanswered(section.to_string(), index))?;
    }
    Ok(levels)
}

/// A fully answered survey; the input of the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedAnswers {
    pub strategic: [AnswerLevel; STRATEGIC_LEN],
    pub operational: [AnswerLevel; OPERATIONAL_LEN],
    pub capabilities: [AnswerLevel; CAPABILITIES_LEN],
}

impl CompletedAnswers {
    /// Every question answered with the same level.
    #[must_use]
    pub const fn uniform(level: AnswerLevel) -> Self {
        Self {
            strategic: [level; STRATEGIC_LEN],
            operational: [level; OPERATIONAL_LEN],
            capabilities: [level; CAPABILITIES_LEN],
        }
    }

    /// Answers of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[AnswerLevel] {
        match section {
            Section::Strategic => &self.strategic,
            Section::Operational => &self.operational,
            Section::Capabilities => &self.capabilities,
        }
    }

    /// Raw scores of one section, as sent to the narrative service.
    #[must_use]
    pub fn scores(&self, section: Section) -> Vec<u8> {
        self.section(section).iter().map(|l| l.score()).collect()
    }
}

impl From<CompletedAnswers> for AnswerSet {
    fn from(done: CompletedAnswers) -> Self {
        Self {
            strategic: done.strategic.iter().map(|&l| Answer::Answered(l)).collect(),
            operational: done.operational.iter().map(|&l| Answer::Answered(l)).collect(),
            capabilities: done.capabilities.iter().map(|&l| Answer::Answered(l)).collect(),
        }
    }
}
