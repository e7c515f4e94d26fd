//! Line-oriented audit interview.
//!
//! Drives an [`AuditSession`] from any `BufRead`/`Write` pair: the profile
//! prompts first, then the three survey sections one question at a time.

use crate::model::{questions_for, AnswerLevel, UserProfile};
use crate::session::{AuditSession, AuditStep, SubmissionTicket, TOTAL_STEPS};
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Width of the step progress bar, in cells.
const PROGRESS_WIDTH: usize = 24;

/// What the respondent typed at a question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Level(AnswerLevel),
    Back,
    Quit,
    Invalid,
}

fn parse_choice(input: &str) -> Choice {
    match input.trim().to_lowercase().as_str() {
        "1" => Choice::Level(AnswerLevel::Basic),
        "2" => Choice::Level(AnswerLevel::Intermediate),
        "3" => Choice::Level(AnswerLevel::Advanced),
        "b" | "back" => Choice::Back,
        "q" | "quit" => Choice::Quit,
        _ => Choice::Invalid,
    }
}

/// Outcome of walking one survey section.
enum SectionOutcome {
    Complete,
    Back,
    Quit,
}

/// Interactive interviewer over an input/output pair.
pub struct Interviewer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interviewer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the interviewer and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Walk `session` until submission.
    ///
    /// Returns `None` when the respondent quits. Running out of input before
    /// the audit is finished is an error.
    pub fn run(&mut self, session: &mut AuditSession) -> Result<Option<SubmissionTicket>> {
        writeln!(self.output, "Packaging Intelligence Audit")?;
        writeln!(self.output, "{}", "─".repeat(40))?;

        loop {
            self.print_step_header(session.step())?;
            match session.step() {
                AuditStep::ProfileEntry => {
                    let profile = self.prompt_profile(session.profile())?;
                    session.set_profile(profile)?;
                    if let Err(e) = session.advance() {
                        writeln!(self.output, "  ! {:#}", anyhow::Error::from(e))?;
                    }
                }
                AuditStep::StrategicSurvey
                | AuditStep::OperationalSurvey
                | AuditStep::CapabilitySurvey => match self.survey_section(session)? {
                    SectionOutcome::Quit => return Ok(None),
                    SectionOutcome::Back => {
                        session.back()?;
                    }
                    SectionOutcome::Complete => {
                        if session.step() == AuditStep::CapabilitySurvey {
                            return Ok(Some(session.begin_submission()?));
                        }
                        session.advance()?;
                    }
                },
                step @ (AuditStep::Submitting | AuditStep::Results) => {
                    bail!("the interview cannot continue from {step}")
                }
            }
        }
    }

    fn print_step_header(&mut self, step: AuditStep) -> Result<()> {
        let filled = step.number() * PROGRESS_WIDTH / TOTAL_STEPS;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Step {} of {TOTAL_STEPS} · {}  {}{}",
            step.number(),
            step.title(),
            "█".repeat(filled),
            "░".repeat(PROGRESS_WIDTH - filled)
        )?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the audit was finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for one field; an empty reply keeps `current`.
    fn prompt_field(&mut self, label: &str, current: &str) -> Result<String> {
        if current.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{current}]: ")?;
        }
        let reply = self.read_line()?;
        Ok(if reply.is_empty() {
            current.to_string()
        } else {
            reply
        })
    }

    fn prompt_profile(&mut self, current: &UserProfile) -> Result<UserProfile> {
        Ok(UserProfile {
            company: self.prompt_field("Company name*", &current.company)?,
            name: self.prompt_field("Full name*", &current.name)?,
            title: self.prompt_field("Job title", &current.title)?,
            email: self.prompt_field("Business e-mail*", &current.email)?,
            phone: self.prompt_field("Phone", &current.phone)?,
        })
    }

    fn survey_section(&mut self, session: &mut AuditSession) -> Result<SectionOutcome> {
        let section = session.active_section()?;
        let questions = questions_for(section);
        // Returning to a finished section resumes at its last question.
        let mut index = session
            .answers()
            .first_unanswered(section)
            .unwrap_or(questions.len() - 1);

        while index < questions.len() {
            let question = &questions[index];
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Q{}/{} {}",
                index + 1,
                questions.len(),
                question.text
            )?;
            writeln!(self.output, "  {}", question.explanation)?;
            for level in AnswerLevel::ALL {
                writeln!(self.output, "  {}) {}", level.ordinal() + 1, question.label(level))?;
            }
            if let Some(level) = session.answers().section(section)[index].level() {
                writeln!(self.output, "  (current: {})", question.label(level))?;
            }
            write!(self.output, "Choice [1-3, b=back, q=quit]: ")?;

            match parse_choice(&self.read_line()?) {
                Choice::Level(level) => {
                    session.answer(index, level)?;
                    writeln!(self.output, "  → {}", question.feedback(level))?;
                    index += 1;
                }
                Choice::Back if index > 0 => index -= 1,
                Choice::Back => return Ok(SectionOutcome::Back),
                Choice::Quit => return Ok(SectionOutcome::Quit),
                Choice::Invalid => writeln!(self.output, "  ! Please enter 1, 2 or 3.")?,
            }
        }

        Ok(SectionOutcome::Complete)
    }
}
