//! Answer-file loading.
//!
//! An answer file carries a profile and the raw answers of a finished
//! audit, so it can be scored without the interactive interview:
//!
//! ```yaml
//! profile:
//!   company: Acme Foods
//!   name: Jane Doe
//!   email: jane@acme.example
//! answers:
//!   strategic: [9, 5, 5, 2]
//!   operational: [5, 5, 5, 5, 9, 9, 2, 2]
//!   capabilities: [5, 5, 5, 5, 5, 5, 5, 5]
//! ```

use crate::error::{AnswerErrorKind, AuditError};
use crate::model::{AnswerSet, Section, UserProfile};
use crate::session::{AuditSession, SubmissionTicket};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile and answers as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFile {
    pub profile: UserProfile,
    pub answers: AnswerSet,
}

impl AnswerFile {
    /// Parse YAML or JSON content. JSON is a subset of YAML, so one parser
    /// covers both.
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Replay the file through an audit session and freeze it for
    /// submission.
    ///
    /// Fails with the same errors the interview would raise: invalid
    /// profile, wrong section length, or the first unanswered question.
    pub fn into_ticket(self) -> crate::error::Result<SubmissionTicket> {
        let mut session = AuditSession::new();
        session.set_profile(self.profile)?;
        session.advance()?;

        for section in Section::ALL {
            let answers = self.answers.section(section);
            if answers.len() != section.len() {
                return Err(AuditError::answers(
                    "reading answer file",
                    AnswerErrorKind::WrongLength {
                        section: section.to_string(),
                        expected: section.len(),
                        actual: answers.len(),
                    },
                ));
            }
            for (index, answer) in answers.iter().enumerate() {
                if let Some(level) = answer.level() {
                    session.answer(index, level)?;
                }
            }
            if section == Section::Capabilities {
                break;
            }
            session.advance()?;
        }
        session.begin_submission()
    }
}

/// Read and parse an answer file with context for error messages.
pub fn load_answer_file(path: &Path, quiet: bool) -> Result<AnswerFile> {
    if !quiet {
        tracing::info!("Loading answers: {:?}", path);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file: {}", path.display()))?;
    let file = AnswerFile::parse(&content)
        .with_context(|| format!("Failed to parse answer file: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} of {} answers for {}",
            file.answers.answered_count(),
            Section::ALL.iter().map(|s| s.len()).sum::<usize>(),
            file.profile.company
        );
    }
    Ok(file)
}
