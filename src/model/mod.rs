//! Audit data model.
//!
//! Respondent profile, survey answers, the question bank, and the
//! categories the answers are scored into.

mod answer;
mod category;
mod profile;
mod questions;

pub use answer::{
    Answer, AnswerLevel, AnswerSet, CompletedAnswers, Section, CAPABILITIES_LEN, OPERATIONAL_LEN,
    STRATEGIC_LEN,
};
pub use category::{Category, CategorySource, CATEGORY_COUNT, CATEGORY_GOALS, CATEGORY_SOURCES};
pub use profile::UserProfile;
pub use questions::{
    questions_for, Question, CAPABILITY_QUESTIONS, OPERATIONAL_QUESTIONS, STRATEGIC_QUESTIONS,
};
