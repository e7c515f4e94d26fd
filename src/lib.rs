//! **Packaging intelligence maturity audit.**
//!
//! `packaging-audit` interviews a brand executive about how their packaging
//! captures consumer data, scores the twenty answers into nine capability
//! categories, and reports the overall maturity level together with a set
//! of priority initiatives and an optional AI-written executive summary.
//!
//! It powers both a command-line interface for running the audit and a
//! Rust library for embedding the scoring engine elsewhere.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the respondent profile, the question bank and answer
//!   sets. [`AnswerSet`] holds answers while they are being collected;
//!   [`CompletedAnswers`] is the fully answered form the scorer accepts.
//! - **[`scoring`]**: the [`AuditScorer`], which derives category scores,
//!   the overall score, the [`MaturityLevel`] and the recommendations.
//! - **[`session`]**: the [`AuditSession`] state machine that gates each
//!   step of the interview.
//! - **[`narrative`]**: the [`NarrativeGenerator`] trait and the Gemini
//!   client. Failures never block a result.
//! - **[`telemetry`]**: [`SubmissionSink`]s that deliver each submission to
//!   a webhook or a local log, off the main thread.
//! - **[`pipeline`]**: the [`AuditPipeline`] tying scoring, narrative and
//!   delivery together, plus report output.
//! - **[`reports`]**: summary, JSON and Markdown reporters.
//!
//! ## Getting Started: Scoring Answers
//!
//! ```
//! use packaging_audit::{AnswerLevel, AuditScorer, CompletedAnswers, MaturityLevel};
//!
//! let answers = CompletedAnswers::uniform(AnswerLevel::Intermediate);
//! let result = AuditScorer::new().score(&answers);
//!
//! assert_eq!(result.display_score(), "5.0");
//! assert_eq!(result.maturity, MaturityLevel::Medium);
//! for rec in &result.recommendations {
//!     println!("{} ({} impact)", rec.title, rec.impact);
//! }
//! ```
//!
//! ### Walking a Session
//!
//! ```
//! use packaging_audit::{AnswerLevel, AuditSession, AuditStep, UserProfile};
//!
//! fn main() -> packaging_audit::Result<()> {
//!     let mut session = AuditSession::new();
//!     session.set_profile(UserProfile {
//!         company: "Acme Foods".into(),
//!         name: "Jane Doe".into(),
//!         email: "jane@acme.example".into(),
//!         ..UserProfile::default()
//!     })?;
//!     session.advance()?;
//!     assert_eq!(session.step(), AuditStep::StrategicSurvey);
//!
//!     // An incomplete section cannot be left.
//!     session.answer(0, AnswerLevel::Advanced)?;
//!     assert!(session.advance().is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): the Gemini narrative client and the webhook sink.
//!   This adds the `reqwest` dependency. Without it the audit runs fully
//!   offline.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Score math converts between counts and f64 throughout
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Render functions are inherently long
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod narrative;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod session;
pub mod telemetry;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{AuditError, ErrorContext, OptionContext, Result};
pub use model::{
    Answer, AnswerLevel, AnswerSet, Category, CompletedAnswers, Question, Section, UserProfile,
};
pub use narrative::{NarrativeGenerator, NoOpNarrator};
pub use pipeline::{AuditPipeline, Submission};
pub use reports::{AuditReport, ReportFormat, ReportGenerator};
pub use scoring::{AuditResult, AuditScorer, MaturityLevel, Recommendation};
pub use session::{AuditSession, AuditStep, SubmissionTicket};
pub use telemetry::{SubmissionPayload, SubmissionSink};
