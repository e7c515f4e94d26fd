//! Audit session flow.
//!
//! A session walks `ProfileEntry → StrategicSurvey → OperationalSurvey →
//! CapabilitySurvey → Submitting → Results`. Forward moves are gated on the
//! current step being complete; `Submitting` is one-way and only `reset`
//! leaves `Results`.

mod machine;
mod step;

pub use machine::{AuditSession, SubmissionTicket};
pub use step::{AuditStep, TOTAL_STEPS};
