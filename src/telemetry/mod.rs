//! Best-effort delivery of completed audits.
//!
//! Each submission (`{profile, scores, result}`) goes to a
//! [`SubmissionSink`] on a background thread. Failures are logged and
//! never reach the user.

mod dispatch;
mod payload;
mod sinks;

pub use dispatch::{dispatch, DeliveryHandle};
pub use payload::SubmissionPayload;
#[cfg(feature = "remote")]
pub use sinks::WebhookSink;
pub use sinks::{build_submission_sink, FanoutSink, NdjsonSink, NullSink, SubmissionSink};
