//! Fire-and-forget delivery on a background thread.

use super::payload::SubmissionPayload;
use super::sinks::SubmissionSink;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Handle to an in-flight delivery.
///
/// Dropping the handle detaches the thread. Call [`DeliveryHandle::wait`]
/// before the process exits so the request is not cut short.
#[derive(Debug, Default)]
#[must_use = "dropping the handle detaches the delivery thread"]
pub struct DeliveryHandle {
    thread: Option<JoinHandle<()>>,
}

impl DeliveryHandle {
    /// A handle with nothing to wait for.
    pub const fn finished() -> Self {
        Self { thread: None }
    }

    /// Block until the delivery attempt has ended.
    pub fn wait(mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("submission delivery thread panicked");
            }
        }
    }
}

/// Deliver `payload` to `sink` on a background thread.
///
/// Errors are logged and swallowed; nothing is retried.
pub fn dispatch(sink: Arc<dyn SubmissionSink>, payload: SubmissionPayload) -> DeliveryHandle {
    let spawned = std::thread::Builder::new()
        .name("submission-sync".to_string())
        .spawn(move || {
            if let Err(e) = sink.deliver(&payload) {
                tracing::warn!("Submission sync via {} failed: {e}", sink.name());
            }
        });

    match spawned {
        Ok(thread) => DeliveryHandle {
            thread: Some(thread),
        },
        Err(e) => {
            tracing::warn!("could not start submission delivery: {e}");
            DeliveryHandle::finished()
        }
    }
}
