//! Submission sinks.
//!
//! Provides trait-based delivery of completed audits: NDJSON (one JSON
//! object per line) and webhook (HTTP POST, feature-gated). Delivery is
//! best effort; webhook failures are logged and never returned.

use super::payload::SubmissionPayload;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Receives completed audits.
pub trait SubmissionSink: Send + Sync {
    /// Deliver one submission.
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

// ============================================================================
// Null sink
// ============================================================================

/// Discards every submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SubmissionSink for NullSink {
    fn deliver(&self, _payload: &SubmissionPayload) -> anyhow::Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

// ============================================================================
// NDJSON sink
// ============================================================================

/// Appends each submission as one JSON line.
pub struct NdjsonSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl NdjsonSink {
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn append_to(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening submission log {}", path.display()))?;
        Ok(Self::new(Box::new(file)))
    }
}

impl SubmissionSink for NdjsonSink {
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("submission log writer poisoned"))?;
        serde_json::to_writer(&mut *writer, payload)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ndjson"
    }
}

// ============================================================================
// Webhook sink
// ============================================================================

/// POSTs each submission as JSON to a URL.
#[cfg(feature = "remote")]
pub struct WebhookSink {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl WebhookSink {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: std::time::Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            url: url.into(),
            client,
        }
    }
}

#[cfg(feature = "remote")]
impl SubmissionSink for WebhookSink {
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        match self.client.post(&self.url).json(payload).send() {
            Ok(r) if r.status().is_success() => {
                tracing::info!("Diagnostic data synchronized with webhook");
            }
            Ok(r) => tracing::warn!("Webhook returned status {}", r.status()),
            Err(e) => tracing::warn!("Webhook delivery failed: {e}"),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

// ============================================================================
// Fan-out
// ============================================================================

/// Delivers to several sinks; one sink failing does not stop the others.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn SubmissionSink>>,
}

impl FanoutSink {
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn SubmissionSink>>) -> Self {
        Self { sinks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl SubmissionSink for FanoutSink {
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        for sink in &self.sinks {
            if let Err(e) = sink.deliver(payload) {
                tracing::warn!("{} sink failed: {e}", sink.name());
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fanout"
    }
}

// ============================================================================
// Sink builder
// ============================================================================

/// Build the submission sink described by the telemetry settings.
///
/// A log file that cannot be opened is skipped with a warning.
pub fn build_submission_sink(config: &crate::config::TelemetryConfig) -> Arc<dyn SubmissionSink> {
    let mut sinks: Vec<Arc<dyn SubmissionSink>> = Vec::new();

    if let Some(path) = &config.log_file {
        match NdjsonSink::append_to(path) {
            Ok(sink) => sinks.push(Arc::new(sink)),
            Err(e) => tracing::warn!("Submission log disabled: {e:#}"),
        }
    }

    #[cfg(feature = "remote")]
    if let Some(url) = &config.webhook_url {
        sinks.push(Arc::new(WebhookSink::new(
            url.clone(),
            std::time::Duration::from_secs(config.timeout_secs),
        )));
    }

    #[cfg(not(feature = "remote"))]
    if config.webhook_url.is_some() {
        tracing::warn!("webhook configured but the remote feature is not enabled");
    }

    match sinks.len() {
        0 => Arc::new(NullSink),
        1 => sinks.remove(0),
        _ => Arc::new(FanoutSink::new(sinks)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLevel, CompletedAnswers, UserProfile};
    use crate::scoring::AuditScorer;

    fn payload() -> SubmissionPayload {
        let answers = CompletedAnswers::uniform(AnswerLevel::Advanced);
        let result = AuditScorer::new().score(&answers);
        SubmissionPayload::new(UserProfile::default(), answers, result)
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ndjson_sink_writes_one_line_per_submission() {
        let buffer = SharedBuffer::default();
        let sink = NdjsonSink::new(Box::new(buffer.clone()));
        sink.deliver(&payload()).unwrap();
        sink.deliver(&payload()).unwrap();

        let output = buffer.0.lock().unwrap();
        let text = String::from_utf8_lossy(&output);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["result"]["maturity"], "High");
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn deliver(&self, _payload: &SubmissionPayload) -> anyhow::Result<()> {
            anyhow::bail!("boom")
        }
        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_fanout_continues_after_failure() {
        let buffer = SharedBuffer::default();
        let fanout = FanoutSink::new(vec![
            Arc::new(FailingSink),
            Arc::new(NdjsonSink::new(Box::new(buffer.clone()))),
        ]);
        assert_eq!(fanout.len(), 2);
        fanout.deliver(&payload()).unwrap();
        assert!(!buffer.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_builder_defaults_to_null() {
        let sink = build_submission_sink(&crate::config::TelemetryConfig::default());
        assert_eq!(sink.name(), "null");
    }

    #[test]
    fn test_builder_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.ndjson");
        let config = crate::config::TelemetryConfig {
            log_file: Some(path.clone()),
            ..Default::default()
        };
        let sink = build_submission_sink(&config);
        assert_eq!(sink.name(), "ndjson");
        sink.deliver(&payload()).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().ends_with('\n'));
    }

    #[test]
    fn test_builder_skips_unopenable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = crate::config::TelemetryConfig {
            log_file: Some(dir.path().join("missing").join("submissions.ndjson")),
            ..Default::default()
        };
        let sink = build_submission_sink(&config);
        assert_eq!(sink.name(), "null");
    }

    #[test]
    fn test_append_to_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("submissions.ndjson");
        let err = NdjsonSink::append_to(&path).err().unwrap();
        assert!(err.to_string().contains("opening submission log"));
        assert!(err.to_string().contains("submissions.ndjson"));
    }
}
