//! Unified error types for packaging-audit.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining for debugging and user-facing messages for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for packaging-audit operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    /// Errors in the answer set (incomplete sections, bad values)
    #[error("Invalid answers: {context}")]
    Answers {
        context: String,
        #[source]
        source: AnswerErrorKind,
    },

    /// Errors validating the respondent profile
    #[error("Invalid profile: {context}")]
    Profile {
        context: String,
        #[source]
        source: ProfileErrorKind,
    },

    /// Illegal survey state transitions
    #[error("Session transition rejected: {context}")]
    Session {
        context: String,
        #[source]
        source: SessionErrorKind,
    },

    /// Errors from the narrative generation service
    #[error("Narrative generation failed: {context}")]
    Narrative {
        context: String,
        #[source]
        source: RemoteErrorKind,
    },

    /// Errors delivering the submission payload
    #[error("Submission delivery failed: {context}")]
    Telemetry {
        context: String,
        #[source]
        source: RemoteErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific answer error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnswerErrorKind {
    #[error("{section} question {index} is unanswered")]
    Unanswered { section: String, index: usize },

    #[error("{section} expects {expected} answers, got {actual}")]
    WrongLength {
        section: String,
        expected: usize,
        actual: usize,
    },

    #[error("answer value {0} is not one of 2, 5, 9")]
    InvalidLevel(i64),

    #[error("{section} has no question {index}")]
    IndexOutOfRange { section: String, index: usize },

    #[error("Malformed answer file: {0}")]
    Malformed(String),
}

/// Specific profile error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfileErrorKind {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid e-mail address: {0}")]
    InvalidEmail(String),
}

/// Specific session error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SessionErrorKind {
    #[error("cannot {action} from {step}")]
    IllegalTransition { action: &'static str, step: String },

    #[error("current step is incomplete: {0}")]
    Incomplete(String),

    #[error("no survey section is active at {0}")]
    NoActiveSection(String),
}

/// Specific remote-service error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RemoteErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for packaging-audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AuditError {
    /// Create an answer error with context
    pub fn answers(context: impl Into<String>, source: AnswerErrorKind) -> Self {
        Self::Answers {
            context: context.into(),
            source,
        }
    }

    /// Create an answer error for an unanswered question
    pub fn unanswered(section: impl Into<String>, index: usize) -> Self {
        Self::answers(
            "section incomplete",
            AnswerErrorKind::Unanswered {
                section: section.into(),
                index,
            },
        )
    }

    /// Create a profile error with context
    pub fn profile(context: impl Into<String>, source: ProfileErrorKind) -> Self {
        Self::Profile {
            context: context.into(),
            source,
        }
    }

    /// Create a session error with context
    pub fn session(context: impl Into<String>, source: SessionErrorKind) -> Self {
        Self::Session {
            context: context.into(),
            source,
        }
    }

    /// Create an illegal-transition session error
    pub fn illegal_transition(action: &'static str, step: impl std::fmt::Display) -> Self {
        Self::session(
            "state machine",
            SessionErrorKind::IllegalTransition {
                action,
                step: step.to_string(),
            },
        )
    }

    /// Create a narrative error
    pub fn narrative(context: impl Into<String>, source: RemoteErrorKind) -> Self {
        Self::Narrative {
            context: context.into(),
            source,
        }
    }

    /// Create a telemetry error
    pub fn telemetry(context: impl Into<String>, source: RemoteErrorKind) -> Self {
        Self::Telemetry {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from external error types
// ============================================================================

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::answers(
            "JSON deserialization",
            AnswerErrorKind::Malformed(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for AuditError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::answers(
            "YAML deserialization",
            AnswerErrorKind::Malformed(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained onto any existing context so the final
/// message shows the path through the code.
///
/// ```ignore
/// use packaging_audit::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path).context("reading answer file")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AuditError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AuditError, new_ctx: &str) -> AuditError {
    match err {
        AuditError::Answers {
            context: existing,
            source,
        } => AuditError::Answers {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Profile {
            context: existing,
            source,
        } => AuditError::Profile {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Session {
            context: existing,
            source,
        } => AuditError::Session {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Narrative {
            context: existing,
            source,
        } => AuditError::Narrative {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Telemetry {
            context: existing,
            source,
        } => AuditError::Telemetry {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Io {
            path,
            message,
            source,
        } => AuditError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AuditError::Config(msg) => AuditError::Config(chain_context(new_ctx, &msg)),
        AuditError::Validation(msg) => AuditError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AuditError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| AuditError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::unanswered("Strategic", 2);
        let display = err.to_string();
        assert!(
            display.contains("Invalid answers"),
            "Error message should mention answers: {display}"
        );

        let err = AuditError::profile("step 1", ProfileErrorKind::MissingField("company"));
        assert!(err.to_string().contains("profile"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AuditError::io("/path/to/answers.yaml", io_err);

        assert!(err.to_string().contains("/path/to/answers.yaml"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AuditError::answers(
                "base",
                AnswerErrorKind::InvalidLevel(4),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AuditError::Answers { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Answers error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(AuditError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(AuditError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(Some(7).context_none("unused").unwrap(), 7);
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
